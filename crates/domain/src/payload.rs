//! Request payloads sent to the collaborator API.
//!
//! Each payload matches exactly one endpoint's request body. Nothing here
//! checks semantic correctness (IP format, color range, non-negative port);
//! that belongs to the collaborator.

use serde::{Deserialize, Serialize};

use crate::number::{FormInt, is_blank};

/// Body of `POST /devices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCreate {
    pub name: String,
    pub ip: String,
    pub port: FormInt,
    pub pixels: FormInt,
}

/// Body of `POST /groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCreate {
    pub name: String,
    pub devices: Vec<String>,
}

/// Body of `POST /color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    pub group: String,
    pub r: FormInt,
    pub g: FormInt,
    pub b: FormInt,
}

/// Split a comma-separated list of device names.
///
/// Every element is trimmed; empty elements are kept, so an empty input
/// gives a single empty name.
#[must_use]
pub fn split_device_names(text: &str) -> Vec<String> {
    text.split(',')
        .map(|name| name.trim_matches(is_blank).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_trim_each_device_name() {
        assert_eq!(split_device_names("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn should_trim_byte_order_mark_from_names() {
        assert_eq!(split_device_names("\u{feff}a,\u{a0}b\u{feff}"), vec!["a", "b"]);
    }

    #[test]
    fn should_keep_single_empty_name_for_empty_input() {
        assert_eq!(split_device_names(""), vec![""]);
    }

    #[test]
    fn should_keep_empty_names_between_commas() {
        assert_eq!(split_device_names("a,, b,"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn should_serialize_device_create_with_field_names_of_endpoint() {
        let payload = DeviceCreate {
            name: "strip".to_string(),
            ip: "10.0.0.2".to_string(),
            port: FormInt::new(6454),
            pixels: FormInt::new(150),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"name": "strip", "ip": "10.0.0.2", "port": 6454, "pixels": 150})
        );
    }

    #[test]
    fn should_serialize_nan_color_component_as_null() {
        let payload = ColorSet {
            group: "desk".to_string(),
            r: FormInt::new(255),
            g: FormInt::nan(),
            b: FormInt::new(-1),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"group": "desk", "r": 255, "g": null, "b": -1})
        );
    }
}
