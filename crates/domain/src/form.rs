//! Raw forms — the text held by each form's input fields at submission time.
//!
//! A form is read once per submission and immediately turned into its
//! payload with [`into_payload`](DeviceForm::into_payload). Missing fields
//! read as empty text, like an input left blank.
//!
//! When deserialized, numeric fields also accept a bare number, which is kept
//! as its decimal text.

use serde::{Deserialize, Deserializer, Serialize};

use crate::form_kind::FormKind;
use crate::number::FormInt;
use crate::payload::{ColorSet, DeviceCreate, GroupCreate, split_device_names};

/// DOM ids of the input elements bound to each form field.
pub mod field {
    pub const DEVICE_NAME: &str = "device-name";
    pub const DEVICE_IP: &str = "device-ip";
    pub const DEVICE_PORT: &str = "device-port";
    pub const DEVICE_PIXELS: &str = "device-pixels";

    pub const GROUP_NAME: &str = "group-name";
    pub const GROUP_DEVICES: &str = "group-devices";

    pub const COLOR_GROUP: &str = "color-group";
    pub const COLOR_R: &str = "color-r";
    pub const COLOR_G: &str = "color-g";
    pub const COLOR_B: &str = "color-b";
}

/// Read a numeric field as text, accepting a string or a bare number.
fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}

/// Fields of the "add device" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceForm {
    pub name: String,
    pub ip: String,
    #[serde(deserialize_with = "text_or_number")]
    pub port: String,
    #[serde(deserialize_with = "text_or_number")]
    pub pixels: String,
}

impl DeviceForm {
    pub const KIND: FormKind = FormKind::Device;

    /// Build the `POST /devices` body.
    #[must_use]
    pub fn into_payload(self) -> DeviceCreate {
        DeviceCreate {
            port: FormInt::parse(&self.port),
            pixels: FormInt::parse(&self.pixels),
            name: self.name,
            ip: self.ip,
        }
    }
}

/// Fields of the "add group" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupForm {
    pub name: String,
    /// Comma-separated device names.
    pub devices: String,
}

impl GroupForm {
    pub const KIND: FormKind = FormKind::Group;

    /// Build the `POST /groups` body.
    #[must_use]
    pub fn into_payload(self) -> GroupCreate {
        GroupCreate {
            devices: split_device_names(&self.devices),
            name: self.name,
        }
    }
}

/// Fields of the "set color" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorForm {
    pub group: String,
    #[serde(deserialize_with = "text_or_number")]
    pub r: String,
    #[serde(deserialize_with = "text_or_number")]
    pub g: String,
    #[serde(deserialize_with = "text_or_number")]
    pub b: String,
}

impl ColorForm {
    pub const KIND: FormKind = FormKind::Color;

    /// Build the `POST /color` body.
    #[must_use]
    pub fn into_payload(self) -> ColorSet {
        ColorSet {
            r: FormInt::parse(&self.r),
            g: FormInt::parse(&self.g),
            b: FormInt::parse(&self.b),
            group: self.group,
        }
    }
}
