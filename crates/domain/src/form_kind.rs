//! The three forms and their fixed endpoint and acknowledgment texts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Device,
    Group,
    Color,
}

impl FormKind {
    /// All form kinds, in page order.
    pub const ALL: [Self; 3] = [Self::Device, Self::Group, Self::Color];

    /// Path the form POSTs to.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Device => "/devices",
            Self::Group => "/groups",
            Self::Color => "/color",
        }
    }

    /// Acknowledgment shown when the collaborator accepted the request.
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Device => "Device added",
            Self::Group => "Group added",
            Self::Color => "Color set",
        }
    }

    /// Prefix of the acknowledgment shown on failure, followed by the error text.
    #[must_use]
    pub fn failure_label(self) -> &'static str {
        match self {
            Self::Device => "Error adding device: ",
            Self::Group => "Error adding group: ",
            Self::Color => "Error setting color: ",
        }
    }

    /// DOM id of the `<form>` element.
    #[must_use]
    pub fn form_id(self) -> &'static str {
        match self {
            Self::Device => "device-form",
            Self::Group => "group-form",
            Self::Color => "color-form",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Device => "device",
            Self::Group => "group",
            Self::Color => "color",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_each_kind_to_its_endpoint() {
        assert_eq!(FormKind::Device.path(), "/devices");
        assert_eq!(FormKind::Group.path(), "/groups");
        assert_eq!(FormKind::Color.path(), "/color");
    }

    #[test]
    fn should_use_distinct_form_ids() {
        let ids: std::collections::HashSet<_> =
            FormKind::ALL.iter().map(|kind| kind.form_id()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn should_deserialize_snake_case() {
        let kind: FormKind = serde_json::from_str("\"color\"").unwrap();
        assert_eq!(kind, FormKind::Color);
    }
}
