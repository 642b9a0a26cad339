//! Form port — read the current text of the fields bound to a form.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use ledbridge_domain::form::{ColorForm, DeviceForm, GroupForm, field};

/// Source of field values, keyed by the id of the bound input element.
///
/// Values are read at the moment of submission, never cached. A field that
/// does not exist reads as the empty string.
pub trait FieldSource {
    fn value(&self, field_id: &str) -> String;
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn value(&self, field_id: &str) -> String {
        self.get(field_id).cloned().unwrap_or_default()
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn value(&self, field_id: &str) -> String {
        self.get(field_id).cloned().unwrap_or_default()
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn value(&self, field_id: &str) -> String {
        (**self).value(field_id)
    }
}

/// A form that can be read out of a [`FieldSource`].
pub trait ReadForm: Sized {
    fn read(fields: &impl FieldSource) -> Self;
}

impl ReadForm for DeviceForm {
    fn read(fields: &impl FieldSource) -> Self {
        Self {
            name: fields.value(field::DEVICE_NAME),
            ip: fields.value(field::DEVICE_IP),
            port: fields.value(field::DEVICE_PORT),
            pixels: fields.value(field::DEVICE_PIXELS),
        }
    }
}

impl ReadForm for GroupForm {
    fn read(fields: &impl FieldSource) -> Self {
        Self {
            name: fields.value(field::GROUP_NAME),
            devices: fields.value(field::GROUP_DEVICES),
        }
    }
}

impl ReadForm for ColorForm {
    fn read(fields: &impl FieldSource) -> Self {
        Self {
            group: fields.value(field::COLOR_GROUP),
            r: fields.value(field::COLOR_R),
            g: fields.value(field::COLOR_G),
            b: fields.value(field::COLOR_B),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn should_read_device_form_by_element_id() {
        let source = fields(&[
            ("device-name", "strip"),
            ("device-ip", "10.0.0.2"),
            ("device-port", "6454"),
            ("device-pixels", "150"),
        ]);
        let form = DeviceForm::read(&source);
        assert_eq!(form.name, "strip");
        assert_eq!(form.ip, "10.0.0.2");
        assert_eq!(form.port, "6454");
        assert_eq!(form.pixels, "150");
    }

    #[test]
    fn should_read_missing_fields_as_empty_text() {
        let form = ColorForm::read(&BTreeMap::<String, String>::new());
        assert_eq!(form, ColorForm::default());
    }

    #[test]
    fn should_read_group_form() {
        let source = fields(&[("group-name", "desk"), ("group-devices", "a, b")]);
        let form = GroupForm::read(&source);
        assert_eq!(form.name, "desk");
        assert_eq!(form.devices, "a, b");
    }
}
