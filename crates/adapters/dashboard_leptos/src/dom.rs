//! DOM-backed ports: input fields as a [`FieldSource`], `alert()` as the
//! [`Notifier`].

use ledbridge_app::ports::{FieldSource, Notifier};
use ledbridge_domain::outcome::SubmitOutcome;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Reads `<input>` values from the current document by element id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomFields;

impl FieldSource for DomFields {
    fn value(&self, field_id: &str) -> String {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(field_id))
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }
}

/// Shows each outcome in a modal `alert()` dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, outcome: &SubmitOutcome) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(&outcome.message()) {
            web_sys::console::error_1(&err);
        }
    }
}
