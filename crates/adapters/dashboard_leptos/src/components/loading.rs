//! Loading indicator component.

use leptos::prelude::*;

/// A loading indicator with an optional message.
#[component]
pub fn Loading(
    /// Text shown while loading.
    #[prop(default = "Loading\u{2026}".into(), into)]
    message: String,
) -> impl IntoView {
    view! {
        <p class="loading">{message}</p>
    }
}
