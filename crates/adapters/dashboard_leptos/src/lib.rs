//! # ledbridge-dashboard
//!
//! Browser front end: three forms wired to the controller API through the
//! form bridge, plus read-only device and group listings.
//!
//! Built for `wasm32-unknown-unknown` and served from the same origin as the
//! API, so every request path is relative.

use leptos::prelude::*;

pub mod api;
mod components;
pub mod dom;

use components::{Catalog, CatalogRevision, ColorFormView, DeviceFormView, GroupFormView};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_context(CatalogRevision::default());

    view! {
        <main>
            <h1>"LED Controller"</h1>
            <section>
                <h2>"Add Device"</h2>
                <DeviceFormView/>
            </section>
            <section>
                <h2>"Create Group"</h2>
                <GroupFormView/>
            </section>
            <section>
                <h2>"Set Color"</h2>
                <ColorFormView/>
            </section>
            <Catalog/>
        </main>
    }
}
