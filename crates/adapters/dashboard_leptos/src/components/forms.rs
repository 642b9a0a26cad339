//! The device, group and color forms.
//!
//! Each `<form>` only owns its markup. On submit the browser navigation is
//! suppressed, and the bridge reads the input elements by id and posts the
//! payload in a background task. An accepted submission refreshes the
//! registry listings. Nothing is cached between submissions, and
//! several submissions may be in flight at once.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ledbridge_app::services::form_bridge::FormBridge;
use ledbridge_domain::form::field;
use ledbridge_domain::form_kind::FormKind;

use crate::api::GlooApiClient;
use crate::components::CatalogRevision;
use crate::dom::{AlertNotifier, DomFields};

fn on_submit(kind: FormKind) -> impl FnMut(SubmitEvent) + 'static {
    let revision = expect_context::<CatalogRevision>();
    move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let bridge = FormBridge::new(GlooApiClient::default(), AlertNotifier);
            let outcome = bridge.submit_from(kind, &DomFields).await;
            revision.record(&outcome);
        });
    }
}

/// "Add device" form, posting to `/devices`.
#[component]
pub fn DeviceFormView() -> impl IntoView {
    view! {
        <form id=FormKind::Device.form_id() on:submit=on_submit(FormKind::Device)>
            <input id=field::DEVICE_NAME placeholder="Name"/>
            <input id=field::DEVICE_IP placeholder="IP address"/>
            <input id=field::DEVICE_PORT type="number" placeholder="Port" value="6454"/>
            <input id=field::DEVICE_PIXELS type="number" placeholder="Pixels"/>
            <button type="submit">"Add"</button>
        </form>
    }
}

/// "Create group" form, posting to `/groups`.
#[component]
pub fn GroupFormView() -> impl IntoView {
    view! {
        <form id=FormKind::Group.form_id() on:submit=on_submit(FormKind::Group)>
            <input id=field::GROUP_NAME placeholder="Name"/>
            <input id=field::GROUP_DEVICES placeholder="Devices (comma separated)"/>
            <button type="submit">"Create"</button>
        </form>
    }
}

/// "Set color" form, posting to `/color`.
#[component]
pub fn ColorFormView() -> impl IntoView {
    view! {
        <form id=FormKind::Color.form_id() on:submit=on_submit(FormKind::Color)>
            <input id=field::COLOR_GROUP placeholder="Group"/>
            <input id=field::COLOR_R type="number" placeholder="R"/>
            <input id=field::COLOR_G type="number" placeholder="G"/>
            <input id=field::COLOR_B type="number" placeholder="B"/>
            <button type="submit">"Set"</button>
        </form>
    }
}
