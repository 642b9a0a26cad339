//! Read-only listings of registered devices and groups.

use leptos::prelude::*;
use ledbridge_app::services::catalog_service::CatalogService;
use ledbridge_domain::outcome::SubmitOutcome;

use crate::api::GlooApiClient;
use crate::components::{DeviceTable, GroupTable, Loading};

/// Counter shared through context; the listings reload whenever it moves.
#[derive(Debug, Clone, Copy)]
pub struct CatalogRevision(RwSignal<u64>);

impl Default for CatalogRevision {
    fn default() -> Self {
        Self(RwSignal::new(0))
    }
}

impl CatalogRevision {
    /// Subscribe the current reactive scope to registry changes.
    pub fn track(self) {
        self.0.track();
    }

    /// Mark the registry as changed when `outcome` was accepted.
    pub fn record(self, outcome: &SubmitOutcome) {
        if outcome.is_success() {
            self.0.update(|revision| *revision += 1);
        }
    }
}

/// Devices and groups known to the controller, with a manual refresh.
///
/// Both listings reload after every accepted submission.
#[component]
pub fn Catalog() -> impl IntoView {
    let revision = expect_context::<CatalogRevision>();
    let devices = LocalResource::new(move || {
        revision.track();
        async {
            CatalogService::new(GlooApiClient::default())
                .list_devices()
                .await
        }
    });
    let groups = LocalResource::new(move || {
        revision.track();
        async {
            CatalogService::new(GlooApiClient::default())
                .list_groups()
                .await
        }
    });

    let refresh = move |_| {
        devices.refetch();
        groups.refetch();
    };

    view! {
        <section>
            <h2>"Registry"</h2>
            <button on:click=refresh>"Refresh"</button>

            <h3>"Devices"</h3>
            <Suspense fallback=move || view! { <Loading message="Loading devices\u{2026}"/> }>
                {move || {
                    devices.read().as_ref().map(|result| match result {
                        Ok(list) => view! { <DeviceTable devices=list.clone()/> }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load devices: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>

            <h3>"Groups"</h3>
            <Suspense fallback=move || view! { <Loading message="Loading groups\u{2026}"/> }>
                {move || {
                    groups.read().as_ref().map(|result| match result {
                        Ok(list) => view! { <GroupTable groups=list.clone()/> }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load groups: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
