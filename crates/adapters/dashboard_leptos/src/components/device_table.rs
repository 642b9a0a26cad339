//! Device table component for displaying registered devices.

use leptos::prelude::*;
use ledbridge_domain::catalog::DeviceInfo;

/// A table displaying a list of devices.
#[component]
pub fn DeviceTable(
    /// The list of devices to display.
    devices: Vec<DeviceInfo>,
) -> impl IntoView {
    if devices.is_empty() {
        view! {
            <p>"No devices registered."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"IP"</th>
                        <th>"Port"</th>
                        <th>"Pixels"</th>
                    </tr>
                </thead>
                <tbody>
                    {devices.into_iter().map(|device| {
                        view! {
                            <DeviceRow device/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the device table.
#[component]
fn DeviceRow(
    /// The device to display.
    device: DeviceInfo,
) -> impl IntoView {
    view! {
        <tr>
            <td>{device.name}</td>
            <td>{device.ip}</td>
            <td>{device.port}</td>
            <td>{device.pixels}</td>
        </tr>
    }
}
