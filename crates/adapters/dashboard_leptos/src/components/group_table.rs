use leptos::prelude::*;
use ledbridge_domain::catalog::GroupInfo;

/// A table of groups and their member devices.
#[component]
pub fn GroupTable(groups: Vec<GroupInfo>) -> impl IntoView {
    if groups.is_empty() {
        return view! { <p>"No groups defined."</p> }.into_any();
    }

    view! {
        <table>
            <thead>
                <tr>
                    <th>"Group"</th>
                    <th>"Devices"</th>
                </tr>
            </thead>
            <tbody>
                {groups.into_iter().map(|group| {
                    let members = group.device_names().collect::<Vec<_>>().join(", ");
                    view! {
                        <tr>
                            <td>{group.name}</td>
                            <td>{members}</td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
