//! User Management Screen
//!
//! Users with their role and menu permissions. Role options are fixed;
//! permission options come from the server.

use admin_core::records::{UserRole, ROLE_OPTIONS};
use admin_core::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, FormDialog, Paginator, SearchBox};
use crate::context::use_app_context;
use crate::list_handle::ListHandle;
use crate::store::{refresh_menus, refresh_users, use_app_store, AppStateStoreFields};

#[component]
pub fn UserListScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let users = ListHandle::<UserRole>::new(ctx);
    users.load();
    spawn_local(refresh_menus(store, ctx));

    let on_save = move |_: ()| {
        users.save_draft(move |_| spawn_local(refresh_users(store, ctx)));
    };

    view! {
        <section class="screen">
            <h1 class="screen-title">"User Management"</h1>
            <div class="toolbar">
                <SearchBox
                    placeholder="Search by name, email or role"
                    value=Signal::derive(move || users.search_text())
                    on_input=move |text: String| users.set_search_text(text)
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let role = event_target_value(&ev);
                        users.set_entity_filter((!role.is_empty()).then_some(role));
                    }
                >
                    <option value="" selected=move || users.entity_filter().is_none()>"All roles"</option>
                    {ROLE_OPTIONS
                        .iter()
                        .map(|role| view! { <option value=*role>{*role}</option> })
                        .collect_view()}
                </select>
                <button class="btn-primary" on:click=move |_| users.open_draft(None)>
                    "Add User"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Permissions"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .rows()
                            .into_iter()
                            .map(|user| {
                                let id = user.id();
                                let editing = user.clone();
                                view! {
                                    <tr>
                                        <td>{user.name}</td>
                                        <td>{user.email}</td>
                                        <td>{user.role}</td>
                                        <td>{user.permissions.join(", ")}</td>
                                        <td class="actions">
                                            <button
                                                class="edit-btn"
                                                on:click=move |_| users.open_draft(Some(editing.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton
                                                disabled=Signal::derive(move || users.busy())
                                                on_confirm=move |_: ()| {
                                                    if let Some(id) = id {
                                                        users.remove(id);
                                                    }
                                                }
                                            />
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Paginator handle=users />

            <Show when=move || users.draft().is_some()>
                <FormDialog
                    title=Signal::derive(move || {
                        if users.draft_value(|u| u.id.is_some()) { "Edit User".to_string() } else { "Add User".to_string() }
                    })
                    save_disabled=Signal::derive(move || !users.can_save() || users.busy())
                    on_save=on_save
                    on_cancel=move |_: ()| users.discard_draft()
                >
                    <label>"Name"</label>
                    <input
                        type="text"
                        prop:value=move || users.draft_value(|u| u.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            users.edit_draft(|u| u.name = value);
                        }
                    />
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || users.draft_value(|u| u.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            users.edit_draft(|u| u.email = value);
                        }
                    />
                    <label>"Role"</label>
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        users.edit_draft(|u| u.role = value);
                    }>
                        <option value="" selected=move || users.draft_value(|u| u.role.is_empty())>
                            "Select role"
                        </option>
                        {ROLE_OPTIONS
                            .iter()
                            .map(|role| {
                                let role = *role;
                                view! {
                                    <option
                                        value=role
                                        selected=move || users.draft_value(|u| u.role == role)
                                    >
                                        {role}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <label>"Permissions"</label>
                    <div class="permission-list">
                        <For
                            each=move || store.menus().get()
                            key=|menu| menu.clone()
                            children=move |menu| {
                                let toggled = menu.clone();
                                let checked = menu.clone();
                                view! {
                                    <label class="permission">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || users.draft_value(|u| u.permissions.contains(&checked))
                                            on:change=move |_| users.edit_draft(|u| u.toggle_permission(&toggled))
                                        />
                                        {menu}
                                    </label>
                                }
                            }
                        />
                    </div>
                </FormDialog>
            </Show>
        </section>
    }
}
