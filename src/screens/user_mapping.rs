//! User-Course Mapping Screen
//!
//! Assigns users to courses. Rows are searched by the resolved user and
//! course names, so both lookup collections are loaded first.

use std::rc::Rc;

use admin_core::records::{RecordId, UserCourseMapping};
use admin_core::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, Paginator, SearchBox};
use crate::context::use_app_context;
use crate::list_handle::ListHandle;
use crate::store::{course_name, refresh_courses, refresh_users, use_app_store, user_name, AppStateStoreFields};

fn parse_id(value: &str) -> Option<RecordId> {
    value.parse().ok()
}

#[component]
pub fn UserCourseMappingScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let mappings = ListHandle::<UserCourseMapping>::new(ctx);

    mappings.set_search_keys(Rc::new(move |m: &UserCourseMapping| {
        [user_name(store, m.user_id), course_name(store, m.course_id)]
            .into_iter()
            .flatten()
            .collect()
    }));
    mappings.open_draft(None);
    spawn_local(async move {
        refresh_users(store, ctx).await;
        refresh_courses(store, ctx).await;
        mappings.load();
    });

    let editing = move || mappings.draft_value(|m| m.id.is_some());
    let on_submit = move |_| {
        mappings.save_draft(move |_| mappings.open_draft(None));
    };

    view! {
        <section class="screen">
            <h1 class="screen-title">"User-Course Mapping"</h1>

            <div class="mapping-form">
                <select
                    on:change=move |ev| {
                        let id = parse_id(&event_target_value(&ev));
                        mappings.edit_draft(|m| m.user_id = id);
                    }
                >
                    <option value="" selected=move || mappings.draft_value(|m| m.user_id.is_none())>
                        "Select User"
                    </option>
                    <For
                        each=move || store.users().get()
                        key=|user| user.id
                        children=move |user| {
                            let id = user.id;
                            view! {
                                <option
                                    value=id.map(|id| id.to_string()).unwrap_or_default()
                                    selected=move || mappings.draft_value(|m| m.user_id.is_some() && m.user_id == id)
                                >
                                    {user.name}
                                </option>
                            }
                        }
                    />
                </select>
                <select
                    on:change=move |ev| {
                        let id = parse_id(&event_target_value(&ev));
                        mappings.edit_draft(|m| m.course_id = id);
                    }
                >
                    <option value="" selected=move || mappings.draft_value(|m| m.course_id.is_none())>
                        "Select Course"
                    </option>
                    <For
                        each=move || store.courses().get()
                        key=|course| course.id
                        children=move |course| {
                            let id = course.id;
                            view! {
                                <option
                                    value=id.map(|id| id.to_string()).unwrap_or_default()
                                    selected=move || mappings.draft_value(|m| m.course_id.is_some() && m.course_id == id)
                                >
                                    {course.name}
                                </option>
                            }
                        }
                    />
                </select>
                <button
                    class="btn-primary"
                    disabled=move || !mappings.can_save() || mappings.busy()
                    on:click=on_submit
                >
                    {move || if editing() { "Save" } else { "Add Mapping" }}
                </button>
                <Show when=editing>
                    <button class="btn-outlined" on:click=move |_| mappings.open_draft(None)>
                        "Cancel Edit"
                    </button>
                </Show>
            </div>

            <div class="toolbar">
                <SearchBox
                    placeholder="Search by user or course"
                    value=Signal::derive(move || mappings.search_text())
                    on_input=move |text: String| mappings.set_search_text(text)
                />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"User ID"</th>
                        <th>"User Name"</th>
                        <th>"Course ID"</th>
                        <th>"Course Name"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || mappings.rows()
                        key=|m| (m.id, m.user_id, m.course_id)
                        children=move |mapping| {
                            let id = mapping.id();
                            let show_id = |id: Option<RecordId>| id.map(|id| id.to_string()).unwrap_or_default();
                            let user = user_name(store, mapping.user_id).unwrap_or_else(|| "Unknown".into());
                            let course = course_name(store, mapping.course_id).unwrap_or_else(|| "Unknown".into());
                            let editing = mapping.clone();
                            view! {
                                <tr>
                                    <td>{show_id(mapping.user_id)}</td>
                                    <td>{user}</td>
                                    <td>{show_id(mapping.course_id)}</td>
                                    <td>{course}</td>
                                    <td class="actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| mappings.open_draft(Some(editing.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            disabled=Signal::derive(move || mappings.busy())
                                            on_confirm=move |_: ()| {
                                                if let Some(id) = id {
                                                    mappings.remove(id);
                                                }
                                            }
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Paginator handle=mappings />
        </section>
    }
}
