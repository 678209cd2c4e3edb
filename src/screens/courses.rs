//! Course Management Screen
//!
//! Searchable course table with add/edit dialog, delete and CSV import.
//! "Find by name" asks the server for an exact name match instead of
//! filtering the loaded rows.

use admin_core::records::Course;
use admin_core::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CsvUploadButton, DeleteConfirmButton, FormDialog, Paginator, SearchBox};
use crate::context::use_app_context;
use crate::list_handle::ListHandle;
use crate::store::{refresh_courses, use_app_store};

#[component]
pub fn CourseListScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let courses = ListHandle::<Course>::new(ctx);
    courses.load();

    let dialog_title = Signal::derive(move || {
        if courses.draft_value(|c| c.id.is_some()) {
            "Edit Course".to_string()
        } else {
            "Add Course".to_string()
        }
    });

    let matches = RwSignal::new(None::<(String, Vec<Course>)>);
    let find_by_name = move |_| {
        let name = courses.search_text().trim().to_string();
        if name.is_empty() {
            return;
        }
        let asked = name.clone();
        courses.lookup("name", name, move |found| {
            matches.try_set(Some((asked, found)));
        });
    };

    let on_save = move |_: ()| {
        courses.save_draft(move |_| spawn_local(refresh_courses(store, ctx)));
    };

    view! {
        <section class="screen">
            <h1 class="screen-title">"Course Management"</h1>
            <div class="toolbar">
                <SearchBox
                    placeholder="Search by course name or code"
                    value=Signal::derive(move || courses.search_text())
                    on_input=move |text: String| courses.set_search_text(text)
                />
                <button
                    class="btn-outlined"
                    disabled=move || courses.busy() || courses.search_text().trim().is_empty()
                    on:click=find_by_name
                >
                    "Find by name"
                </button>
                <button class="btn-primary" on:click=move |_| courses.open_draft(None)>
                    "Add Course"
                </button>
                <CsvUploadButton handle=courses />
            </div>

            {move || {
                matches
                    .get()
                    .map(|(name, found)| {
                        view! {
                            <div class="lookup-panel">
                                <div class="lookup-header">
                                    {format!("Server matches for \"{}\": {}", name, found.len())}
                                    <button class="notice-close" on:click=move |_| matches.set(None)>
                                        "×"
                                    </button>
                                </div>
                                {found
                                    .into_iter()
                                    .map(|course| {
                                        let label = format!("{} ({})", course.name, course.code);
                                        view! {
                                            <div class="lookup-row">
                                                <span>{label}</span>
                                                <button
                                                    class="edit-btn"
                                                    on:click=move |_| courses.open_draft(Some(course.clone()))
                                                >
                                                    "Edit"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Course Name"</th>
                        <th>"Course Code"</th>
                        <th>"Description"</th>
                        <th>"Schedule"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || courses.rows()
                        key=|course| (course.id, course.name.clone(), course.code.clone(), course.description.clone(), course.schedule.clone())
                        children=move |course| {
                            let id = course.id();
                            let editing = course.clone();
                            view! {
                                <tr>
                                    <td>{course.id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                    <td>{course.name}</td>
                                    <td>{course.code}</td>
                                    <td>{course.description}</td>
                                    <td>{course.schedule}</td>
                                    <td class="actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| courses.open_draft(Some(editing.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            disabled=Signal::derive(move || courses.busy())
                                            on_confirm=move |_: ()| {
                                                if let Some(id) = id {
                                                    courses.remove(id);
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
            <Show when=move || courses.visible_len() == 0>
                <p class="empty">"No courses found"</p>
            </Show>
            <Paginator handle=courses />

            <Show when=move || courses.draft().is_some()>
                <FormDialog
                    title=dialog_title
                    save_disabled=Signal::derive(move || !courses.can_save() || courses.busy())
                    on_save=on_save
                    on_cancel=move |_: ()| courses.discard_draft()
                >
                    <label>"Course Name"</label>
                    <input
                        type="text"
                        prop:value=move || courses.draft_value(|c| c.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            courses.edit_draft(|c| c.name = value);
                        }
                    />
                    <label>"Course Code"</label>
                    <input
                        type="text"
                        prop:value=move || courses.draft_value(|c| c.code.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            courses.edit_draft(|c| c.code = value);
                        }
                    />
                    <label>"Description"</label>
                    <input
                        type="text"
                        prop:value=move || courses.draft_value(|c| c.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            courses.edit_draft(|c| c.description = value);
                        }
                    />
                    <label>"Schedule"</label>
                    <input
                        type="date"
                        prop:value=move || courses.draft_value(|c| c.schedule.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            courses.edit_draft(|c| c.schedule = value);
                        }
                    />
                </FormDialog>
            </Show>
        </section>
    }
}
