//! Exam Results Screen

use admin_core::records::ExamResult;
use admin_core::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, Paginator, SearchBox};
use crate::context::use_app_context;
use crate::list_handle::ListHandle;
use crate::store::{refresh_users, use_app_store, AppStateStoreFields};

#[component]
pub fn ExamResultsScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let results = ListHandle::<ExamResult>::new(ctx);
    results.load();
    spawn_local(refresh_users(store, ctx));

    let students = move || {
        store
            .users()
            .get()
            .into_iter()
            .filter(|u| u.is_student())
            .collect::<Vec<_>>()
    };

    view! {
        <section class="screen">
            <h1 class="screen-title">"Exam Results"</h1>
            <div class="toolbar">
                <SearchBox
                    placeholder="Search by Student Name or Course"
                    value=Signal::derive(move || results.search_text())
                    on_input=move |text: String| results.set_search_text(text)
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let student = event_target_value(&ev);
                        results.set_entity_filter((!student.is_empty()).then_some(student));
                    }
                >
                    <option value="">"All students"</option>
                    <For
                        each=students
                        key=|user| user.id
                        children=|user| {
                            view! {
                                <option value=user.id.map(|id| id.to_string()).unwrap_or_default()>
                                    {user.name}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Student Name"</th>
                        <th>"Course"</th>
                        <th>"Exam Date"</th>
                        <th>"Score"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || results.rows()
                        key=|r| (r.id, r.student_name.clone(), r.course.clone(), r.exam_date.clone())
                        children=move |result| {
                            let id = result.id();
                            view! {
                                <tr>
                                    <td>{result.student_name}</td>
                                    <td>{result.course}</td>
                                    <td>{result.exam_date}</td>
                                    <td>{result.score}</td>
                                    <td class="actions">
                                        <DeleteConfirmButton
                                            disabled=Signal::derive(move || results.busy())
                                            on_confirm=move |_: ()| {
                                                if let Some(id) = id {
                                                    results.remove(id);
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
            <Show when=move || results.visible_len() == 0>
                <p class="empty">"No results found"</p>
            </Show>
            <Paginator handle=results />
        </section>
    }
}
