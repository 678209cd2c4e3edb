//! Question Bank Screen
//!
//! Questions filtered by course chips and searched by text or by the
//! course's name and code. New questions arrive through CSV upload.

use std::rc::Rc;

use admin_core::records::{Course, Question};
use admin_core::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CsvUploadButton, DeleteConfirmButton, Paginator, SearchBox};
use crate::context::use_app_context;
use crate::list_handle::ListHandle;
use crate::store::{course_keys, refresh_courses, use_app_store, AppStateStoreFields};

#[component]
fn CourseChip(
    label: String,
    value: Option<String>,
    handle: ListHandle<Question>,
) -> impl IntoView {
    let selected = value.clone();
    let class = move || {
        if handle.entity_filter() == selected {
            "chip chip-active"
        } else {
            "chip"
        }
    };
    view! {
        <button class=class on:click=move |_| handle.set_entity_filter(value.clone())>
            {label}
        </button>
    }
}

#[component]
pub fn QuestionListScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let questions = ListHandle::<Question>::new(ctx);

    questions.set_search_keys(Rc::new(move |q: &Question| {
        let mut keys = vec![q.question_text.clone()];
        keys.extend(course_keys(store, q.course_id));
        keys
    }));
    spawn_local(async move {
        refresh_courses(store, ctx).await;
        questions.load();
    });

    view! {
        <section class="screen">
            <h1 class="screen-title">"Question Bank"</h1>
            <div class="chip-row">
                <CourseChip label="All".to_string() value=None handle=questions />
                <For
                    each=move || store.courses().get()
                    key=|course| course.id
                    children=move |course: Course| {
                        let value = course.id.map(|id| id.to_string());
                        view! { <CourseChip label=course.name value=value handle=questions /> }
                    }
                />
            </div>
            <div class="toolbar">
                <SearchBox
                    placeholder="Search by question, course name or code"
                    value=Signal::derive(move || questions.search_text())
                    on_input=move |text: String| questions.set_search_text(text)
                />
                <CsvUploadButton handle=questions />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Question"</th>
                        <th>"Options"</th>
                        <th>"Correct Answer"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || questions.rows()
                        key=|q| (q.id, q.question_text.clone(), q.correct_answer.clone())
                        children=move |question| {
                            let id = question.id();
                            view! {
                                <tr>
                                    <td>{question.id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                    <td>{question.question_text}</td>
                                    <td>{question.options.join(", ")}</td>
                                    <td>{question.correct_answer}</td>
                                    <td class="actions">
                                        <DeleteConfirmButton
                                            disabled=Signal::derive(move || questions.busy())
                                            on_confirm=move |_: ()| {
                                                if let Some(id) = id {
                                                    questions.remove(id);
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
            <Show when=move || questions.visible_len() == 0>
                <p class="empty">"No questions found"</p>
            </Show>
            <Paginator handle=questions />
        </section>
    }
}
