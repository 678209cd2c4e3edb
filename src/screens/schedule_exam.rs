//! Exam Scheduling Screen
//!
//! Form for a new exam followed by the scheduled exams, filterable by course.

use admin_core::records::{ExamSchedule, RecordId};
use admin_core::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, Paginator};
use crate::context::use_app_context;
use crate::list_handle::ListHandle;
use crate::store::{course_name, refresh_courses, use_app_store, AppStateStoreFields};

const DAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

#[component]
pub fn ScheduleExamScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let exams = ListHandle::<ExamSchedule>::new(ctx);
    exams.open_draft(None);
    exams.load();
    spawn_local(refresh_courses(store, ctx));

    // Missing fields raise the required-fields notice on submit.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        exams.save_draft(move |_| exams.open_draft(None));
    };

    let text_input = move |label: &'static str, kind: &'static str, read: fn(&ExamSchedule) -> String, write: fn(&mut ExamSchedule, String)| {
        view! {
            <label>{label}</label>
            <input
                type=kind
                prop:value=move || exams.draft_value(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    exams.edit_draft(|e| write(e, value));
                }
            />
        }
    };
    let number_input = move |label: &'static str, read: fn(&ExamSchedule) -> Option<u32>, write: fn(&mut ExamSchedule, Option<u32>)| {
        view! {
            <label>{label}</label>
            <input
                type="number"
                min="1"
                prop:value=move || exams.draft_value(|e| read(e).map(|n| n.to_string()).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev).trim().parse::<u32>().ok();
                    exams.edit_draft(|e| write(e, value));
                }
            />
        }
    };

    view! {
        <section class="screen">
            <h1 class="screen-title">"Schedule Exam"</h1>

            <form class="schedule-form" on:submit=on_submit>
                <label>"Course"</label>
                <select on:change=move |ev| {
                    let id = event_target_value(&ev).parse::<RecordId>().ok();
                    exams.edit_draft(|e| e.course_id = id);
                }>
                    <option value="" selected=move || exams.draft_value(|e| e.course_id.is_none())>
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
                                    selected=move || exams.draft_value(|e| e.course_id.is_some() && e.course_id == id)
                                >
                                    {course.name}
                                </option>
                            }
                        }
                    />
                </select>
                {text_input("Exam Date", "date", |e| e.exam_date.clone(), |e, v| e.exam_date = v)}
                {text_input("Start Time", "time", |e| e.start_time.clone(), |e, v| e.start_time = v)}
                {number_input("Duration (minutes)", |e| e.duration_minutes, |e, v| e.duration_minutes = v)}
                <label>"Day of Week"</label>
                <select on:change=move |ev| {
                    let day = event_target_value(&ev);
                    exams.edit_draft(|e| e.day_of_week = day);
                }>
                    <option value="" selected=move || exams.draft_value(|e| e.day_of_week.is_empty())>
                        "Select Day"
                    </option>
                    {DAYS
                        .iter()
                        .map(|day| {
                            let day = *day;
                            view! {
                                <option value=day selected=move || exams.draft_value(|e| e.day_of_week == day)>
                                    {day}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                {number_input("Number of Students", |e| e.student_count, |e, v| e.student_count = v)}
                <button type="submit" class="btn-primary" disabled=move || exams.busy()>
                    "Schedule Exam"
                </button>
            </form>

            <h2 class="section-title">"Scheduled Exams"</h2>
            <div class="toolbar">
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let course = event_target_value(&ev);
                        exams.set_entity_filter((!course.is_empty()).then_some(course));
                    }
                >
                    <option value="">"All courses"</option>
                    <For
                        each=move || store.courses().get()
                        key=|course| course.id
                        children=move |course| {
                            view! {
                                <option value=course.id.map(|id| id.to_string()).unwrap_or_default()>
                                    {course.name}
                                </option>
                            }
                        }
                    />
                </select>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Course"</th>
                        <th>"Date"</th>
                        <th>"Start"</th>
                        <th>"Duration"</th>
                        <th>"Day"</th>
                        <th>"Students"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        exams
                            .rows()
                            .into_iter()
                            .map(|exam| {
                                let id = exam.id();
                                let course = course_name(store, exam.course_id).unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>{course}</td>
                                        <td>{exam.exam_date}</td>
                                        <td>{exam.start_time}</td>
                                        <td>{exam.duration_minutes.map(|m| format!("{} min", m)).unwrap_or_default()}</td>
                                        <td>{exam.day_of_week}</td>
                                        <td>{exam.student_count.map(|n| n.to_string()).unwrap_or_default()}</td>
                                        <td class="actions">
                                            <DeleteConfirmButton
                                                disabled=Signal::derive(move || exams.busy())
                                                on_confirm=move |_: ()| {
                                                    if let Some(id) = id {
                                                        exams.remove(id);
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
            <Paginator handle=exams />
        </section>
    }
}
