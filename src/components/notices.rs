//! Transient notification stack.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notice-stack">
            <For
                each=move || ctx.notices.get().items().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.severity.css_class()>
                            <span class="notice-message">{notice.message}</span>
                            <button
                                class="notice-close"
                                on:click=move |_| ctx.notices.update(|n| n.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
