//! Page controls under a list table.

use admin_core::records::Resource;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::list_handle::ListHandle;

#[component]
pub fn Paginator<T: Resource>(handle: ListHandle<T>) -> impl IntoView {
    let ctx = use_app_context();
    let options = ctx.config.with_value(|c| c.page_size_options.clone());

    let index = move || handle.page_window().index;
    let label = move || handle.page_window().label(handle.visible_len());
    let at_first = move || index() == 0;
    let at_last = move || index() + 1 >= handle.page_count();

    view! {
        <div class="paginator">
            <label class="rows-per-page">
                "Rows per page: "
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        handle.set_page_size(size);
                    }
                }>
                    {options
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option
                                    value=size.to_string()
                                    selected=move || handle.page_window().size == size
                                >
                                    {size}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <span class="page-label">{label}</span>
            <button disabled=at_first on:click=move |_| handle.set_page(index().saturating_sub(1))>
                "‹"
            </button>
            <button disabled=at_last on:click=move |_| handle.set_page(index() + 1)>
                "›"
            </button>
        </div>
    }
}
