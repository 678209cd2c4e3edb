//! CSV upload button feeding a list's bulk-import endpoint.

use admin_core::records::Resource;
use leptos::prelude::*;

use crate::list_handle::ListHandle;

#[component]
pub fn CsvUploadButton<T: Resource>(handle: ListHandle<T>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Same file can be picked again after a failed upload.
        input.set_value("");
        if let Some(file) = file {
            handle.import(file);
        }
    };

    view! {
        <label class=move || if handle.busy() { "btn-outlined upload-btn disabled" } else { "btn-outlined upload-btn" }>
            "Upload CSV"
            <input
                type="file"
                accept=".csv"
                hidden=true
                disabled=move || handle.busy()
                on:change=on_change
            />
        </label>
    }
}
