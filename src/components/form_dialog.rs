//! Modal wrapper for add/edit forms.

use leptos::prelude::*;

#[component]
pub fn FormDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] save_disabled: Signal<bool>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="dialog-header">{move || title.get()}</div>
                <div class="dialog-body">{children()}</div>
                <div class="dialog-actions">
                    <button class="btn-outlined" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn-primary"
                        disabled=move || save_disabled.get()
                        on:click=move |_| on_save.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
