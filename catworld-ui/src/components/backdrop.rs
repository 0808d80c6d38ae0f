use super::LoadingSpinner;
use leptos::prelude::*;

/// Blocks the page with a spinner while `open` is true.
#[component]
pub fn Backdrop(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="backdrop">
                <LoadingSpinner/>
            </div>
        </Show>
    }
}
