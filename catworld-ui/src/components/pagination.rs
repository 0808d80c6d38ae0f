use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] has_previous: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="pagination__button"
                prop:disabled=move || !has_previous.get()
                on:click=move |_| on_previous.run(())
            >
                "‹ Previous"
            </button>
            <button
                class="pagination__button"
                prop:disabled=move || !has_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next ›"
            </button>
        </div>
    }
}
