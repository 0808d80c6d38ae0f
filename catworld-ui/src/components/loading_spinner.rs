use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            {label.map(|text| view! { <p class="loading__text">{text}</p> })}
        </div>
    }
}
