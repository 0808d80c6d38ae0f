use catworld_app::domain::{Image, VoteDirection};
use leptos::prelude::*;

#[component]
pub fn ImageCard(
    image: Image,
    #[prop(into)] score: Signal<i64>,
    #[prop(into)] is_favourite: Signal<bool>,
    #[prop(into)] on_vote: Callback<VoteDirection>,
    #[prop(into)] on_favourite: Callback<()>,
) -> impl IntoView {
    let alt = image.alt_text();
    let up_id = format!("up_{}", image.id);
    let down_id = format!("down_{}", image.id);
    let fav_id = format!("fav_{}", image.id);

    view! {
        <div class="card">
            <img src=image.url class="card__image" alt=alt/>
            <div class="card__actions">
                <div class="card__votes">
                    <button
                        class="card__button"
                        data-testid=up_id
                        aria-label="vote up"
                        on:click=move |_| on_vote.run(VoteDirection::Up)
                    >
                        "↑"
                    </button>
                    <span class="card__score">{move || score.get()}</span>
                    <button
                        class="card__button"
                        data-testid=down_id
                        aria-label="vote down"
                        on:click=move |_| on_vote.run(VoteDirection::Down)
                    >
                        "↓"
                    </button>
                </div>
                <button
                    class=move || {
                        if is_favourite.get() {
                            "card__button card__favourite card__favourite--active"
                        } else {
                            "card__button card__favourite"
                        }
                    }
                    data-testid=fav_id
                    aria-label="favourite"
                    on:click=move |_| on_favourite.run(())
                >
                    {move || if is_favourite.get() { "♥" } else { "♡" }}
                </button>
            </div>
        </div>
    }
}
