use crate::components::{use_snackbar, ImageCard, LoadingSpinner, Pagination};
use crate::remote::ServerFnApi;
use catworld_app::application::gallery::{self, GalleryState, SyncFailure};
use catworld_app::domain::{Image, VoteDirection};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = ServerFnApi;
    let snackbar = use_snackbar();
    let state = RwSignal::new(GalleryState::new());
    let loading = RwSignal::new(false);
    let page = Memo::new(move |_| state.with(|s| s.page));

    // Page changes refetch the listing
    Effect::new(move |_| {
        let page = page.get();
        loading.set(true);
        spawn_local(async move {
            let result = gallery::fetch_page(&api, page).await;
            let mut notice = None;
            state.update(|s| notice = s.apply_page(result));
            loading.set(false);
            if let Some(notice) = notice {
                snackbar.show(notice);
            }
        });
    });

    Effect::new(move |_| {
        spawn_local(async move {
            let result = gallery::refresh_favourites(&api).await;
            let mut notice = None;
            state.update(|s| notice = s.apply_favourites(result, SyncFailure::FetchFavourites));
            if let Some(notice) = notice {
                snackbar.show(notice);
            }
        });
        spawn_local(async move {
            let result = gallery::refresh_votes(&api).await;
            let mut notice = None;
            state.update(|s| notice = s.apply_votes(result, SyncFailure::FetchVotes));
            if let Some(notice) = notice {
                snackbar.show(notice);
            }
        });
    });

    let on_favourite = move |image_id: String| {
        spawn_local(async move {
            let favourites = state.with_untracked(|s| s.favourites.clone());
            let result = gallery::toggle_favourite(&api, &favourites, &image_id).await;
            let mut notice = None;
            state.update(|s| notice = s.apply_favourites(result, SyncFailure::SaveFavourite));
            if let Some(notice) = notice {
                snackbar.show(notice);
            }
        });
    };

    let on_vote = move |image_id: String, direction: VoteDirection| {
        spawn_local(async move {
            let result = gallery::cast_vote(&api, &image_id, direction).await;
            let mut notice = None;
            state.update(|s| notice = s.apply_votes(result, SyncFailure::Vote));
            if let Some(notice) = notice {
                snackbar.show(notice);
            }
        });
    };

    let card = move |image: Image| {
        let id = image.id.clone();
        let score = {
            let id = id.clone();
            Signal::derive(move || state.with(|s| s.score(&id)))
        };
        let is_favourite = {
            let id = id.clone();
            Signal::derive(move || state.with(|s| s.is_favourite(&id)))
        };
        let vote_id = id.clone();
        view! {
            <ImageCard
                image=image
                score=score
                is_favourite=is_favourite
                on_vote=Callback::new(move |direction| on_vote(vote_id.clone(), direction))
                on_favourite=Callback::new(move |_| on_favourite(id.clone()))
            />
        }
    };

    view! {
        <div class="gallery">
            <h1 class="gallery__title">"My Cats"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <LoadingSpinner label="Loading cats..."/> }
            >
                <div class="gallery__grid">
                    <For
                        each=move || state.with(|s| s.images.clone())
                        key=|image| image.id.clone()
                        children=card
                    />
                </div>
            </Show>
            <Pagination
                has_previous=Signal::derive(move || state.with(|s| s.has_previous_page()))
                has_next=Signal::derive(move || state.with(|s| s.has_next_page()))
                on_previous=Callback::new(move |_| state.update(|s| s.previous_page()))
                on_next=Callback::new(move |_| state.update(|s| s.next_page()))
            />
        </div>
    }
}
