//! View-state synchronisation for the image listing.
//!
//! Every mutation is followed by a full re-fetch of the collection it touched;
//! the results are applied to [`GalleryState`] wholesale or not at all.

use super::CatApi;
use crate::domain::{
    find_favourite, tally, Favourite, Image, ImagePage, Notice, PageMeta, Vote, VoteDirection,
};
use catworld_errors::AppError;

pub const PAGE_SIZE: u32 = 12;

/// Which synchronisation step failed, and what the user is told about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncFailure {
    FetchImages,
    FetchFavourites,
    FetchVotes,
    SaveFavourite,
    Vote,
    Upload,
}

impl SyncFailure {
    pub fn message(self) -> &'static str {
        match self {
            Self::FetchImages => "Error fetching cats",
            Self::FetchFavourites => "Error fetching favourites",
            Self::FetchVotes => "Error fetching votes",
            Self::SaveFavourite => "Error saving favourite",
            Self::Vote => "Error voting",
            Self::Upload => "Upload failed",
        }
    }

    pub fn notice(self) -> Notice {
        Notice::error(self.message())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    pub page: u32,
    pub images: Vec<Image>,
    pub meta: PageMeta,
    pub favourites: Vec<Favourite>,
    pub votes: Vec<Vote>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn favourite_for(&self, image_id: &str) -> Option<&Favourite> {
        find_favourite(&self.favourites, image_id)
    }

    pub fn is_favourite(&self, image_id: &str) -> bool {
        self.favourite_for(image_id).is_some()
    }

    pub fn score(&self, image_id: &str) -> i64 {
        tally(&self.votes, image_id)
    }

    pub fn has_next_page(&self) -> bool {
        self.meta.has_next()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.page -= 1;
        }
    }

    /// Replaces images and metadata on success. On failure the previous
    /// listing stays and a notice is returned.
    pub fn apply_page(&mut self, result: Result<ImagePage, AppError>) -> Option<Notice> {
        match result {
            Ok(page) => {
                self.images = page.images;
                self.meta = page.meta;
                None
            }
            Err(err) => Some(report(SyncFailure::FetchImages, &err)),
        }
    }

    pub fn apply_favourites(
        &mut self,
        result: Result<Vec<Favourite>, AppError>,
        failure: SyncFailure,
    ) -> Option<Notice> {
        match result {
            Ok(favourites) => {
                self.favourites = favourites;
                None
            }
            Err(err) => Some(report(failure, &err)),
        }
    }

    pub fn apply_votes(
        &mut self,
        result: Result<Vec<Vote>, AppError>,
        failure: SyncFailure,
    ) -> Option<Notice> {
        match result {
            Ok(votes) => {
                self.votes = votes;
                None
            }
            Err(err) => Some(report(failure, &err)),
        }
    }
}

fn report(failure: SyncFailure, err: &AppError) -> Notice {
    tracing::warn!(?failure, "{}", err);
    failure.notice()
}

pub async fn fetch_page<A: CatApi>(api: &A, page: u32) -> Result<ImagePage, AppError> {
    api.list_images(page, PAGE_SIZE).await
}

pub async fn refresh_favourites<A: CatApi>(api: &A) -> Result<Vec<Favourite>, AppError> {
    api.list_favourites().await
}

pub async fn refresh_votes<A: CatApi>(api: &A) -> Result<Vec<Vote>, AppError> {
    api.list_votes().await
}

/// Deletes the existing favourite for `image_id` or creates one, then returns
/// the freshly fetched favourites list.
pub async fn toggle_favourite<A: CatApi>(
    api: &A,
    favourites: &[Favourite],
    image_id: &str,
) -> Result<Vec<Favourite>, AppError> {
    match find_favourite(favourites, image_id).map(|fav| fav.id) {
        Some(favourite_id) => api.delete_favourite(favourite_id).await?,
        None => {
            api.create_favourite(image_id).await?;
        }
    }
    api.list_favourites().await
}

/// Appends a new vote record and returns the freshly fetched votes list.
pub async fn cast_vote<A: CatApi>(
    api: &A,
    image_id: &str,
    direction: VoteDirection,
) -> Result<Vec<Vote>, AppError> {
    api.create_vote(image_id, direction).await?;
    api.list_votes().await
}
