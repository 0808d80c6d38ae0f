use super::CatApi;
use crate::domain::{
    Favourite, Image, ImagePage, ImageUpload, PageMeta, UploadedImage, Vote, VoteDirection,
};
use catworld_errors::AppError;
use std::cell::{Cell, RefCell};

/// In-memory Cat API used by the synchroniser tests.
#[derive(Default)]
pub struct FakeCatApi {
    images: Vec<Image>,
    favourites: RefCell<Vec<Favourite>>,
    votes: RefCell<Vec<Vote>>,
    deleted: RefCell<Vec<u64>>,
    last_listing: Cell<Option<(u32, u32)>>,
    next_id: Cell<u64>,
    mutations: Cell<usize>,
    uploads: Cell<usize>,
    fail_all: Cell<bool>,
    fail_listing_votes: Cell<bool>,
}

impl FakeCatApi {
    pub fn with_images(total: usize) -> Self {
        Self {
            images: (0..total)
                .map(|i| Image::new(format!("cat-{i}"), format!("https://cdn.example/cat-{i}.jpg")))
                .collect(),
            next_id: Cell::new(100),
            ..Self::default()
        }
    }

    pub fn seed_favourite(&self, favourite: Favourite) {
        self.favourites.borrow_mut().push(favourite);
    }

    pub fn fail_all(&self, fail: bool) {
        self.fail_all.set(fail);
    }

    pub fn fail_listing_votes(&self, fail: bool) {
        self.fail_listing_votes.set(fail);
    }

    pub fn favourites(&self) -> Vec<Favourite> {
        self.favourites.borrow().clone()
    }

    pub fn votes(&self) -> Vec<Vote> {
        self.votes.borrow().clone()
    }

    pub fn deleted_favourites(&self) -> Vec<u64> {
        self.deleted.borrow().clone()
    }

    pub fn last_listing(&self) -> Option<(u32, u32)> {
        self.last_listing.get()
    }

    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }

    pub fn uploads(&self) -> usize {
        self.uploads.get()
    }

    fn check(&self, operation: &str) -> Result<(), AppError> {
        if self.fail_all.get() {
            return Err(AppError::remote(format!("{operation}: network error")));
        }
        Ok(())
    }

    fn assign_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl CatApi for FakeCatApi {
    async fn list_images(&self, page: u32, limit: u32) -> Result<ImagePage, AppError> {
        self.check("list images")?;
        self.last_listing.set(Some((page, limit)));
        let images = self
            .images
            .iter()
            .skip((page * limit) as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(ImagePage {
            images,
            meta: PageMeta::new(self.images.len() as u32, limit, page),
        })
    }

    async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedImage, AppError> {
        self.uploads.set(self.uploads.get() + 1);
        self.check("upload image")?;
        let id = format!("up-{}", self.assign_id());
        Ok(UploadedImage {
            url: format!("https://cdn.example/{id}.png"),
            id,
            width: 1,
            height: 1,
            original_filename: Some(upload.file_name),
            pending: 0,
            approved: 1,
        })
    }

    async fn list_favourites(&self) -> Result<Vec<Favourite>, AppError> {
        self.check("list favourites")?;
        Ok(self.favourites())
    }

    async fn create_favourite(&self, image_id: &str) -> Result<Favourite, AppError> {
        self.check("create favourite")?;
        self.mutations.set(self.mutations.get() + 1);
        let favourite = Favourite::new(self.assign_id(), image_id);
        self.favourites.borrow_mut().push(favourite.clone());
        Ok(favourite)
    }

    async fn delete_favourite(&self, favourite_id: u64) -> Result<(), AppError> {
        self.check("delete favourite")?;
        self.mutations.set(self.mutations.get() + 1);
        self.deleted.borrow_mut().push(favourite_id);
        self.favourites.borrow_mut().retain(|fav| fav.id != favourite_id);
        Ok(())
    }

    async fn list_votes(&self) -> Result<Vec<Vote>, AppError> {
        self.check("list votes")?;
        if self.fail_listing_votes.get() {
            return Err(AppError::remote("list votes: 502 Bad Gateway"));
        }
        Ok(self.votes())
    }

    async fn create_vote(&self, image_id: &str, direction: VoteDirection) -> Result<Vote, AppError> {
        self.check("create vote")?;
        self.mutations.set(self.mutations.get() + 1);
        let vote = Vote::new(self.assign_id(), image_id, direction.value());
        self.votes.borrow_mut().push(vote.clone());
        Ok(vote)
    }
}
