mod favourite;
mod image;
mod notice;
mod page;
mod upload;
mod vote;

pub use favourite::{find_favourite, Favourite, FavouriteImage};
pub use image::{Breed, Image};
pub use notice::{Notice, Severity};
pub use page::{ImagePage, PageMeta};
pub use upload::{ImageUpload, SelectedFile, UploadedImage};
pub use vote::{tally, Vote, VoteDirection};
