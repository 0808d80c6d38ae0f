mod backdrop;
mod image_card;
mod loading_spinner;
mod navbar;
mod pagination;
mod snackbar;

pub use backdrop::Backdrop;
pub use image_card::ImageCard;
pub use loading_spinner::LoadingSpinner;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use snackbar::{use_snackbar, Snackbar, SnackbarProvider};
