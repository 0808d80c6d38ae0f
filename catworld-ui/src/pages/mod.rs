mod home;
mod upload;

pub use home::HomePage;
pub use upload::UploadPage;
