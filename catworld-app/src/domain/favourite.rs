use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favourite {
    pub id: u64,
    pub image_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub sub_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub image: Option<FavouriteImage>,
}

impl Favourite {
    pub fn new(id: u64, image_id: impl Into<String>) -> Self {
        Self {
            id,
            image_id: image_id.into(),
            user_id: None,
            sub_id: None,
            created_at: None,
            image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavouriteImage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Linear scan for the favourite pointing at `image_id`, first match wins.
pub fn find_favourite<'a>(favourites: &'a [Favourite], image_id: &str) -> Option<&'a Favourite> {
    favourites.iter().find(|fav| fav.image_id == image_id)
}
