use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub original_filename: Option<String>,
    #[serde(default)]
    pub breed_ids: Option<Vec<String>>,
    #[serde(default)]
    pub breeds: Vec<Breed>,
    #[serde(default)]
    pub sub_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Image {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            width: 0,
            height: 0,
            original_filename: None,
            breed_ids: None,
            breeds: Vec::new(),
            sub_id: None,
            created_at: None,
        }
    }

    pub fn alt_text(&self) -> String {
        format!("cat_{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    #[serde(default)]
    pub name: String,
}
