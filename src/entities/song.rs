use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::Song;
use crate::ids::SongId;

/// Document stored in the `song` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Model {
    pub fn new(title: &str) -> Self {
        Self {
            id: ObjectId::new(),
            title: Some(title.to_string()),
        }
    }

    pub fn song_id(&self) -> SongId {
        SongId::from(self.id)
    }
}

impl From<Model> for Song {
    fn from(model: Model) -> Self {
        Song {
            id: model.id.to_hex(),
            title: model.title,
        }
    }
}
