use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::Lyric;
use crate::ids::{LyricId, SongId};

/// Document stored in the `lyric` collection.
///
/// `likes` is left out on insert; the first `$inc` creates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i32>,
    #[serde(rename = "songId")]
    pub song_id: ObjectId,
}

impl Model {
    pub fn new(song_id: SongId, content: &str) -> Self {
        Self {
            id: ObjectId::new(),
            content: Some(content.to_string()),
            likes: None,
            song_id: song_id.into(),
        }
    }

    pub fn lyric_id(&self) -> LyricId {
        LyricId::from(self.id)
    }
}

impl From<Model> for Lyric {
    fn from(model: Model) -> Self {
        Lyric {
            id: model.id.to_hex(),
            content: model.content,
            likes: model.likes,
            song_id: model.song_id.to_hex(),
            song: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_new_lyric_document_has_no_likes_field() {
        let model = Model::new(SongId::new(), "Suddenly");
        let document = bson::to_document(&model).unwrap();
        assert!(document.get("likes").is_none());
        assert!(document.get_object_id("songId").is_ok());
        assert_eq!(document.get_str("content").unwrap(), "Suddenly");
    }

    #[test]
    fn test_decodes_legacy_zero_likes() {
        let id = ObjectId::new();
        let song_id = ObjectId::new();
        let document = doc! { "_id": id, "likes": 0, "content": "Suddenly", "songId": song_id };
        let model: Model = bson::from_document(document).unwrap();
        let lyric = Lyric::from(model);
        assert_eq!(lyric.likes, Some(0));
        assert_eq!(lyric.song_id, song_id.to_hex());
        assert_eq!(lyric.id, id.to_hex());
    }
}
