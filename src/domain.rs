//! API-facing song and lyric objects.
//!
//! These are the shapes handed to the GraphQL layer. Ids are plain hex
//! strings here; the typed forms live in [`crate::ids`].

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lyric {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i32>,
    pub song_id: String,
    /// Parent song, only filled when explicitly requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song: Option<Song>,
}

impl Lyric {
    /// Like count with an absent counter read as zero.
    pub fn like_count(&self) -> i32 {
        self.likes.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lyric_serializes_camel_case() {
        let lyric = Lyric {
            id: "Y".to_string(),
            content: Some("Suddenly".to_string()),
            likes: None,
            song_id: "X".to_string(),
            song: None,
        };
        let json = serde_json::to_value(&lyric).unwrap();
        assert_eq!(json["songId"], "X");
        assert_eq!(json["content"], "Suddenly");
        assert!(json.get("likes").is_none());
        assert!(json.get("song").is_none());
        assert_eq!(lyric.like_count(), 0);
    }
}
