//! In-memory store implementation
//!
//! Thread-safe implementation using `tokio::sync::RwLock`.
//! Useful for testing and for running without a MongoDB deployment.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Store;
use crate::entities::{LyricModel, SongModel};
use crate::error::{RepositoryError, Result};
use crate::ids::{LyricId, SongId};

#[derive(Debug, Default)]
struct Collections {
    songs: BTreeMap<SongId, SongModel>,
    lyrics: BTreeMap<LyricId, LyricModel>,
}

/// Store keeping both collections in process memory.
///
/// Clones share the same underlying data. Ids are ObjectIds, so iteration
/// follows creation order the way a fresh MongoDB collection scan does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn song_count(&self) -> usize {
        self.inner.read().await.songs.len()
    }

    pub async fn lyric_count(&self) -> usize {
        self.inner.read().await.lyrics.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn store_type(&self) -> &str {
        "memory"
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_song(&self, title: &str) -> Result<SongModel> {
        let song = SongModel::new(title);
        self.inner.write().await.songs.insert(song.song_id(), song.clone());
        Ok(song)
    }

    async fn find_songs(&self) -> Result<Vec<SongModel>> {
        Ok(self.inner.read().await.songs.values().cloned().collect())
    }

    async fn find_song(&self, id: SongId) -> Result<Option<SongModel>> {
        Ok(self.inner.read().await.songs.get(&id).cloned())
    }

    async fn delete_song(&self, id: SongId) -> Result<u64> {
        let removed = self.inner.write().await.songs.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn insert_lyric(&self, song_id: SongId, content: &str) -> Result<LyricModel> {
        let lyric = LyricModel::new(song_id, content);
        self.inner.write().await.lyrics.insert(lyric.lyric_id(), lyric.clone());
        Ok(lyric)
    }

    async fn find_lyric(&self, id: LyricId) -> Result<Option<LyricModel>> {
        Ok(self.inner.read().await.lyrics.get(&id).cloned())
    }

    async fn find_lyrics_by_song(&self, song_id: SongId) -> Result<Vec<LyricModel>> {
        let target = song_id.as_object_id();
        Ok(self
            .inner
            .read()
            .await
            .lyrics
            .values()
            .filter(|lyric| lyric.song_id == target)
            .cloned()
            .collect())
    }

    async fn increment_likes(&self, id: LyricId) -> Result<Option<LyricModel>> {
        let mut collections = self.inner.write().await;
        let Some(lyric) = collections.lyrics.get_mut(&id) else {
            return Ok(None);
        };

        let likes = lyric
            .likes
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| RepositoryError::LikesOverflow(id.to_hex()))?;
        lyric.likes = Some(likes);
        Ok(Some(lyric.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_increment_likes_at_max_is_an_error() {
        let store = MemoryStore::new();
        let lyric = store.insert_lyric(SongId::new(), "Suddenly").await.unwrap();
        let id = lyric.lyric_id();

        store.inner.write().await.lyrics.get_mut(&id).unwrap().likes = Some(i32::MAX);

        match store.increment_likes(id).await {
            Err(RepositoryError::LikesOverflow(hex)) => assert_eq!(hex, id.to_hex()),
            other => panic!("expected LikesOverflow, got {:?}", other),
        }
        let unchanged = store.find_lyric(id).await.unwrap().unwrap();
        assert_eq!(unchanged.likes, Some(i32::MAX));
    }

    #[tokio::test]
    async fn test_increment_likes_unknown_lyric() {
        let store = MemoryStore::new();
        assert!(store.increment_likes(LyricId::new()).await.unwrap().is_none());
    }
}
