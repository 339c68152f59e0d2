//! Song operations.

use super::Repository;
use crate::domain::Song;
use crate::error::{RepositoryError, Result};
use crate::ids::SongId;

impl Repository {
    /// Insert a song. Titles are not required to be unique.
    pub async fn create_song(&self, title: &str) -> Result<Song> {
        let model = self.bounded("create_song", self.store.insert_song(title)).await?;
        Ok(model.into())
    }

    /// All songs in store iteration order.
    pub async fn songs(&self) -> Result<Vec<Song>> {
        let models = self.bounded("songs", self.store.find_songs()).await?;
        Ok(models.into_iter().map(Song::from).collect())
    }

    /// Fetch a song. A malformed id is reported as not found.
    pub async fn song(&self, id: &str) -> Result<Song> {
        let Ok(song_id) = SongId::parse(id) else {
            return Err(RepositoryError::not_found("Song", id));
        };

        self.bounded("song", self.store.find_song(song_id))
            .await?
            .map(Song::from)
            .ok_or_else(|| RepositoryError::not_found("Song", id))
    }

    /// Delete a song and return how many records went away (0 or 1).
    ///
    /// Lyrics referencing the song are left in place.
    pub async fn delete_song(&self, id: &str) -> Result<u64> {
        let Ok(song_id) = SongId::parse(id) else {
            return Ok(0);
        };

        let deleted = self.bounded("delete_song", self.store.delete_song(song_id)).await?;
        log::info!("Deleted {} song(s) with id {}", deleted, song_id);
        Ok(deleted)
    }
}
