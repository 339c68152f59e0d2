//! Lyric operations.

use super::Repository;
use crate::domain::Lyric;
use crate::error::{RepositoryError, Result};
use crate::ids::{LyricId, SongId};

impl Repository {
    /// Insert a lyric for a song.
    ///
    /// The song id must be well formed, but the song itself is not looked up.
    pub async fn create_lyric(&self, song_id: &str, content: &str) -> Result<Lyric> {
        let song_id = SongId::parse(song_id)?;
        let model = self
            .bounded("create_lyric", self.store.insert_lyric(song_id, content))
            .await?;
        Ok(model.into())
    }

    /// Fetch a lyric. A malformed id is reported as not found.
    pub async fn lyric(&self, id: &str) -> Result<Lyric> {
        let Ok(lyric_id) = LyricId::parse(id) else {
            return Err(RepositoryError::not_found("Lyric", id));
        };

        self.bounded("lyric", self.store.find_lyric(lyric_id))
            .await?
            .map(Lyric::from)
            .ok_or_else(|| RepositoryError::not_found("Lyric", id))
    }

    /// Fetch a lyric together with its parent song.
    ///
    /// `song` stays `None` when the parent has been deleted.
    pub async fn lyric_with_song(&self, id: &str) -> Result<Lyric> {
        let mut lyric = self.lyric(id).await?;
        lyric.song = match self.song(&lyric.song_id).await {
            Ok(song) => Some(song),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };
        Ok(lyric)
    }

    /// Lyrics whose `songId` matches. A malformed id matches nothing.
    pub async fn lyrics_for_song(&self, song_id: &str) -> Result<Vec<Lyric>> {
        let Ok(song_id) = SongId::parse(song_id) else {
            return Ok(Vec::new());
        };

        let models = self
            .bounded("lyrics_for_song", self.store.find_lyrics_by_song(song_id))
            .await?;
        Ok(models.into_iter().map(Lyric::from).collect())
    }

    /// Add one like and return the lyric as it is after the increment.
    pub async fn like_lyric(&self, id: &str) -> Result<Lyric> {
        let Ok(lyric_id) = LyricId::parse(id) else {
            return Err(RepositoryError::not_found("Lyric", id));
        };

        self.bounded("like_lyric", self.store.increment_likes(lyric_id))
            .await?
            .map(Lyric::from)
            .ok_or_else(|| RepositoryError::not_found("Lyric", id))
    }
}
