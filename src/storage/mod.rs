//! Store boundary for song and lyric documents
//!
//! This module defines the operations the repository needs from a document store:
//! - Songs: insert, list, fetch, delete
//! - Lyrics: insert, fetch, list by song, increment likes
//!
//! [`MongoStore`] talks to a MongoDB deployment; [`MemoryStore`] keeps
//! everything in process and backs the test suite.

use async_trait::async_trait;

use crate::entities::{LyricModel, SongModel};
use crate::error::Result;
use crate::ids::{LyricId, SongId};

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Document store holding the `song` and `lyric` collections.
///
/// Each method is a single round trip. Implementations must be safe to share
/// between concurrent callers.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the store type identifier (e.g., "mongodb", "memory").
    fn store_type(&self) -> &str;

    async fn ping(&self) -> Result<()>;

    // Songs
    async fn insert_song(&self, title: &str) -> Result<SongModel>;
    async fn find_songs(&self) -> Result<Vec<SongModel>>;
    async fn find_song(&self, id: SongId) -> Result<Option<SongModel>>;
    /// Returns the number of deleted documents (0 or 1).
    async fn delete_song(&self, id: SongId) -> Result<u64>;

    // Lyrics
    async fn insert_lyric(&self, song_id: SongId, content: &str) -> Result<LyricModel>;
    async fn find_lyric(&self, id: LyricId) -> Result<Option<LyricModel>>;
    async fn find_lyrics_by_song(&self, song_id: SongId) -> Result<Vec<LyricModel>>;
    /// Atomically adds one to `likes` and returns the updated document,
    /// or `None` when no lyric has that id.
    async fn increment_likes(&self, id: LyricId) -> Result<Option<LyricModel>>;
}
