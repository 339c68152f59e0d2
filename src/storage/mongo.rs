//! MongoDB-backed store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, Database, IndexModel};

use super::Store;
use crate::config::DatabaseConfig;
use crate::constants::{LYRIC_COLLECTION, SONG_COLLECTION};
use crate::entities::{LyricModel, SongModel};
use crate::error::{RepositoryError, Result};
use crate::ids::{LyricId, SongId};

/// Store backed by a single long-lived MongoDB client.
///
/// The driver pools connections internally, so one `MongoStore` is shared by
/// every caller.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connect to the configured deployment and verify it answers a ping.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let timeout = config.timeout();

        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;
        options.app_name = Some(config.app_name.clone());
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = Client::with_options(options).map_err(|e| RepositoryError::Connection(e.to_string()))?;
        let store = Self::from_client(client, &config.name);

        match tokio::time::timeout(timeout, store.ping()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(RepositoryError::Connection(e.to_string())),
            Err(_) => {
                return Err(RepositoryError::Timeout {
                    operation: "connect",
                    after: timeout,
                })
            }
        }

        log::info!("Connected to MongoDB database '{}'", config.name);
        Ok(store)
    }

    /// Wrap an existing client, e.g. one shared with other components.
    pub fn from_client(client: Client, database_name: &str) -> Self {
        let database = client.database(database_name);
        Self { client, database }
    }

    fn songs(&self) -> Collection<SongModel> {
        self.database.collection(SONG_COLLECTION)
    }

    fn lyrics(&self) -> Collection<LyricModel> {
        self.database.collection(LYRIC_COLLECTION)
    }

    /// Create the index backing lyric lookups by song.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let song_index = IndexModel::builder()
            .keys(doc! { "songId": 1 })
            .options(IndexOptions::builder().name("songId_1".to_string()).build())
            .build();
        self.lyrics().create_index(song_index).await?;
        Ok(())
    }

    /// Drop both collections. Used to reset test databases.
    pub async fn drop_collections(&self) -> Result<()> {
        self.lyrics().drop().await?;
        self.songs().drop().await?;
        Ok(())
    }

    /// Gracefully close the client's connection pool.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl Store for MongoStore {
    fn store_type(&self) -> &str {
        "mongodb"
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn insert_song(&self, title: &str) -> Result<SongModel> {
        let song = SongModel::new(title);
        self.songs().insert_one(&song).await?;
        Ok(song)
    }

    async fn find_songs(&self) -> Result<Vec<SongModel>> {
        let cursor = self.songs().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_song(&self, id: SongId) -> Result<Option<SongModel>> {
        Ok(self.songs().find_one(doc! { "_id": id.as_object_id() }).await?)
    }

    async fn delete_song(&self, id: SongId) -> Result<u64> {
        let result = self.songs().delete_one(doc! { "_id": id.as_object_id() }).await?;
        Ok(result.deleted_count)
    }

    async fn insert_lyric(&self, song_id: SongId, content: &str) -> Result<LyricModel> {
        let lyric = LyricModel::new(song_id, content);
        self.lyrics().insert_one(&lyric).await?;
        Ok(lyric)
    }

    async fn find_lyric(&self, id: LyricId) -> Result<Option<LyricModel>> {
        Ok(self.lyrics().find_one(doc! { "_id": id.as_object_id() }).await?)
    }

    async fn find_lyrics_by_song(&self, song_id: SongId) -> Result<Vec<LyricModel>> {
        let cursor = self
            .lyrics()
            .find(doc! { "songId": song_id.as_object_id() })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn increment_likes(&self, id: LyricId) -> Result<Option<LyricModel>> {
        Ok(self
            .lyrics()
            .find_one_and_update(
                doc! { "_id": id.as_object_id() },
                doc! { "$inc": { "likes": 1 } },
            )
            .return_document(ReturnDocument::After)
            .await?)
    }
}
