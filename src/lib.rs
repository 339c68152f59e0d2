//! Lyrical - data access for a songs and lyrics GraphQL API
//!
//! This library provides the repository that a GraphQL layer calls to create,
//! fetch, list and delete songs, attach lyrics to them and count likes. Data
//! lives in two MongoDB collections, `song` and `lyric`.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`domain`] - Song and lyric objects handed to the API layer
//! * [`entities`] - Documents as stored in the collections
//! * [`repositories`] - The [`Repository`] and its per-use-case operations
//! * [`storage`] - The [`storage::Store`] boundary with MongoDB and in-memory backends
//!
//! # Example
//!
//! ```no_run
//! use lyrical::{config::Config, Repository};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let repo = Repository::connect(&config.database).await?;
//!
//! let song = repo.create_song("Yesterday").await?;
//! let lyric = repo.create_lyric(&song.id, "Suddenly").await?;
//! let liked = repo.like_lyric(&lyric.id).await?;
//! assert_eq!(liked.likes, Some(1));
//! # Ok(())
//! # }
//! ```

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// API-facing domain objects
pub mod domain;

/// Stored document models
pub mod entities;

/// Error types shared by the store and repository
pub mod error;

/// Typed document identifiers
pub mod ids;

/// Logging setup
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Store boundary and its backends
pub mod storage;

pub use domain::{Lyric, Song};
pub use error::RepositoryError;
pub use ids::{LyricId, SongId};
pub use repositories::Repository;
