//! Constants used throughout the crate
//!
//! This module centralizes collection names, defaults, and other constant values
//! shared by the storage backends and the configuration layer.

// Store layout
/// Database that holds the song and lyric collections
pub const DEFAULT_DATABASE_NAME: &str = "lyrical_graphql";
/// Collection holding song documents
pub const SONG_COLLECTION: &str = "song";
/// Collection holding lyric documents
pub const LYRIC_COLLECTION: &str = "lyric";

// Connection defaults
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_APP_NAME: &str = "lyrical";
/// Environment variable overriding the configured connection URI
pub const MONGODB_URI_ENV: &str = "MONGOURI";

// Timeouts
/// Per-operation budget applied independently to every repository call
pub const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 10;
/// Upper bound accepted by config validation
pub const MAX_OPERATION_TIMEOUT_SECS: u64 = 300;

// Files
pub const CONFIG_FILE_NAME: &str = "lyrical.toml";
pub const CONFIG_DIR_NAME: &str = "lyrical";
pub const LOG_FILE_NAME: &str = "lyrical.log";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_CONNECTED: &str = "✅ Connected to MongoDB";
pub const ERROR_CONNECT_FAILED: &str = "❌ Failed to connect to MongoDB";
