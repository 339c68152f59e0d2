use anyhow::{Context, Result};
use serde::Serialize;

use lyrical::config::Config;
use lyrical::constants::{ERROR_CONNECT_FAILED, LOG_CONNECTED, MONGODB_URI_ENV};
use lyrical::storage::MongoStore;
use lyrical::{logger, Lyric, Repository, Song};

/// Song with its lyrics, as printed by the status dump
#[derive(Serialize)]
struct SongSummary {
    #[serde(flatten)]
    song: Song,
    lyrics: Vec<Lyric>,
    total_likes: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    if Config::find_config_file()?.is_none() {
        Config::ensure_config_file(Config::get_default_config_path()?)?;
    }
    let config = Config::load().context("Failed to load configuration")?;
    logger::init(&config.logging)?;

    let store = match MongoStore::connect(&config.database).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}: {}", ERROR_CONNECT_FAILED, e);
            eprintln!("\n💡 Set {} or database.uri in lyrical.toml to point at your deployment.", MONGODB_URI_ENV);
            std::process::exit(1);
        }
    };
    let repo = Repository::from_mongo(store.clone(), config.database.timeout()).await?;
    log::info!("{} ({})", LOG_CONNECTED, config.database.name);

    let mut summaries = Vec::new();
    for song in repo.songs().await? {
        let lyrics = repo.lyrics_for_song(&song.id).await?;
        let total_likes = lyrics.iter().map(|l| i64::from(l.like_count())).sum();
        summaries.push(SongSummary {
            song,
            lyrics,
            total_likes,
        });
    }

    println!("{}", serde_json::to_string_pretty(&summaries)?);

    drop(repo);
    store.shutdown().await;
    Ok(())
}
