pub mod lyric;
pub mod song;

pub use lyric::Model as LyricModel;
pub use song::Model as SongModel;
