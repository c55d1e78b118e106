use serde::{Deserialize, Serialize};

/// One catalog entry with the fields carried by the song dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongRecord {
    pub track_id: String,
    pub artists: String,
    pub album_name: String,
    pub track_name: String,
    pub popularity: u32,     // 0-100, as defined by the dataset
    pub duration_ms: u64,
    pub danceability: f32,   // 0.0-1.0
    pub tempo: f32,          // beats per minute
    pub track_genre: String,
}

impl SongRecord {
    /// Check if this song's genre is in the given genre set.
    /// An empty set means "no genre filter" and matches everything.
    pub fn matches_genres(&self, genres: &[String]) -> bool {
        if genres.is_empty() {
            return true;
        }

        genres
            .iter()
            .any(|genre| genre.eq_ignore_ascii_case(&self.track_genre))
    }
}

impl Default for SongRecord {
    fn default() -> Self {
        SongRecord {
            track_id: String::new(),
            artists: "Unknown".to_string(),
            album_name: "Unknown".to_string(),
            track_name: "Unknown".to_string(),
            popularity: 0,
            duration_ms: 0,
            danceability: 0.0,
            tempo: 0.0,
            track_genre: String::new(),
        }
    }
}

/// A catalog song with the segment it was selected for.
/// Produced only by the generator; the caller owns the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedSong {
    pub song: SongRecord,
    pub segment: String,
}

impl SelectedSong {
    pub fn new(song: SongRecord, segment: &str) -> Self {
        Self {
            song,
            segment: segment.to_string(),
        }
    }
}
