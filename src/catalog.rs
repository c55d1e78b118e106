use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::SongRecord;

/// Source of catalog songs. The generator only ever sees already-validated
/// records; anything that fails validation is rejected here.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogProvider {
    fn load_catalog(&self) -> Result<Vec<SongRecord>>;
}

/// A catalog row as it appears on disk, before validation.
/// Fields are optional so that one malformed row cannot fail the whole file.
#[derive(Debug, Deserialize)]
struct RawSongRow {
    track_id: Option<String>,
    artists: Option<String>,
    album_name: Option<String>,
    track_name: Option<String>,
    popularity: Option<f64>,
    duration_ms: Option<f64>,
    danceability: Option<f64>,
    tempo: Option<f64>,
    track_genre: Option<String>,
}

impl RawSongRow {
    /// Validate the row and convert it into a typed record.
    /// Returns a human-readable reason when the row is unusable.
    fn validate(self) -> Result<SongRecord, String> {
        let track_id = match self.track_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err("missing track_id".to_string()),
        };

        let popularity = self.popularity.ok_or("missing popularity")?;
        if !(0.0..=100.0).contains(&popularity) {
            return Err(format!("popularity {popularity} out of 0-100 range"));
        }

        let duration_ms = self.duration_ms.ok_or("missing duration_ms")?;
        if duration_ms <= 0.0 {
            return Err(format!("non-positive duration_ms {duration_ms}"));
        }

        let danceability = self.danceability.ok_or("missing danceability")?;
        if !(0.0..=1.0).contains(&danceability) {
            return Err(format!("danceability {danceability} out of 0.0-1.0 range"));
        }

        let tempo = self.tempo.ok_or("missing tempo")?;
        if tempo <= 0.0 {
            return Err(format!("non-positive tempo {tempo}"));
        }

        Ok(SongRecord {
            track_id,
            artists: self.artists.unwrap_or_else(|| "Unknown".to_string()),
            album_name: self.album_name.unwrap_or_else(|| "Unknown".to_string()),
            track_name: self.track_name.unwrap_or_else(|| "Unknown".to_string()),
            popularity: popularity.round() as u32,
            duration_ms: duration_ms as u64,
            danceability: danceability as f32,
            tempo: tempo as f32,
            track_genre: self.track_genre.unwrap_or_default(),
        })
    }
}

/// Catalog provider backed by a JSON array file of song rows
pub struct JsonCatalog {
    path: PathBuf,
    quiet: bool,
}

impl JsonCatalog {
    pub fn new(path: impl AsRef<Path>, quiet: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            quiet,
        }
    }
}

impl CatalogProvider for JsonCatalog {
    fn load_catalog(&self) -> Result<Vec<SongRecord>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog file '{}'", self.path.display()))?;

        let rows: Vec<serde_json::Value> = serde_json::from_str(&content)
            .with_context(|| format!("Catalog file '{}' is not a JSON array", self.path.display()))?;

        let mut songs = Vec::with_capacity(rows.len());
        let mut rejected = 0usize;

        for (index, row) in rows.into_iter().enumerate() {
            let raw: RawSongRow = match serde_json::from_value(row) {
                Ok(raw) => raw,
                Err(e) => {
                    rejected += 1;
                    if !self.quiet {
                        eprintln!("Skipping catalog row {index}: {e}");
                    }
                    continue;
                }
            };

            match raw.validate() {
                Ok(song) => songs.push(song),
                Err(reason) => {
                    rejected += 1;
                    if !self.quiet {
                        eprintln!("Skipping catalog row {index}: {reason}");
                    }
                }
            }
        }

        if rejected > 0 && !self.quiet {
            eprintln!("Rejected {rejected} malformed catalog rows");
        }

        Ok(songs)
    }
}
