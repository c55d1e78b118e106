use std::collections::{HashMap, HashSet};

use super::SEGMENT_ORDER;
use crate::models::SelectedSong;

/// A generated playlist with reporting metadata and any advisory warnings
/// recorded during generation (under-populated or empty segments)
#[derive(Debug)]
pub struct Playlist {
    pub name: String,
    pub songs: Vec<SelectedSong>,
    pub metadata: PlaylistMetadata,
    pub warnings: Vec<String>,
}

/// Metadata about the playlist composition
#[derive(Debug)]
pub struct PlaylistMetadata {
    pub total_duration_ms: u64,
    pub total_songs: usize,
    pub average_tempo: f32,
    pub tempo_range: (f32, f32),
    pub genre_distribution: HashMap<String, usize>,
    pub artist_count: usize,
    pub avg_popularity: f32,
    pub segment_counts: Vec<(String, usize)>, // canonical order, then extras
}

impl PlaylistMetadata {
    /// Calculate metadata for a selection result
    pub fn calculate(songs: &[SelectedSong]) -> PlaylistMetadata {
        if songs.is_empty() {
            return PlaylistMetadata {
                total_duration_ms: 0,
                total_songs: 0,
                average_tempo: 0.0,
                tempo_range: (0.0, 0.0),
                genre_distribution: HashMap::new(),
                artist_count: 0,
                avg_popularity: 0.0,
                segment_counts: Vec::new(),
            };
        }

        let total_duration_ms: u64 = songs.iter().map(|s| s.song.duration_ms).sum();

        let average_tempo =
            songs.iter().map(|s| s.song.tempo).sum::<f32>() / songs.len() as f32;

        let tempo_range = songs.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(min, max), s| (min.min(s.song.tempo), max.max(s.song.tempo)),
        );

        let mut genre_distribution = HashMap::new();
        for song in songs {
            *genre_distribution
                .entry(song.song.track_genre.to_lowercase())
                .or_insert(0) += 1;
        }

        let artist_count = songs
            .iter()
            .map(|s| s.song.artists.to_lowercase())
            .collect::<HashSet<_>>()
            .len();

        let avg_popularity =
            songs.iter().map(|s| s.song.popularity as f32).sum::<f32>() / songs.len() as f32;

        let mut segment_counts: Vec<(String, usize)> = Vec::new();
        for canonical in SEGMENT_ORDER {
            let count = songs.iter().filter(|s| s.segment == canonical).count();
            if count > 0 {
                segment_counts.push((canonical.to_string(), count));
            }
        }
        for song in songs {
            if SEGMENT_ORDER.contains(&song.segment.as_str()) {
                continue;
            }
            match segment_counts.iter_mut().find(|(label, _)| *label == song.segment) {
                Some((_, count)) => *count += 1,
                None => segment_counts.push((song.segment.clone(), 1)),
            }
        }

        PlaylistMetadata {
            total_duration_ms,
            total_songs: songs.len(),
            average_tempo,
            tempo_range,
            genre_distribution,
            artist_count,
            avg_popularity,
            segment_counts,
        }
    }
}
