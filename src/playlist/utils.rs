use std::collections::HashSet;

use chrono::Local;
use rand::seq::SliceRandom;

use super::filters::MIN_SONGS;
use super::{FULL_SEGMENT, SEGMENT_ORDER};
use crate::models::{SelectedSong, SongRecord};

/// Greedily accumulate ranked candidates up to a duration budget.
///
/// Candidates are visited in the given (ranking) order; a candidate that
/// would push the running total past the budget is skipped, not a stop
/// signal, since a later shorter song may still fit. Order-preserving
/// and deliberately not an optimal knapsack.
pub fn accumulate_by_duration(candidates: Vec<SongRecord>, budget_minutes: u64) -> Vec<SongRecord> {
    let budget_ms = budget_minutes * 60_000;
    let mut selected = Vec::new();
    let mut accumulated_ms: u64 = 0;

    for song in candidates {
        if accumulated_ms + song.duration_ms > budget_ms {
            continue;
        }
        accumulated_ms += song.duration_ms;
        selected.push(song);
    }

    selected
}

/// Merge a genre-matched pool with its match-all fallback into one
/// candidate list for a segment.
///
/// Genre-matched songs come first in their ranked order; match-all songs
/// then top the pool up to `MIN_SONGS`. Ids in `claimed` belong to an
/// earlier segment and are never reused, which keeps generation results
/// globally deduplicated. Because both passes are deterministic, topping
/// up from the same match-all list after claimed ids are removed is
/// equivalent to re-issuing the fallback query for an under-populated
/// segment.
pub fn merge_candidate_pools(
    genre_matched: Vec<SongRecord>,
    match_all: &[SongRecord],
    claimed: &HashSet<String>,
) -> Vec<SongRecord> {
    let mut pool: Vec<SongRecord> = Vec::new();
    let mut taken: HashSet<String> = HashSet::new();

    for song in genre_matched {
        if claimed.contains(&song.track_id) || !taken.insert(song.track_id.clone()) {
            continue;
        }
        pool.push(song);
    }

    for song in match_all {
        if pool.len() >= MIN_SONGS {
            break;
        }
        if claimed.contains(&song.track_id) || taken.contains(&song.track_id) {
            continue;
        }
        taken.insert(song.track_id.clone());
        pool.push(song.clone());
    }

    pool
}

/// Concatenate per-segment selections into one flat playlist in canonical
/// segment order, tagging each song with its segment label. Unknown
/// labels are appended after the canonical segments in the order given.
pub fn assemble_segments(results: Vec<(String, Vec<SongRecord>)>) -> Vec<SelectedSong> {
    let mut assembled = Vec::new();

    for canonical in SEGMENT_ORDER {
        for (label, songs) in results.iter().filter(|(label, _)| label == canonical) {
            assembled.extend(songs.iter().cloned().map(|s| SelectedSong::new(s, label)));
        }
    }

    for (label, songs) in &results {
        if SEGMENT_ORDER.contains(&label.as_str()) {
            continue;
        }
        assembled.extend(songs.iter().cloned().map(|s| SelectedSong::new(s, label)));
    }

    assembled
}

/// Tag a single-pool selection as the implicit "Full" segment
pub fn tag_full_playlist(songs: Vec<SongRecord>) -> Vec<SelectedSong> {
    songs
        .into_iter()
        .map(|s| SelectedSong::new(s, FULL_SEGMENT))
        .collect()
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Playlist naming utilities
pub struct PlaylistNaming;

impl PlaylistNaming {
    /// Generate a descriptive, date-stamped name for a generated playlist.
    /// Uses the dominant genre when one covers at least 40% of the songs,
    /// otherwise picks a generic suffix. Cosmetic only; never part of the
    /// deterministic selection path.
    pub fn generate_playlist_name(
        name: &str,
        metadata: &crate::playlist::PlaylistMetadata,
    ) -> String {
        let date = Local::now().format("%B %-d").to_string();

        if let Some((genre, &count)) = metadata
            .genre_distribution
            .iter()
            .max_by_key(|(_, count)| *count)
        {
            if metadata.total_songs > 0 && (count as f32 / metadata.total_songs as f32) >= 0.4 {
                return format!("{} - {} ({})", name, title_case(genre), date);
            }

            let suffixes = ["mix", "set", "selection", "soundtrack", "rotation"];
            let mut rng = rand::thread_rng();
            if let Some(suffix) = suffixes.choose(&mut rng) {
                return format!("{name} {suffix} ({date})");
            }
        }

        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, duration_ms: u64) -> SongRecord {
        SongRecord {
            track_id: id.to_string(),
            duration_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_accumulator_respects_budget() {
        let candidates = vec![
            song("1", 180_000),
            song("2", 180_000),
            song("3", 180_000),
            song("4", 180_000),
        ];

        // 10 minutes = 600000 ms, fits three 3-minute songs
        let selected = accumulate_by_duration(candidates, 10);

        let total: u64 = selected.iter().map(|s| s.duration_ms).sum();
        assert_eq!(selected.len(), 3);
        assert!(total <= 600_000);
    }

    #[test]
    fn test_accumulator_skips_overflow_but_keeps_going() {
        let candidates = vec![
            song("short-1", 200_000),
            song("too-long", 700_000), // would overflow on its own
            song("short-2", 200_000),
        ];

        let selected = accumulate_by_duration(candidates, 10);
        let ids: Vec<&str> = selected.iter().map(|s| s.track_id.as_str()).collect();

        // The oversized song is skipped, the later short one still fits
        assert_eq!(ids, vec!["short-1", "short-2"]);
    }

    #[test]
    fn test_accumulator_first_song_too_long_yields_empty() {
        let candidates = vec![song("long", 900_000)];
        assert!(accumulate_by_duration(candidates, 10).is_empty());
    }

    #[test]
    fn test_accumulator_zero_budget_yields_empty() {
        let candidates = vec![song("1", 180_000)];
        assert!(accumulate_by_duration(candidates, 0).is_empty());
    }

    #[test]
    fn test_merge_tops_up_short_genre_pool_from_match_all() {
        let genre_matched: Vec<SongRecord> =
            (0..3).map(|i| song(&format!("genre-{i}"), 180_000)).collect();
        let match_all: Vec<SongRecord> =
            (0..15).map(|i| song(&format!("any-{i}"), 180_000)).collect();

        let pool = merge_candidate_pools(genre_matched, &match_all, &HashSet::new());

        assert_eq!(pool.len(), MIN_SONGS);
        // Genre-matched songs rank first
        assert!(pool[..3].iter().all(|s| s.track_id.starts_with("genre-")));
        assert!(pool[3..].iter().all(|s| s.track_id.starts_with("any-")));
    }

    #[test]
    fn test_merge_does_not_top_up_a_full_genre_pool() {
        let genre_matched: Vec<SongRecord> =
            (0..12).map(|i| song(&format!("genre-{i}"), 180_000)).collect();
        let match_all: Vec<SongRecord> =
            (0..5).map(|i| song(&format!("any-{i}"), 180_000)).collect();

        let pool = merge_candidate_pools(genre_matched, &match_all, &HashSet::new());

        assert_eq!(pool.len(), 12);
        assert!(pool.iter().all(|s| s.track_id.starts_with("genre-")));
    }

    #[test]
    fn test_merge_skips_claimed_and_duplicate_ids() {
        let genre_matched = vec![song("a", 180_000), song("b", 180_000), song("a", 180_000)];
        let match_all = vec![song("a", 180_000), song("b", 180_000), song("c", 180_000)];
        let claimed: HashSet<String> = ["b".to_string()].into_iter().collect();

        let pool = merge_candidate_pools(genre_matched, &match_all, &claimed);
        let ids: Vec<&str> = pool.iter().map(|s| s.track_id.as_str()).collect();

        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_assembly_follows_canonical_segment_order() {
        let results = vec![
            ("Dancing".to_string(), vec![song("d1", 1)]),
            ("Reception".to_string(), vec![song("r1", 1), song("r2", 1)]),
            ("ceremony".to_string(), vec![song("c1", 1)]),
        ];

        let assembled = assemble_segments(results);
        let tags: Vec<(&str, &str)> = assembled
            .iter()
            .map(|s| (s.song.track_id.as_str(), s.segment.as_str()))
            .collect();

        assert_eq!(
            tags,
            vec![
                ("r1", "Reception"),
                ("r2", "Reception"),
                ("c1", "ceremony"),
                ("d1", "Dancing"),
            ]
        );
    }

    #[test]
    fn test_full_playlist_tagging() {
        let tagged = tag_full_playlist(vec![song("1", 1)]);
        assert_eq!(tagged[0].segment, FULL_SEGMENT);
    }
}
