use super::Constraint;
use crate::models::SongRecord;

/// Minimum usable candidate count for a single pool. Pools shorter than
/// this are topped up from the match-all fallback pass.
pub const MIN_SONGS: usize = 10;

/// How far a song's popularity may sit from the requested target
pub const POPULARITY_WINDOW: u32 = 20;

/// Song filtering functionality using static helper functions
pub struct SongFilters;

impl SongFilters {
    /// Check if a song's popularity falls within the window around the
    /// constraint's target
    pub fn matches_popularity_window(song: &SongRecord, target: u32) -> bool {
        song.popularity.abs_diff(target) <= POPULARITY_WINDOW
    }

    /// Check if a song's tempo falls inside the constraint's BPM range.
    /// No range set means every tempo is acceptable.
    pub fn matches_tempo_range(song: &SongRecord, tempo_range: Option<(f32, f32)>) -> bool {
        let Some((min_bpm, max_bpm)) = tempo_range else {
            return true;
        };

        song.tempo >= min_bpm && song.tempo <= max_bpm
    }

    /// Apply all enforced predicates to determine if a song is a candidate.
    ///
    /// Danceability is carried on the constraint but intentionally not
    /// enforced here; the upstream product never settled on a window for
    /// it, so the field stays informational until that is decided.
    pub fn should_include_song(song: &SongRecord, constraint: &Constraint) -> bool {
        song.matches_genres(&constraint.genres)
            && Self::matches_popularity_window(song, constraint.popularity)
            && Self::matches_tempo_range(song, constraint.tempo_range)
    }

    /// Primary pass: select and rank candidates honoring the full
    /// constraint, genre set included
    pub fn filter_candidates(catalog: &[SongRecord], constraint: &Constraint) -> Vec<SongRecord> {
        let mut candidates: Vec<SongRecord> = catalog
            .iter()
            .filter(|song| Self::should_include_song(song, constraint))
            .cloned()
            .collect();

        Self::rank_by_popularity(&mut candidates);
        candidates
    }

    /// Match-all fallback pass: identical popularity and tempo predicates,
    /// genre constraint dropped
    pub fn filter_match_all(catalog: &[SongRecord], constraint: &Constraint) -> Vec<SongRecord> {
        let relaxed = Constraint {
            genres: Vec::new(),
            ..constraint.clone()
        };
        Self::filter_candidates(catalog, &relaxed)
    }

    /// Rank candidates by popularity descending. The sort is stable so
    /// ties keep their catalog order and generation stays deterministic.
    fn rank_by_popularity(candidates: &mut [SongRecord]) {
        candidates.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    }
}
