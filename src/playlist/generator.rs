use std::collections::HashSet;

use super::filters::{SongFilters, MIN_SONGS};
use super::utils::{
    accumulate_by_duration, assemble_segments, merge_candidate_pools, tag_full_playlist,
    PlaylistNaming,
};
use super::{Constraint, EventRequest, Playlist, PlaylistMetadata, SegmentSpec, SEGMENT_ORDER};
use crate::models::{SelectedSong, SongRecord};

/// Selection result plus any advisory warnings recorded along the way
#[derive(Debug)]
pub struct GenerationOutcome {
    pub songs: Vec<SelectedSong>,
    pub warnings: Vec<String>,
}

/// Main playlist generator
pub struct PlaylistGenerator {
    request: EventRequest,
}

impl PlaylistGenerator {
    pub fn new(request: EventRequest) -> Self {
        Self { request }
    }

    /// Generate a playlist for this generator's request. Wedding requests
    /// get the segmented treatment; everything else is a single pool.
    pub fn generate(&self, catalog: &[SongRecord]) -> Playlist {
        let constraint = self.request.constraint();

        let outcome = if self.request.is_wedding() {
            Self::generate_wedding(catalog, &self.request.segments(), &constraint)
        } else {
            Self::generate_regular(catalog, &constraint)
        };

        let metadata = PlaylistMetadata::calculate(&outcome.songs);
        Playlist {
            name: PlaylistNaming::generate_playlist_name(&self.request.name, &metadata),
            songs: outcome.songs,
            metadata,
            warnings: outcome.warnings,
        }
    }

    /// Single-pool generation: filter with fallback, accumulate to the
    /// duration budget, tag everything as the "Full" segment
    pub fn generate_regular(catalog: &[SongRecord], constraint: &Constraint) -> GenerationOutcome {
        let genre_matched = SongFilters::filter_candidates(catalog, constraint);
        let match_all = SongFilters::filter_match_all(catalog, constraint);

        let mut warnings = Vec::new();
        let pool = merge_candidate_pools(genre_matched, &match_all, &HashSet::new());
        if pool.len() < MIN_SONGS {
            warnings.push(format!(
                "Only {} candidates found after fallback (wanted at least {MIN_SONGS})",
                pool.len()
            ));
        }

        let selected = accumulate_by_duration(pool, constraint.duration_minutes);
        GenerationOutcome {
            songs: tag_full_playlist(selected),
            warnings,
        }
    }

    /// Wedding generation: one filter+fallback pass per segment, global
    /// deduplication across segments, then per-segment accumulation and
    /// canonical-order assembly.
    pub fn generate_wedding(
        catalog: &[SongRecord],
        segments: &[SegmentSpec],
        base_constraint: &Constraint,
    ) -> GenerationOutcome {
        // Fetch phase: each segment's raw pools depend only on the catalog
        // and its own constraint, so this loop has no shared state and
        // could run segments concurrently.
        let fetched: Vec<(&SegmentSpec, Vec<SongRecord>, Vec<SongRecord>)> =
            Self::in_canonical_order(segments)
                .into_iter()
                .map(|segment| {
                    let constraint = base_constraint.for_segment(segment);
                    let genre_matched = SongFilters::filter_candidates(catalog, &constraint);
                    let match_all = SongFilters::filter_match_all(catalog, &constraint);
                    (segment, genre_matched, match_all)
                })
                .collect();

        // Claim phase: strictly sequential in canonical order. The claimed
        // set is owned here and mutated nowhere else; earlier segments get
        // first claim on songs that qualify for more than one segment.
        let mut claimed: HashSet<String> = HashSet::new();
        let mut warnings = Vec::new();
        let mut results: Vec<(String, Vec<SongRecord>)> = Vec::new();

        for (segment, genre_matched, match_all) in fetched {
            let pool = merge_candidate_pools(genre_matched, &match_all, &claimed);

            if pool.is_empty() {
                warnings.push(format!(
                    "Segment '{}' has no usable candidates, even after fallback",
                    segment.label
                ));
            } else if pool.len() < MIN_SONGS {
                warnings.push(format!(
                    "Segment '{}' only has {} candidates (wanted at least {MIN_SONGS})",
                    segment.label,
                    pool.len()
                ));
            }

            claimed.extend(pool.iter().map(|s| s.track_id.clone()));

            let selected = accumulate_by_duration(pool, segment.duration_minutes);
            results.push((segment.label.clone(), selected));
        }

        GenerationOutcome {
            songs: assemble_segments(results),
            warnings,
        }
    }

    /// Order segments canonically (Reception, ceremony, Dancing); segments
    /// with unrecognized labels keep their relative order at the end
    fn in_canonical_order(segments: &[SegmentSpec]) -> Vec<&SegmentSpec> {
        let mut ordered: Vec<&SegmentSpec> = Vec::with_capacity(segments.len());

        for canonical in SEGMENT_ORDER {
            ordered.extend(segments.iter().filter(|s| s.label == canonical));
        }
        ordered.extend(
            segments
                .iter()
                .filter(|s| !SEGMENT_ORDER.contains(&s.label.as_str())),
        );

        ordered
    }
}
