use serde::{Deserialize, Serialize};

use super::tempo::map_tempo;

/// Canonical wedding segment order. Earlier segments have first claim on
/// songs during cross-segment deduplication, and output concatenation
/// follows this order. The labels are canonical as-is, odd casing included.
pub const SEGMENT_ORDER: [&str; 3] = ["Reception", "ceremony", "Dancing"];

/// Segment label used for single-segment (non-wedding) playlists
pub const FULL_SEGMENT: &str = "Full";

/// One selection request against the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constraint {
    pub genres: Vec<String>, // empty means "no genre filter"
    pub popularity: u32,     // 0-100 target, matched within a +/-20 window
    pub danceability: u32,   // 0-100, informational only (see filters.rs)
    pub duration_minutes: u64,
    pub tempo_range: Option<(f32, f32)>, // inclusive BPM bounds
    pub segment: Option<String>,         // tag only, never filters
}

impl Constraint {
    /// Derive the constraint for one wedding segment: same genre and
    /// popularity targets, the segment's own tempo range and budget.
    pub fn for_segment(&self, segment: &SegmentSpec) -> Constraint {
        Constraint {
            genres: self.genres.clone(),
            popularity: self.popularity,
            danceability: self.danceability,
            duration_minutes: segment.duration_minutes,
            tempo_range: Some(segment.tempo_range),
            segment: Some(segment.label.clone()),
        }
    }
}

/// A named sub-request of a wedding playlist, built fresh per generation
/// from user-supplied tempo labels and durations
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSpec {
    pub label: String,
    pub tempo_range: (f32, f32),
    pub duration_minutes: u64,
}

/// Wedding segment settings as they appear in the request file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeddingSegmentConfig {
    pub reception_tempo: String,
    pub reception_duration: u64,
    pub ceremony_tempo: String,
    pub ceremony_duration: u64,
    pub dancing_tempo: String,
    pub dancing_duration: u64,
}

impl WeddingSegmentConfig {
    /// Expand into the three concrete segments, mapping tempo labels to
    /// BPM ranges
    pub fn to_segments(&self) -> Vec<SegmentSpec> {
        vec![
            SegmentSpec {
                label: SEGMENT_ORDER[0].to_string(),
                tempo_range: map_tempo(&self.reception_tempo),
                duration_minutes: self.reception_duration,
            },
            SegmentSpec {
                label: SEGMENT_ORDER[1].to_string(),
                tempo_range: map_tempo(&self.ceremony_tempo),
                duration_minutes: self.ceremony_duration,
            },
            SegmentSpec {
                label: SEGMENT_ORDER[2].to_string(),
                tempo_range: map_tempo(&self.dancing_tempo),
                duration_minutes: self.dancing_duration,
            },
        ]
    }
}

impl Default for WeddingSegmentConfig {
    fn default() -> Self {
        Self {
            reception_tempo: "slow".to_string(),
            reception_duration: 30,
            ceremony_tempo: "medium".to_string(),
            ceremony_duration: 15,
            dancing_tempo: "fast".to_string(),
            dancing_duration: 60,
        }
    }
}

/// One playlist generation request loaded from the request file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    pub name: String,       // Name for this request, used in the playlist title
    pub event_type: String, // "wedding" gets the segmented treatment
    pub genres: Vec<String>,
    pub popularity: u32,
    #[serde(default)]
    pub danceability: u32,
    pub duration_minutes: u64,
    #[serde(default)]
    pub wedding_segments: Option<WeddingSegmentConfig>,
}

impl EventRequest {
    pub fn is_wedding(&self) -> bool {
        self.event_type.eq_ignore_ascii_case("wedding")
    }

    /// Base constraint shared by every segment of this request
    pub fn constraint(&self) -> Constraint {
        Constraint {
            genres: self.genres.clone(),
            popularity: self.popularity,
            danceability: self.danceability,
            duration_minutes: self.duration_minutes,
            tempo_range: None,
            segment: None,
        }
    }

    /// The wedding segments for this request, falling back to the default
    /// tempo/duration split when the request file omits them
    pub fn segments(&self) -> Vec<SegmentSpec> {
        self.wedding_segments
            .clone()
            .unwrap_or_default()
            .to_segments()
    }

    /// Load generation requests directly from a JSON array file
    pub fn load_all_from_file(path: &str) -> Result<Vec<EventRequest>, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let requests: Vec<EventRequest> = serde_json::from_str(&content)?;
        Ok(requests)
    }
}

impl Default for EventRequest {
    fn default() -> Self {
        Self {
            name: "Event Playlist".to_string(),
            event_type: "party".to_string(),
            genres: Vec::new(),
            popularity: 50,
            danceability: 50,
            duration_minutes: 60,
            wedding_segments: None,
        }
    }
}
