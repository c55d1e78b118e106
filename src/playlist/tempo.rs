/// Convert a coarse tempo label into an inclusive BPM range.
///
/// Unrecognized or empty labels deliberately fall through to the medium
/// range rather than erroring; tempo selection is permissive by design
/// of the upstream UI, which only ever offers the three labels.
pub fn map_tempo(label: &str) -> (f32, f32) {
    match label {
        "slow" => (50.0, 75.0),
        "medium" => (90.0, 115.0),
        "fast" => (120.0, 150.0),
        _ => (90.0, 115.0),
    }
}
