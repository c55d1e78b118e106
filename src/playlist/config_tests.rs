#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_request_file_parses_regular_and_wedding_entries() {
        let json = r#"[
            {
                "name": "Office Party",
                "event_type": "corporate",
                "genres": ["pop", "rock"],
                "popularity": 65,
                "danceability": 70,
                "duration_minutes": 90
            },
            {
                "name": "June Wedding",
                "event_type": "wedding",
                "genres": ["acoustic"],
                "popularity": 55,
                "duration_minutes": 105,
                "wedding_segments": {
                    "reception_tempo": "slow",
                    "reception_duration": 30,
                    "ceremony_tempo": "medium",
                    "ceremony_duration": 15,
                    "dancing_tempo": "fast",
                    "dancing_duration": 60
                }
            }
        ]"#;

        let requests: Vec<EventRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(requests.len(), 2);

        let party = &requests[0];
        assert!(!party.is_wedding());
        assert_eq!(party.genres, vec!["pop", "rock"]);
        assert_eq!(party.danceability, 70);
        assert!(party.wedding_segments.is_none());

        let wedding = &requests[1];
        assert!(wedding.is_wedding());
        // danceability omitted in the file defaults to zero
        assert_eq!(wedding.danceability, 0);
        assert!(wedding.wedding_segments.is_some());
    }

    #[test]
    fn test_wedding_segments_expand_in_canonical_order() {
        let config = WeddingSegmentConfig {
            reception_tempo: "slow".to_string(),
            reception_duration: 30,
            ceremony_tempo: "medium".to_string(),
            ceremony_duration: 15,
            dancing_tempo: "fast".to_string(),
            dancing_duration: 60,
        };

        let segments = config.to_segments();

        let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, SEGMENT_ORDER);

        assert_eq!(segments[0].tempo_range, (50.0, 75.0));
        assert_eq!(segments[1].tempo_range, (90.0, 115.0));
        assert_eq!(segments[2].tempo_range, (120.0, 150.0));
        assert_eq!(segments[0].duration_minutes, 30);
        assert_eq!(segments[2].duration_minutes, 60);
    }

    #[test]
    fn test_unrecognized_tempo_label_falls_back_to_medium() {
        let config = WeddingSegmentConfig {
            reception_tempo: "waltz".to_string(),
            ..Default::default()
        };

        let segments = config.to_segments();
        assert_eq!(segments[0].tempo_range, (90.0, 115.0));
    }

    #[test]
    fn test_segment_constraint_inherits_base_and_overrides_tempo() {
        let request = EventRequest {
            name: "Wedding".to_string(),
            event_type: "wedding".to_string(),
            genres: vec!["pop".to_string()],
            popularity: 55,
            danceability: 40,
            duration_minutes: 105,
            wedding_segments: Some(WeddingSegmentConfig::default()),
        };

        let base = request.constraint();
        assert_eq!(base.tempo_range, None);
        assert_eq!(base.segment, None);

        let segments = request.segments();
        let ceremony = base.for_segment(&segments[1]);

        assert_eq!(ceremony.genres, base.genres);
        assert_eq!(ceremony.popularity, 55);
        assert_eq!(ceremony.tempo_range, Some((90.0, 115.0)));
        assert_eq!(ceremony.duration_minutes, 15);
        assert_eq!(ceremony.segment.as_deref(), Some("ceremony"));
    }

    #[test]
    fn test_requests_without_segments_use_the_default_split() {
        let request = EventRequest {
            event_type: "wedding".to_string(),
            wedding_segments: None,
            ..Default::default()
        };

        let segments = request.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].tempo_range, (50.0, 75.0));
        assert_eq!(segments[2].tempo_range, (120.0, 150.0));
    }

    #[test]
    fn test_load_all_from_missing_file_is_an_error() {
        assert!(EventRequest::load_all_from_file("no-such-requests.json").is_err());
    }
}
