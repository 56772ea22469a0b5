use aws_sdk_rekognition::types::FaceMatch;

/// Outcome of one collection search.
///
/// A match without an `ExternalImageId` is still a match; the enrolled face
/// simply carries no staff identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchVerdict {
    Match {
        staff_id: Option<String>,
        similarity: f32,
    },
    NoMatch,
}

/// Only the top match counts; the search is capped at one result anyway.
pub(crate) fn verdict_from_matches(matches: &[FaceMatch]) -> SearchVerdict {
    match matches.first() {
        Some(top) => SearchVerdict::Match {
            staff_id: top
                .face()
                .and_then(|face| face.external_image_id())
                .map(str::to_string),
            similarity: top.similarity().unwrap_or_default(),
        },
        None => SearchVerdict::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_rekognition::types::Face;

    fn face_match(staff_id: Option<&str>, similarity: f32) -> FaceMatch {
        let mut face = Face::builder().face_id("f-0000");
        if let Some(staff_id) = staff_id {
            face = face.external_image_id(staff_id);
        }
        FaceMatch::builder()
            .similarity(similarity)
            .face(face.build())
            .build()
    }

    #[test]
    fn empty_match_list_is_no_match() {
        assert_eq!(verdict_from_matches(&[]), SearchVerdict::NoMatch);
    }

    #[test]
    fn top_match_identifier_wins() {
        let matches = vec![face_match(Some("S123"), 99.1), face_match(Some("S456"), 91.0)];

        let verdict = verdict_from_matches(&matches);

        assert_eq!(
            verdict,
            SearchVerdict::Match {
                staff_id: Some("S123".to_string()),
                similarity: 99.1,
            }
        );
    }

    #[test]
    fn match_without_external_id_still_authenticates() {
        let matches = vec![face_match(None, 95.0)];

        let verdict = verdict_from_matches(&matches);

        assert_eq!(
            verdict,
            SearchVerdict::Match {
                staff_id: None,
                similarity: 95.0,
            }
        );
    }
}
