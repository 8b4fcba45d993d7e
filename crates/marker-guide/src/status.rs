use crate::direction::DirectionSet;

/// The status line shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// The text to display.
    pub text: String,
    /// Whether the status needs the operator's attention.
    pub alert: bool,
}

/// Describe the guidance state of a frame.
///
/// # Arguments
///
/// * `marker_id` - The id of the guiding marker, `None` if no marker was detected.
/// * `directions` - The camera moves needed to center the marker.
///
/// # Returns
///
/// The status text and whether it is an alert. Only a centered marker is not an alert.
pub fn describe_state(marker_id: Option<u32>, directions: &DirectionSet) -> Status {
    match marker_id {
        None => Status {
            text: "No markers detected".to_string(),
            alert: true,
        },
        Some(id) if directions.is_empty() => Status {
            text: format!("Centered. Marker ID: {id}"),
            alert: false,
        },
        Some(id) => Status {
            text: format!("Marker ID: {id}. Move camera: {}", directions.join(" + ")),
            alert: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::{Horizontal, Vertical};

    #[test]
    fn test_no_marker() {
        let status = describe_state(None, &DirectionSet::default());
        assert_eq!(status.text, "No markers detected");
        assert!(status.alert);

        // directions are irrelevant without a marker
        let dirs = DirectionSet {
            horizontal: Some(Horizontal::Left),
            vertical: Some(Vertical::Up),
        };
        assert_eq!(describe_state(None, &dirs), status);
    }

    #[test]
    fn test_centered() {
        let status = describe_state(Some(42), &DirectionSet::default());
        assert_eq!(status.text, "Centered. Marker ID: 42");
        assert!(!status.alert);
    }

    #[test]
    fn test_move_single() {
        let dirs = DirectionSet {
            horizontal: Some(Horizontal::Right),
            vertical: None,
        };
        let status = describe_state(Some(3), &dirs);
        assert_eq!(status.text, "Marker ID: 3. Move camera: right");
        assert!(status.alert);
    }

    #[test]
    fn test_move_both() {
        let dirs = DirectionSet {
            horizontal: Some(Horizontal::Left),
            vertical: Some(Vertical::Down),
        };
        let status = describe_state(Some(0), &dirs);
        assert_eq!(status.text, "Marker ID: 0. Move camera: left + down");
        assert!(status.alert);
    }
}
