use glam::Vec2;

/// Horizontal camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {
    /// Move the camera to the left.
    Left,
    /// Move the camera to the right.
    Right,
}

/// Vertical camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {
    /// Move the camera up.
    Up,
    /// Move the camera down.
    Down,
}

/// A single camera move direction, regardless of its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move the camera to the left.
    Left,
    /// Move the camera to the right.
    Right,
    /// Move the camera up.
    Up,
    /// Move the camera down.
    Down,
}

impl Direction {
    /// The lowercase name shown to the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Horizontal> for Direction {
    fn from(value: Horizontal) -> Self {
        match value {
            Horizontal::Left => Self::Left,
            Horizontal::Right => Self::Right,
        }
    }
}

impl From<Vertical> for Direction {
    fn from(value: Vertical) -> Self {
        match value {
            Vertical::Up => Self::Up,
            Vertical::Down => Self::Down,
        }
    }
}

/// The set of directions the camera should move to re-center the marker.
///
/// Holds at most one direction per axis, so `left` and `right` (or `up` and `down`)
/// can never be reported together. An empty set means the marker is centered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet {
    /// The horizontal move, if any.
    pub horizontal: Option<Horizontal>,
    /// The vertical move, if any.
    pub vertical: Option<Vertical>,
}

impl DirectionSet {
    /// Returns true when no move is needed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }

    /// Number of directions in the set, between 0 and 2.
    #[inline]
    pub fn len(&self) -> usize {
        self.horizontal.is_some() as usize + self.vertical.is_some() as usize
    }

    /// Returns true if the set contains the given direction.
    pub fn contains(&self, direction: Direction) -> bool {
        self.iter().any(|d| d == direction)
    }

    /// Iterate the directions, horizontal first then vertical.
    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        self.horizontal
            .map(Direction::from)
            .into_iter()
            .chain(self.vertical.map(Direction::from))
    }

    /// Join the direction names with the given separator.
    pub fn join(&self, sep: &str) -> String {
        self.iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// Decide which way the camera should move so the marker becomes centered.
///
/// The mapping follows the camera-move convention: a marker left of the center
/// (`dx < -threshold`) asks to move the camera `right`, and a marker above the center
/// (`dy < -threshold`) asks to move the camera `down`. Both comparisons are strict, so an
/// offset of exactly `threshold` pixels reports nothing on that axis.
///
/// # Arguments
///
/// * `marker_center` - The marker centroid in pixels.
/// * `frame_center` - The frame center in pixels.
/// * `threshold` - The dead-zone half width in pixels.
///
/// # Returns
///
/// The set of directions, empty when the marker is centered.
pub fn compute_directions(marker_center: Vec2, frame_center: Vec2, threshold: f32) -> DirectionSet {
    let d = marker_center - frame_center;

    let horizontal = if d.x < -threshold {
        Some(Horizontal::Right)
    } else if d.x > threshold {
        Some(Horizontal::Left)
    } else {
        None
    };

    let vertical = if d.y < -threshold {
        Some(Vertical::Down)
    } else if d.y > threshold {
        Some(Vertical::Up)
    } else {
        None
    };

    DirectionSet {
        horizontal,
        vertical,
    }
}
