//! Slide direction and the per-direction policy table.
//!
//! Everything that differs between the four edges (which axis the pointer is
//! read on, which margin moves, which way counts as "hiding") is captured in
//! a [`DirectionPolicy`] looked up once from the [`Direction`].

use std::fmt;
use std::str::FromStr;

use swipehide_core::geometry::Size;
use swipehide_core::math::Vec2;

/// The edge an element slides out through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// No direction configured; show/hide are rejected.
    #[default]
    Unset,
    Left,
    Top,
    Right,
    Bottom,
}

/// Layout axis a direction slides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Size of the element along this axis.
    pub fn extent(self, size: Size<i32>) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Pointer coordinate along this axis, truncated to layout units.
    pub fn coordinate(self, position: Vec2) -> i32 {
        match self {
            Axis::Horizontal => position.x as i32,
            Axis::Vertical => position.y as i32,
        }
    }
}

/// One of the four margin fields of the layout params.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

/// How a direction maps onto pointer coordinates and margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionPolicy {
    pub axis: Axis,
    pub edge: Edge,
    /// Sign of pointer movement that pushes the element off-screen:
    /// `-1` for left/top, `+1` for right/bottom.
    pub hide_sign: i32,
}

impl DirectionPolicy {
    /// Whether a pointer step of `moved` layout units points toward hiding.
    /// Zero movement has no direction.
    pub fn step_intent(&self, moved: i32) -> Option<bool> {
        match moved.signum() * self.hide_sign {
            0 => None,
            s => Some(s > 0),
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
    ];

    /// Policy for this direction, `None` when unset.
    pub const fn policy(self) -> Option<DirectionPolicy> {
        let (axis, edge, hide_sign) = match self {
            Direction::Unset => return None,
            Direction::Left => (Axis::Horizontal, Edge::Left, -1),
            Direction::Top => (Axis::Vertical, Edge::Top, -1),
            Direction::Right => (Axis::Horizontal, Edge::Right, 1),
            Direction::Bottom => (Axis::Vertical, Edge::Bottom, 1),
        };
        Some(DirectionPolicy {
            axis,
            edge,
            hide_sign,
        })
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, Direction::Unset)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::Unset => "unset",
            Direction::Left => "left",
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a direction attribute cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDirectionError {
    UnknownCode(i32),
    UnknownName(String),
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDirectionError::UnknownCode(code) => {
                write!(f, "Unknown direction code {} (expected 0..=4)", code)
            }
            ParseDirectionError::UnknownName(name) => write!(f, "Unknown direction '{}'", name),
        }
    }
}

impl std::error::Error for ParseDirectionError {}

/// Attribute codes: 0 unset, 1 left, 2 top, 3 right, 4 bottom.
impl TryFrom<i32> for Direction {
    type Error = ParseDirectionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Unset),
            1 => Ok(Direction::Left),
            2 => Ok(Direction::Top),
            3 => Ok(Direction::Right),
            4 => Ok(Direction::Bottom),
            other => Err(ParseDirectionError::UnknownCode(other)),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unset" | "none" => Ok(Direction::Unset),
            "left" => Ok(Direction::Left),
            "top" => Ok(Direction::Top),
            "right" => Ok(Direction::Right),
            "bottom" => Ok(Direction::Bottom),
            _ => Err(ParseDirectionError::UnknownName(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        assert_eq!(Direction::default(), Direction::Unset);
        assert!(Direction::Unset.policy().is_none());
        assert!(!Direction::Unset.is_set());
    }

    #[test]
    fn test_policy_table() {
        let left = Direction::Left.policy().unwrap();
        assert_eq!(left.axis, Axis::Horizontal);
        assert_eq!(left.edge, Edge::Left);
        assert_eq!(left.hide_sign, -1);

        let bottom = Direction::Bottom.policy().unwrap();
        assert_eq!(bottom.axis, Axis::Vertical);
        assert_eq!(bottom.edge, Edge::Bottom);
        assert_eq!(bottom.hide_sign, 1);
    }

    #[test]
    fn test_step_intent() {
        let left = Direction::Left.policy().unwrap();
        assert_eq!(left.step_intent(-3), Some(true));
        assert_eq!(left.step_intent(4), Some(false));
        assert_eq!(left.step_intent(0), None);

        let right = Direction::Right.policy().unwrap();
        assert_eq!(right.step_intent(5), Some(true));
        assert_eq!(right.step_intent(-1), Some(false));
    }

    #[test]
    fn test_axis_reads() {
        let size = Size::new(200, 80);
        assert_eq!(Axis::Horizontal.extent(size), 200);
        assert_eq!(Axis::Vertical.extent(size), 80);
        assert_eq!(Axis::Horizontal.coordinate(Vec2::new(10.9, 3.0)), 10);
        assert_eq!(Axis::Vertical.coordinate(Vec2::new(10.9, 3.7)), 3);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Direction::try_from(3), Ok(Direction::Right));
        assert_eq!(
            Direction::try_from(9),
            Err(ParseDirectionError::UnknownCode(9))
        );
        assert_eq!(" Top ".parse::<Direction>(), Ok(Direction::Top));
        assert_eq!("none".parse::<Direction>(), Ok(Direction::Unset));
        assert!("diagonal".parse::<Direction>().is_err());
        assert_eq!(Direction::Bottom.to_string(), "bottom");
    }
}
