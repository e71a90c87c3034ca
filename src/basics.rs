//! Foundation types, constants, and path command utilities.
//!
//! Sub-pixel precision, the filling rule, path command codes and the
//! [`VertexSource`] trait that feeds the rasterizer.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ============================================================================
// Subpixel constants
// ============================================================================

/// Number of fractional bits in rasterizer coordinates (28.4 fixed-point).
///
/// With 4 fractional bits and 32-bit integers the safe coordinate range is
/// roughly `[-32768, 32767]` pixels once area products are taken into account.
pub const POLY_SUBPIXEL_SHIFT: u32 = 4;
pub const POLY_SUBPIXEL_SCALE: u32 = 1 << POLY_SUBPIXEL_SHIFT;
pub const POLY_SUBPIXEL_MASK: u32 = POLY_SUBPIXEL_SCALE - 1;

/// Convert a pixel coordinate to 28.4 fixed-point (truncating).
#[inline]
pub fn poly_coord(c: f64) -> i32 {
    (c * POLY_SUBPIXEL_SCALE as f64) as i32
}

// ============================================================================
// Filling rule
// ============================================================================

/// Filling rule for polygon rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FillingRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FromStr for FillingRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nonzero" | "non-zero" => Ok(FillingRule::NonZero),
            "evenodd" | "even-odd" => Ok(FillingRule::EvenOdd),
            _ => Err(Error::UnknownFillingRule(s.to_owned())),
        }
    }
}

impl fmt::Display for FillingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillingRule::NonZero => f.write_str("non-zero"),
            FillingRule::EvenOdd => f.write_str("even-odd"),
        }
    }
}

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
pub const PATH_CMD_CURVE3: u32 = 3;
pub const PATH_CMD_CURVE4: u32 = 4;
pub const PATH_CMD_END_POLY: u32 = 0x0F;
pub const PATH_CMD_MASK: u32 = 0x0F;

pub const PATH_FLAGS_NONE: u32 = 0;
pub const PATH_FLAGS_CCW: u32 = 0x10;
pub const PATH_FLAGS_CW: u32 = 0x20;
pub const PATH_FLAGS_CLOSE: u32 = 0x40;

/// Any command that carries a vertex (move, line, or curve control point).
#[inline]
pub fn is_vertex(c: u32) -> bool {
    (PATH_CMD_MOVE_TO..PATH_CMD_END_POLY).contains(&c)
}

#[inline]
pub fn is_drawing(c: u32) -> bool {
    (PATH_CMD_LINE_TO..PATH_CMD_END_POLY).contains(&c)
}

#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

#[inline]
pub fn is_line_to(c: u32) -> bool {
    c == PATH_CMD_LINE_TO
}

#[inline]
pub fn is_curve(c: u32) -> bool {
    c == PATH_CMD_CURVE3 || c == PATH_CMD_CURVE4
}

#[inline]
pub fn is_end_poly(c: u32) -> bool {
    (c & PATH_CMD_MASK) == PATH_CMD_END_POLY
}

#[inline]
pub fn is_close(c: u32) -> bool {
    (c & !(PATH_FLAGS_CW | PATH_FLAGS_CCW)) == (PATH_CMD_END_POLY | PATH_FLAGS_CLOSE)
}

// ============================================================================
// VertexSource trait
// ============================================================================

/// A producer of path commands in pixel space.
///
/// Curves must already be flattened: the rasterizer treats every drawing
/// command as a straight segment to the returned vertex.
pub trait VertexSource {
    /// Restart iteration of the path with the given id.
    fn rewind(&mut self, path_id: u32);

    /// Write the next vertex into `x`, `y` and return its command.
    /// Returns [`PATH_CMD_STOP`] when exhausted.
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poly_coord_truncates() {
        assert_eq!(poly_coord(1.0), 16);
        assert_eq!(poly_coord(2.5), 40);
        assert_eq!(poly_coord(0.99), 15);
        assert_eq!(poly_coord(-1.0), -16);
    }

    #[test]
    fn test_filling_rule_parse() {
        assert_eq!("nonzero".parse::<FillingRule>().unwrap(), FillingRule::NonZero);
        assert_eq!("Even-Odd".parse::<FillingRule>().unwrap(), FillingRule::EvenOdd);
        assert!(matches!(
            "winding".parse::<FillingRule>(),
            Err(Error::UnknownFillingRule(s)) if s == "winding"
        ));
    }

    #[test]
    fn test_filling_rule_display_roundtrip() {
        for rule in [FillingRule::NonZero, FillingRule::EvenOdd] {
            assert_eq!(rule.to_string().parse::<FillingRule>().unwrap(), rule);
        }
    }

    #[test]
    fn test_command_predicates() {
        assert!(is_vertex(PATH_CMD_MOVE_TO));
        assert!(is_vertex(PATH_CMD_CURVE4));
        assert!(!is_vertex(PATH_CMD_STOP));
        assert!(!is_vertex(PATH_CMD_END_POLY));
        assert!(is_drawing(PATH_CMD_LINE_TO));
        assert!(!is_drawing(PATH_CMD_MOVE_TO));
        assert!(is_curve(PATH_CMD_CURVE3));
        assert!(is_line_to(PATH_CMD_LINE_TO));
        assert!(is_end_poly(PATH_CMD_END_POLY | PATH_FLAGS_CLOSE));
        assert!(is_close(PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | PATH_FLAGS_CCW));
        assert!(!is_close(PATH_CMD_END_POLY));
    }
}
