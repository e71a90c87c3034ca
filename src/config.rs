//! Rasterizer configuration.

use crate::basics::FillingRule;
use crate::error::{Error, Result};

/// Smallest supported anti-alias shift (binary coverage).
pub const AA_SHIFT_MIN: u32 = 1;
/// Largest supported anti-alias shift (coverage fits a byte).
pub const AA_SHIFT_MAX: u32 = 8;
/// Default shift used for hit grids: two coverage levels.
pub const AA_SHIFT_DEFAULT: u32 = 1;

/// Per-pass settings of a [`GridRasterizer`](crate::grid_rasterizer::GridRasterizer).
///
/// `aa_shift` selects `1 << aa_shift` coverage levels. A hit grid only needs
/// to know whether a pixel belongs to a feature, so the default is 1; image
/// compositing wants 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RasterizerConfig {
    pub filling_rule: FillingRule,
    pub aa_shift: u32,
}

impl RasterizerConfig {
    pub fn new(filling_rule: FillingRule, aa_shift: u32) -> Result<Self> {
        let config = Self {
            filling_rule,
            aa_shift,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that `aa_shift` is within `AA_SHIFT_MIN..=AA_SHIFT_MAX`.
    pub fn validate(&self) -> Result<()> {
        if (AA_SHIFT_MIN..=AA_SHIFT_MAX).contains(&self.aa_shift) {
            Ok(())
        } else {
            Err(Error::InvalidAaShift(self.aa_shift))
        }
    }

    /// Maximum coverage value produced under this configuration.
    #[inline]
    pub fn aa_mask(&self) -> u32 {
        (1 << self.aa_shift) - 1
    }
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            filling_rule: FillingRule::NonZero,
            aa_shift: AA_SHIFT_DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_binary_non_zero() {
        let config = RasterizerConfig::default();
        assert_eq!(config.filling_rule, FillingRule::NonZero);
        assert_eq!(config.aa_shift, 1);
        assert_eq!(config.aa_mask(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_aa_shift_bounds() {
        assert!(RasterizerConfig::new(FillingRule::EvenOdd, 8).is_ok());
        assert_eq!(
            RasterizerConfig::new(FillingRule::NonZero, 0),
            Err(Error::InvalidAaShift(0))
        );
        assert_eq!(
            RasterizerConfig::new(FillingRule::NonZero, 9),
            Err(Error::InvalidAaShift(9))
        );
    }

    #[test]
    fn test_aa_mask() {
        let config = RasterizerConfig::new(FillingRule::NonZero, 8).unwrap();
        assert_eq!(config.aa_mask(), 255);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_with_defaults() {
        let config: RasterizerConfig =
            serde_json::from_str(r#"{ "filling_rule": "even-odd" }"#).unwrap();
        assert_eq!(config.filling_rule, FillingRule::EvenOdd);
        assert_eq!(config.aa_shift, AA_SHIFT_DEFAULT);

        let json = serde_json::to_string(&RasterizerConfig::default()).unwrap();
        assert_eq!(json, r#"{"filling_rule":"non-zero","aa_shift":1}"#);
    }
}
