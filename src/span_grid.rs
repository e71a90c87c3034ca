//! Span policies: how a renderer writes one span into a row.
//!
//! A policy decides how coverage is applied. [`SpanGrid`] ignores it and
//! stamps a flat feature id, which is what a hit grid needs; [`SpanGray8`]
//! keeps the coverage bytes as pixel values.

use crate::rendering_buffer::GridValue;

// ============================================================================
// SpanPolicy trait
// ============================================================================

/// The pixel-sink contract used by [`GridRenderer`](crate::grid_renderer::GridRenderer).
///
/// `row` is one full row of the target buffer. Callers guarantee that
/// `x + count <= row.len()` and `count > 0`.
pub trait SpanPolicy {
    type Value: Copy;

    /// Paint `count` pixels from `x` with per-pixel coverage `covers`.
    fn render(row: &mut [Self::Value], x: usize, count: usize, covers: &[u8], value: Self::Value);

    /// Paint `count` pixels from `x` with `value`, no coverage.
    fn hline(row: &mut [Self::Value], x: usize, count: usize, value: Self::Value);

    /// Read the pixel at `x`.
    fn get(row: &[Self::Value], x: usize) -> Self::Value;
}

// ============================================================================
// SpanGrid
// ============================================================================

/// Solid fill of feature ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanGrid;

impl SpanPolicy for SpanGrid {
    type Value = GridValue;

    #[inline]
    fn render(row: &mut [GridValue], x: usize, count: usize, _covers: &[u8], value: GridValue) {
        row[x..x + count].fill(value);
    }

    #[inline]
    fn hline(row: &mut [GridValue], x: usize, count: usize, value: GridValue) {
        row[x..x + count].fill(value);
    }

    #[inline]
    fn get(row: &[GridValue], x: usize) -> GridValue {
        row[x]
    }
}

// ============================================================================
// SpanGray8
// ============================================================================

/// Coverage mask: each pixel receives its raw coverage value.
///
/// `value` is only used by `hline`, e.g. to clear the mask.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanGray8;

impl SpanPolicy for SpanGray8 {
    type Value = u8;

    #[inline]
    fn render(row: &mut [u8], x: usize, count: usize, covers: &[u8], _value: u8) {
        row[x..x + count].copy_from_slice(&covers[..count]);
    }

    #[inline]
    fn hline(row: &mut [u8], x: usize, count: usize, value: u8) {
        row[x..x + count].fill(value);
    }

    #[inline]
    fn get(row: &[u8], x: usize) -> u8 {
        row[x]
    }
}
