//! Unpacked scanline container.
//!
//! Stores per-pixel coverage values of one output row in a flat array
//! indexed by `x - min_x`, with spans referencing into it.
//!
//! Usage protocol:
//! 1. `reset(min_x, max_x, dx, dy)`: size the covers array for the x-extent
//! 2. `add_cell()` / `add_span()`: accumulate one row, X strictly increasing.
//!    Before each call check `is_ready(y)`: if the row changed, render the
//!    scanline and call `reset_spans()` first.
//! 3. Iterate with [`Scanline::iter`] to render spans.

// ============================================================================
// ScanlineSpan
// ============================================================================

/// A span record: offset of its first pixel from `min_x` and its length.
#[derive(Debug, Clone, Copy, Default)]
struct ScanlineSpan {
    offset: usize,
    len: usize,
}

/// A span yielded by [`ScanlineIter`].
///
/// `x` is relative to [`Scanline::base_x`]; `covers` holds one value per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub x: i32,
    pub covers: &'a [u8],
}

impl Span<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.covers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }
}

// ============================================================================
// Scanline
// ============================================================================

const LAST_UNSET: i32 = 0x7FFF_FFF0;

/// Row accumulator with per-pixel u8 coverage.
#[derive(Debug)]
pub struct Scanline {
    min_x: i32,
    dx: i32,
    dy: i32,
    last_x: i32,
    last_y: i32,
    covers: Vec<u8>,
    spans: Vec<ScanlineSpan>,
}

impl Scanline {
    pub fn new() -> Self {
        Self {
            min_x: 0,
            dx: 0,
            dy: 0,
            last_x: LAST_UNSET,
            last_y: LAST_UNSET,
            covers: Vec::new(),
            spans: Vec::new(),
        }
    }

    /// Prepare for a pass over cells with x in `min_x..=max_x`.
    ///
    /// `(dx, dy)` translate every emitted row.
    pub fn reset(&mut self, min_x: i32, max_x: i32, dx: i32, dy: i32) {
        let max_len = (max_x - min_x + 2) as usize;
        if max_len > self.covers.len() {
            self.covers.resize(max_len, 0);
        }
        self.min_x = min_x;
        self.dx = dx;
        self.dy = dy;
        self.reset_spans();
    }

    /// Clear the spans of the current row, keeping buffers.
    #[inline]
    pub fn reset_spans(&mut self) {
        self.last_x = LAST_UNSET;
        self.last_y = LAST_UNSET;
        self.spans.clear();
    }

    /// Record a single pixel at `(x, y)` with coverage `cover`.
    #[inline]
    pub fn add_cell(&mut self, x: i32, y: i32, cover: u32) {
        self.check_order(x, y);
        let xi = (x - self.min_x) as usize;
        self.covers[xi] = cover as u8;
        self.push(xi, 1);
        self.last_x = xi as i32;
        self.last_y = y;
    }

    /// Record `len` pixels starting at `(x, y)`, all with coverage `cover`.
    #[inline]
    pub fn add_span(&mut self, x: i32, y: i32, len: u32, cover: u32) {
        debug_assert!(len > 0);
        self.check_order(x, y);
        let xi = (x - self.min_x) as usize;
        let len = len as usize;
        self.covers[xi..xi + len].fill(cover as u8);
        self.push(xi, len);
        self.last_x = (xi + len) as i32 - 1;
        self.last_y = y;
    }

    /// True if the scanline holds spans of a row other than `y`.
    #[inline]
    pub fn is_ready(&self, y: i32) -> bool {
        !self.spans.is_empty() && y != self.last_y
    }

    /// X that span offsets are relative to (includes the `dx` translation).
    #[inline]
    pub fn base_x(&self) -> i32 {
        self.min_x + self.dx
    }

    /// Row of the accumulated spans (includes the `dy` translation).
    ///
    /// Only meaningful while the scanline holds spans.
    #[inline]
    pub fn y(&self) -> i32 {
        self.last_y.wrapping_add(self.dy)
    }

    #[inline]
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }

    /// Spans in ascending x order.
    pub fn iter(&self) -> ScanlineIter<'_> {
        ScanlineIter {
            covers: &self.covers,
            spans: self.spans.iter(),
        }
    }

    #[inline]
    fn push(&mut self, xi: usize, len: usize) {
        if xi as i32 == self.last_x.wrapping_add(1) {
            if let Some(span) = self.spans.last_mut() {
                span.len += len;
                return;
            }
        }
        self.spans.push(ScanlineSpan { offset: xi, len });
    }

    #[inline]
    fn check_order(&self, x: i32, y: i32) {
        debug_assert!(
            self.spans.is_empty() || y == self.last_y,
            "scanline row changed without reset_spans"
        );
        debug_assert!(
            self.spans.is_empty() || x - self.min_x > self.last_x,
            "scanline x must be strictly increasing"
        );
        debug_assert!(x >= self.min_x && ((x - self.min_x) as usize) < self.covers.len());
    }
}

impl Default for Scanline {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Scanline {
    type Item = Span<'a>;
    type IntoIter = ScanlineIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over the spans of a [`Scanline`].
#[derive(Debug, Clone)]
pub struct ScanlineIter<'a> {
    covers: &'a [u8],
    spans: std::slice::Iter<'a, ScanlineSpan>,
}

impl<'a> Iterator for ScanlineIter<'a> {
    type Item = Span<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.spans.next().map(|span| Span {
            x: span.offset as i32,
            covers: &self.covers[span.offset..span.offset + span.len],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.spans.size_hint()
    }
}

impl ExactSizeIterator for ScanlineIter<'_> {}

// ============================================================================
// Tests
// ============================================================================
