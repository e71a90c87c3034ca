//! Grid rasterizer: polygon ingestion, alpha resolution and hit testing.
//!
//! Feeds path commands into an [`Outline`], then walks the sorted cells once
//! per pass. Adjacent cells of the same pixel are merged, the running cover
//! of the row is resolved into alpha values through the filling rule, and
//! the result is either streamed to a [`RenderScanline`] one row at a time or
//! compared against a query point.
//!
//! ```
//! use agg_grid::{FillingRule, GridRasterizer, PathStorage};
//!
//! // Pentagram: the inner pentagon is wound twice
//! let mut path = PathStorage::from_polygon(&[
//!     (50.0, 10.0),
//!     (73.5, 82.4),
//!     (12.0, 37.6),
//!     (88.0, 37.6),
//!     (26.5, 82.4),
//! ]);
//! let mut ras = GridRasterizer::new();
//! ras.add_path(&mut path, 0);
//! assert!(ras.hit_test(50, 50));
//!
//! ras.filling_rule(FillingRule::EvenOdd);
//! assert!(!ras.hit_test(50, 50));
//! assert!(ras.hit_test(50, 25));
//! ```

use crate::basics::{
    is_close, is_move_to, is_stop, is_vertex, poly_coord, FillingRule, VertexSource,
    POLY_SUBPIXEL_SHIFT,
};
use crate::config::RasterizerConfig;
use crate::error::Result;
use crate::grid_renderer::RenderScanline;
use crate::outline::{Outline, SortedCells};
use crate::scanline::Scanline;

/// Map an accumulated area to an alpha value in `0..=config.aa_mask()`.
#[inline]
fn calculate_alpha(config: &RasterizerConfig, area: i32) -> u32 {
    let aa_scale = 1i32 << config.aa_shift;
    let mut cover = area >> (POLY_SUBPIXEL_SHIFT * 2 + 1 - config.aa_shift);
    if cover < 0 {
        cover = -cover;
    }
    if config.filling_rule == FillingRule::EvenOdd {
        cover &= 2 * aa_scale - 1;
        if cover > aa_scale {
            cover = 2 * aa_scale - cover;
        }
    }
    cover.min(config.aa_mask() as i32) as u32
}

// ============================================================================
// Coverage runs
// ============================================================================

/// A horizontal run of pixels sharing one non-zero alpha.
///
/// A run of length 1 is a boundary pixel carrying a partial area; longer runs
/// are the uniformly covered gap between two boundary cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageRun {
    pub x: i32,
    pub y: i32,
    pub len: u32,
    pub alpha: u32,
}

impl CoverageRun {
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        y == self.y && x >= self.x && x < self.x + self.len as i32
    }
}

/// Single forward walk over sorted cells yielding [`CoverageRun`]s in
/// row-major order.
///
/// Runs never overlap and their start x is strictly increasing within a row.
#[derive(Debug)]
pub struct CoverageRuns<'a> {
    cells: SortedCells<'a>,
    config: RasterizerConfig,
    idx: usize,
    row: i32,
    cover: i32,
    pending: Option<CoverageRun>,
}

impl<'a> CoverageRuns<'a> {
    fn new(cells: SortedCells<'a>, config: RasterizerConfig) -> Self {
        Self {
            cells,
            config,
            idx: 0,
            row: i32::MIN,
            cover: 0,
            pending: None,
        }
    }
}

impl Iterator for CoverageRuns<'_> {
    type Item = CoverageRun;

    fn next(&mut self) -> Option<CoverageRun> {
        loop {
            if let Some(run) = self.pending.take() {
                return Some(run);
            }
            if self.idx >= self.cells.len() {
                return None;
            }

            let cell = self.cells.get(self.idx);
            self.idx += 1;
            if cell.y != self.row {
                self.row = cell.y;
                self.cover = 0;
            }
            let (mut x, y) = (cell.x, cell.y);
            let mut area = cell.area;
            self.cover += cell.cover;

            // Merge every cell stored for the same pixel
            while self.idx < self.cells.len() {
                let next = self.cells.get(self.idx);
                if next.x != x || next.y != y {
                    break;
                }
                area += next.area;
                self.cover += next.cover;
                self.idx += 1;
            }

            let mut boundary = None;
            if area != 0 {
                let alpha = calculate_alpha(
                    &self.config,
                    (self.cover << (POLY_SUBPIXEL_SHIFT + 1)) - area,
                );
                if alpha != 0 {
                    boundary = Some(CoverageRun { x, y, len: 1, alpha });
                }
                x += 1;
            }

            let mut gap = None;
            if self.idx < self.cells.len() {
                let next = self.cells.get(self.idx);
                if next.y == y && next.x > x {
                    let alpha =
                        calculate_alpha(&self.config, self.cover << (POLY_SUBPIXEL_SHIFT + 1));
                    if alpha != 0 {
                        gap = Some(CoverageRun {
                            x,
                            y,
                            len: (next.x - x) as u32,
                            alpha,
                        });
                    }
                }
            }

            match (boundary, gap) {
                (Some(b), g) => {
                    self.pending = g;
                    return Some(b);
                }
                (None, Some(g)) => return Some(g),
                (None, None) => {}
            }
        }
    }
}

// ============================================================================
// GridRasterizer
// ============================================================================

/// Polygon rasterizer producing hit-grid coverage.
///
/// One instance serves one thread; independent polygons rendered in parallel
/// need independent rasterizers.
#[derive(Debug, Default)]
pub struct GridRasterizer {
    outline: Outline,
    scanline: Scanline,
    config: RasterizerConfig,
}

impl GridRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RasterizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            outline: Outline::new(),
            scanline: Scanline::new(),
            config,
        })
    }

    pub fn config(&self) -> &RasterizerConfig {
        &self.config
    }

    /// Replace the configuration, leaving stored cells untouched.
    pub fn set_config(&mut self, config: RasterizerConfig) -> Result<()> {
        config.validate()?;
        tracing::debug!(
            filling_rule = %config.filling_rule,
            aa_shift = config.aa_shift,
            "rasterizer config changed"
        );
        self.config = config;
        Ok(())
    }

    /// Select the filling rule for subsequent passes.
    pub fn filling_rule(&mut self, rule: FillingRule) {
        if self.config.filling_rule != rule {
            tracing::debug!(filling_rule = %rule, "filling rule changed");
        }
        self.config.filling_rule = rule;
    }

    /// Discard all polygon data.
    pub fn reset(&mut self) {
        tracing::debug!(num_cells = self.outline.num_cells(), "rasterizer reset");
        self.outline.reset();
    }

    // ========================================================================
    // Path building
    // ========================================================================

    /// Start a sub-path at 28.4 fixed-point `(x, y)`.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.outline.move_to(x, y);
    }

    /// Edge to 28.4 fixed-point `(x, y)`.
    pub fn line_to(&mut self, x: i32, y: i32) {
        self.outline.line_to(x, y);
    }

    pub fn move_to_d(&mut self, x: f64, y: f64) {
        self.outline.move_to(poly_coord(x), poly_coord(y));
    }

    pub fn line_to_d(&mut self, x: f64, y: f64) {
        self.outline.line_to(poly_coord(x), poly_coord(y));
    }

    pub fn close_polygon(&mut self) {
        self.outline.close_polygon();
    }

    /// Dispatch one path command in pixel coordinates.
    ///
    /// Curve commands are treated as straight edges to their end point.
    pub fn add_vertex(&mut self, x: f64, y: f64, cmd: u32) {
        if is_move_to(cmd) {
            self.move_to_d(x, y);
        } else if is_vertex(cmd) {
            self.line_to_d(x, y);
        } else if is_close(cmd) {
            self.close_polygon();
        }
    }

    /// Add every vertex of `vs` from `path_id` until stop.
    pub fn add_path(&mut self, vs: &mut dyn VertexSource, path_id: u32) {
        let mut x = 0.0;
        let mut y = 0.0;

        vs.rewind(path_id);
        if self.outline.sorted() {
            self.reset();
        }
        loop {
            let cmd = vs.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            self.add_vertex(x, y, cmd);
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Inclusive cell bounds `(min_x, min_y, max_x, max_y)` of the edges added
    /// so far, or `None` before the first edge.
    ///
    /// Does not close or sort the outline; a polygon under construction can
    /// keep growing afterwards.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let o = &self.outline;
        if o.min_x() > o.max_x() {
            return None;
        }
        Some((o.min_x(), o.min_y(), o.max_x(), o.max_y()))
    }

    pub fn num_cells(&self) -> usize {
        self.outline.num_cells()
    }

    /// Sorted cells, closing any open sub-path first.
    pub fn cells(&mut self) -> SortedCells<'_> {
        self.outline.cells()
    }

    /// Resolved coverage runs of the current geometry.
    pub fn coverage(&mut self) -> CoverageRuns<'_> {
        let config = self.config;
        CoverageRuns::new(self.outline.cells(), config)
    }

    /// Alpha for an accumulated area under the current configuration.
    pub fn calculate_alpha(&self, area: i32) -> u32 {
        calculate_alpha(&self.config, area)
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Stream the geometry to `ren` row by row, painting with `value`.
    ///
    /// `(dx, dy)` translate every emitted row. Empty geometry renders nothing.
    pub fn render<R>(&mut self, ren: &mut R, value: R::Value, dx: i32, dy: i32)
    where
        R: RenderScanline + ?Sized,
    {
        if self.outline.cells().is_empty() {
            return;
        }
        let (min_x, max_x) = (self.outline.min_x(), self.outline.max_x());
        let sl = &mut self.scanline;
        sl.reset(min_x, max_x, dx, dy);

        for run in CoverageRuns::new(self.outline.cells(), self.config) {
            if sl.is_ready(run.y) {
                ren.render(sl, value);
                sl.reset_spans();
            }
            if run.len == 1 {
                sl.add_cell(run.x, run.y, run.alpha);
            } else {
                sl.add_span(run.x, run.y, run.len, run.alpha);
            }
        }
        if sl.num_spans() > 0 {
            ren.render(sl, value);
            sl.reset_spans();
        }
    }

    /// Whether a full render would paint pixel `(tx, ty)`.
    pub fn hit_test(&mut self, tx: i32, ty: i32) -> bool {
        for run in self.coverage() {
            if run.y > ty {
                return false;
            }
            if run.contains(tx, ty) {
                return true;
            }
        }
        false
    }
}
