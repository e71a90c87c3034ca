//! Cell store: converts polygon outlines into anti-aliased pixel cells.
//!
//! Edges in 28.4 fixed-point are decomposed into per-pixel cells carrying
//! the accumulated `cover` (net vertical crossing) and `area` (twice the
//! signed trapezoid area inside the cell). Cells are stored unsorted in a
//! block arena and exposed row-major on demand through [`SortedCells`].
//!
//! Cells sharing a pixel are **not** merged: consumers sum adjacent
//! entries with equal [`CellKey`].

use crate::basics::{POLY_SUBPIXEL_MASK, POLY_SUBPIXEL_SCALE, POLY_SUBPIXEL_SHIFT};

// ============================================================================
// Cell
// ============================================================================

/// Sort key of a cell: row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    pub y: i32,
    pub x: i32,
}

/// A pixel cell storing accumulated coverage and area from edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub cover: i32,
    pub area: i32,
}

impl Cell {
    /// Sentinel position no real edge can produce.
    const INITIAL: Cell = Cell {
        x: i32::MAX,
        y: i32::MAX,
        cover: 0,
        area: 0,
    };

    #[inline]
    pub fn key(&self) -> CellKey {
        CellKey {
            y: self.y,
            x: self.x,
        }
    }

    #[inline]
    fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.area | self.cover == 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::INITIAL
    }
}

// ============================================================================
// CellBlocks
// ============================================================================

const CELL_BLOCK_SHIFT: u32 = 12;
/// Cells per block.
pub const CELL_BLOCK_SIZE: usize = 1 << CELL_BLOCK_SHIFT;
const CELL_BLOCK_MASK: usize = CELL_BLOCK_SIZE - 1;
/// Maximum number of blocks; cells beyond `CELL_BLOCK_SIZE * CELL_BLOCK_LIMIT` are dropped.
pub const CELL_BLOCK_LIMIT: usize = 1024;

/// Growable arena of fixed-size cell blocks.
///
/// A cell index splits into block number (`idx >> CELL_BLOCK_SHIFT`) and
/// offset (`idx & CELL_BLOCK_MASK`). `clear` keeps the allocated blocks.
#[derive(Debug, Default)]
struct CellBlocks {
    blocks: Vec<Box<[Cell]>>,
    len: usize,
}

impl CellBlocks {
    /// Append a cell. Returns `false` if the block limit is reached.
    #[inline]
    fn push(&mut self, cell: Cell) -> bool {
        let block = self.len >> CELL_BLOCK_SHIFT;
        if block == self.blocks.len() {
            if block >= CELL_BLOCK_LIMIT {
                return false;
            }
            self.blocks
                .push(vec![Cell::INITIAL; CELL_BLOCK_SIZE].into_boxed_slice());
        }
        self.blocks[block][self.len & CELL_BLOCK_MASK] = cell;
        self.len += 1;
        true
    }

    #[inline]
    fn get(&self, idx: u32) -> &Cell {
        let idx = idx as usize;
        debug_assert!(idx < self.len);
        &self.blocks[idx >> CELL_BLOCK_SHIFT][idx & CELL_BLOCK_MASK]
    }

    #[inline]
    fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        (0..self.len as u32).map(move |idx| self.get(idx))
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    fn capacity(&self) -> usize {
        self.blocks.len() * CELL_BLOCK_SIZE
    }
}

// ============================================================================
// SortedCells
// ============================================================================

/// Sorted, explicit-length view of the cells of an [`Outline`].
///
/// Ordered by [`CellKey`]; entries with equal keys are adjacent.
#[derive(Clone, Copy)]
pub struct SortedCells<'a> {
    blocks: &'a CellBlocks,
    order: &'a [u32],
}

impl<'a> SortedCells<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> &'a Cell {
        self.blocks.get(self.order[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Cell> + 'a {
        let (blocks, order) = (self.blocks, self.order);
        order.iter().map(move |&idx| blocks.get(idx))
    }
}

impl std::fmt::Debug for SortedCells<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// ============================================================================
// Outline
// ============================================================================

/// Limit for dx magnitude before recursive subdivision in `render_line()`.
const DX_LIMIT: i64 = 16384 << POLY_SUBPIXEL_SHIFT;

/// Accumulates cells from `move_to` / `line_to` commands.
///
/// Sub-paths are closed automatically on the next `move_to` and before the
/// first `cells()` call. Once sorted, the outline is frozen: further
/// `line_to` calls are ignored and the next `move_to` starts a new polygon.
#[derive(Debug)]
pub struct Outline {
    cells: CellBlocks,
    sorted: Vec<u32>,
    cur_cell: Cell,
    cur_x: i32,
    cur_y: i32,
    close_x: i32,
    close_y: i32,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
    sort_required: bool,
    not_closed: bool,
    started: bool,
    truncated: bool,
}

impl Outline {
    pub fn new() -> Self {
        Self {
            cells: CellBlocks::default(),
            sorted: Vec::new(),
            cur_cell: Cell::INITIAL,
            cur_x: 0,
            cur_y: 0,
            close_x: 0,
            close_y: 0,
            min_x: i32::MAX,
            min_y: i32::MAX,
            max_x: i32::MIN,
            max_y: i32::MIN,
            sort_required: true,
            not_closed: false,
            started: false,
            truncated: false,
        }
    }

    /// Discard all cells and pen state, keeping allocated blocks.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.sorted.clear();
        self.cur_cell = Cell::INITIAL;
        self.cur_x = 0;
        self.cur_y = 0;
        self.close_x = 0;
        self.close_y = 0;
        self.min_x = i32::MAX;
        self.min_y = i32::MAX;
        self.max_x = i32::MIN;
        self.max_y = i32::MIN;
        self.sort_required = true;
        self.not_closed = false;
        self.started = false;
        self.truncated = false;
    }

    #[inline]
    pub fn min_x(&self) -> i32 {
        self.min_x
    }
    #[inline]
    pub fn min_y(&self) -> i32 {
        self.min_y
    }
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Number of stored cells (duplicates included).
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len
    }

    /// Whether the cells have been sorted since the last mutation.
    #[inline]
    pub fn sorted(&self) -> bool {
        !self.sort_required
    }

    /// Cells allocated across all blocks, including unused slots.
    pub fn capacity(&self) -> usize {
        self.cells.capacity()
    }

    /// Start a new sub-path at `(x, y)` in 28.4 fixed-point.
    pub fn move_to(&mut self, x: i32, y: i32) {
        if !self.sort_required {
            self.reset();
        }
        if self.not_closed {
            self.close_polygon();
        }
        self.set_cur_cell(x >> POLY_SUBPIXEL_SHIFT, y >> POLY_SUBPIXEL_SHIFT);
        self.close_x = x;
        self.cur_x = x;
        self.close_y = y;
        self.cur_y = y;
        self.started = true;
    }

    /// Trace an edge from the pen position to `(x, y)` in 28.4 fixed-point.
    pub fn line_to(&mut self, x: i32, y: i32) {
        debug_assert!(self.started, "line_to called before move_to");
        if self.sort_required && (self.cur_x != x || self.cur_y != y) {
            self.render_line(self.cur_x, self.cur_y, x, y);
            self.cur_x = x;
            self.cur_y = y;
            self.not_closed = true;
        }
    }

    /// Close the current sub-path with an edge back to its start.
    pub fn close_polygon(&mut self) {
        if self.not_closed {
            self.line_to(self.close_x, self.close_y);
            self.not_closed = false;
        }
    }

    /// Sorted view of all cells, row-major.
    ///
    /// Closes any open sub-path and sorts on the first call after mutation;
    /// later calls return the same order without re-sorting.
    pub fn cells(&mut self) -> SortedCells<'_> {
        self.close_polygon();
        if self.sort_required {
            self.add_cur_cell();
            self.cur_cell = Cell::INITIAL;
            self.sort_cells();
            self.sort_required = false;
            tracing::trace!(
                num_cells = self.cells.len,
                min_x = self.min_x,
                min_y = self.min_y,
                max_x = self.max_x,
                max_y = self.max_y,
                "outline sorted"
            );
        }
        SortedCells {
            blocks: &self.cells,
            order: &self.sorted,
        }
    }

    // ========================================================================
    // Private helpers
    // ========================================================================

    /// Flush the current cell into the arena if it has non-zero data.
    #[inline]
    fn add_cur_cell(&mut self) {
        if self.cur_cell.is_empty() {
            return;
        }
        if !self.cells.push(self.cur_cell) && !self.truncated {
            self.truncated = true;
            tracing::warn!(
                limit = CELL_BLOCK_SIZE * CELL_BLOCK_LIMIT,
                "cell block limit reached, dropping cells"
            );
        }
    }

    /// Move to a new cell position, flushing the previous cell if needed.
    #[inline]
    fn set_cur_cell(&mut self, x: i32, y: i32) {
        if !self.cur_cell.is_at(x, y) {
            self.add_cur_cell();
            self.cur_cell = Cell {
                x,
                y,
                cover: 0,
                area: 0,
            };
        }
    }

    #[inline]
    fn update_bounds(&mut self, ex: i32, ey: i32) {
        self.min_x = self.min_x.min(ex);
        self.max_x = self.max_x.max(ex);
        self.min_y = self.min_y.min(ey);
        self.max_y = self.max_y.max(ey);
    }

    /// Render an edge fragment within the single pixel row `ey`.
    ///
    /// `x1`, `x2` are in 28.4 fixed-point; `y1`, `y2` are the fractional
    /// y within the row (0..=POLY_SUBPIXEL_SCALE).
    fn render_hline(&mut self, ey: i32, x1: i32, y1: i32, x2: i32, y2: i32) {
        let scale = POLY_SUBPIXEL_SCALE as i32;
        let ex1 = x1 >> POLY_SUBPIXEL_SHIFT;
        let ex2 = x2 >> POLY_SUBPIXEL_SHIFT;
        let fx1 = x1 & POLY_SUBPIXEL_MASK as i32;
        let fx2 = x2 & POLY_SUBPIXEL_MASK as i32;

        // Horizontal fragment: no cover, just move to the target cell
        if y1 == y2 {
            self.set_cur_cell(ex2, ey);
            return;
        }

        // Everything in a single cell
        if ex1 == ex2 {
            let delta = y2 - y1;
            self.cur_cell.cover += delta;
            self.cur_cell.area += (fx1 + fx2) * delta;
            return;
        }

        // Run of adjacent cells on the same row
        let mut p = (scale - fx1) as i64 * (y2 - y1) as i64;
        let mut first = scale;
        let mut incr = 1;
        let mut dx = x2 as i64 - x1 as i64;

        if dx < 0 {
            p = fx1 as i64 * (y2 - y1) as i64;
            first = 0;
            incr = -1;
            dx = -dx;
        }

        let mut delta = (p / dx) as i32;
        let mut modulo = p % dx;
        if modulo < 0 {
            delta -= 1;
            modulo += dx;
        }

        self.cur_cell.cover += delta;
        self.cur_cell.area += (fx1 + first) * delta;

        let mut ex1 = ex1 + incr;
        self.set_cur_cell(ex1, ey);
        let mut y1 = y1 + delta;

        if ex1 != ex2 {
            p = scale as i64 * (y2 - y1 + delta) as i64;
            let mut lift = (p / dx) as i32;
            let mut rem = p % dx;
            if rem < 0 {
                lift -= 1;
                rem += dx;
            }
            modulo -= dx;

            while ex1 != ex2 {
                delta = lift;
                modulo += rem;
                if modulo >= 0 {
                    modulo -= dx;
                    delta += 1;
                }
                self.cur_cell.cover += delta;
                self.cur_cell.area += scale * delta;
                y1 += delta;
                ex1 += incr;
                self.set_cur_cell(ex1, ey);
            }
        }
        delta = y2 - y1;
        self.cur_cell.cover += delta;
        self.cur_cell.area += (fx2 + scale - first) * delta;
    }

    /// Decompose an edge into per-row fragments.
    fn render_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let scale = POLY_SUBPIXEL_SCALE as i32;
        let dx = x2 as i64 - x1 as i64;

        if dx >= DX_LIMIT || dx <= -DX_LIMIT {
            let cx = ((x1 as i64 + x2 as i64) >> 1) as i32;
            let cy = ((y1 as i64 + y2 as i64) >> 1) as i32;
            self.render_line(x1, y1, cx, cy);
            self.render_line(cx, cy, x2, y2);
            return;
        }

        let dy = y2 as i64 - y1 as i64;
        let ex1 = x1 >> POLY_SUBPIXEL_SHIFT;
        let ex2 = x2 >> POLY_SUBPIXEL_SHIFT;
        let mut ey1 = y1 >> POLY_SUBPIXEL_SHIFT;
        let ey2 = y2 >> POLY_SUBPIXEL_SHIFT;
        let fy1 = y1 & POLY_SUBPIXEL_MASK as i32;
        let fy2 = y2 & POLY_SUBPIXEL_MASK as i32;

        self.update_bounds(ex1, ey1);
        self.update_bounds(ex2, ey2);

        self.set_cur_cell(ex1, ey1);

        // Everything on a single row
        if ey1 == ey2 {
            self.render_hline(ey1, x1, fy1, x2, fy2);
            return;
        }

        // Vertical edge: one cell per row, no render_hline needed
        let mut incr = 1;
        if dx == 0 {
            let two_fx = (x1 - (ex1 << POLY_SUBPIXEL_SHIFT)) << 1;
            let mut first = scale;
            if dy < 0 {
                first = 0;
                incr = -1;
            }

            let mut delta = first - fy1;
            self.cur_cell.cover += delta;
            self.cur_cell.area += two_fx * delta;

            ey1 += incr;
            self.set_cur_cell(ex1, ey1);

            delta = first + first - scale;
            let area = two_fx * delta;
            while ey1 != ey2 {
                self.cur_cell.cover = delta;
                self.cur_cell.area = area;
                ey1 += incr;
                self.set_cur_cell(ex1, ey1);
            }
            delta = fy2 - scale + first;
            self.cur_cell.cover += delta;
            self.cur_cell.area += two_fx * delta;
            return;
        }

        // General case: several rows
        let mut p = (scale - fy1) as i64 * dx;
        let mut first = scale;
        let mut dy_abs = dy;
        if dy < 0 {
            p = fy1 as i64 * dx;
            first = 0;
            incr = -1;
            dy_abs = -dy;
        }

        let mut delta = (p / dy_abs) as i32;
        let mut modulo = p % dy_abs;
        if modulo < 0 {
            delta -= 1;
            modulo += dy_abs;
        }

        let mut x_from = x1 + delta;
        self.render_hline(ey1, x1, fy1, x_from, first);

        ey1 += incr;
        self.set_cur_cell(x_from >> POLY_SUBPIXEL_SHIFT, ey1);

        if ey1 != ey2 {
            p = scale as i64 * dx;
            let mut lift = (p / dy_abs) as i32;
            let mut rem = p % dy_abs;
            if rem < 0 {
                lift -= 1;
                rem += dy_abs;
            }
            modulo -= dy_abs;

            while ey1 != ey2 {
                delta = lift;
                modulo += rem;
                if modulo >= 0 {
                    modulo -= dy_abs;
                    delta += 1;
                }

                let x_to = x_from + delta;
                self.render_hline(ey1, x_from, scale - first, x_to, first);
                x_from = x_to;

                ey1 += incr;
                self.set_cur_cell(x_from >> POLY_SUBPIXEL_SHIFT, ey1);
            }
        }
        self.render_hline(ey1, x_from, scale - first, x2, fy2);
    }

    /// Build `sorted` as cell indices ordered by row, then column.
    ///
    /// Rows are bucketed with a counting pass; each row is then sorted by x.
    fn sort_cells(&mut self) {
        self.sorted.clear();
        if self.cells.len == 0 {
            return;
        }
        self.sorted.resize(self.cells.len, 0);

        let y_range = (self.max_y - self.min_y + 1) as usize;
        let mut starts = vec![0u32; y_range + 1];

        // Pass 1: histogram of cells per row
        for cell in self.cells.iter() {
            starts[(cell.y - self.min_y) as usize + 1] += 1;
        }
        // Prefix sums give row start offsets
        for i in 1..starts.len() {
            starts[i] += starts[i - 1];
        }

        // Pass 2: scatter indices into their rows
        let mut fill = starts.clone();
        for (idx, cell) in self.cells.iter().enumerate() {
            let row = (cell.y - self.min_y) as usize;
            self.sorted[fill[row] as usize] = idx as u32;
            fill[row] += 1;
        }

        // Pass 3: sort each row by x
        let cells = &self.cells;
        for row in starts.windows(2) {
            let (start, end) = (row[0] as usize, row[1] as usize);
            if end - start > 1 {
                self.sorted[start..end].sort_unstable_by_key(|&idx| cells.get(idx).x);
            }
        }
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const S: i32 = POLY_SUBPIXEL_SCALE as i32;

    fn square(outline: &mut Outline, x: i32, y: i32, size: i32) {
        outline.move_to(x * S, y * S);
        outline.line_to((x + size) * S, y * S);
        outline.line_to((x + size) * S, (y + size) * S);
        outline.line_to(x * S, (y + size) * S);
    }

    #[test]
    fn test_cell_key_orders_row_major() {
        let a = Cell { x: 5, y: 0, cover: 0, area: 0 };
        let b = Cell { x: 0, y: 1, cover: 0, area: 0 };
        let c = Cell { x: 6, y: 0, cover: 0, area: 0 };
        assert!(a.key() < b.key());
        assert!(a.key() < c.key());
        assert!(c.key() < b.key());
    }

    #[test]
    fn test_new_outline_is_empty() {
        let mut outline = Outline::new();
        assert_eq!(outline.num_cells(), 0);
        assert!(!outline.sorted());
        assert_eq!(outline.min_x(), i32::MAX);
        assert_eq!(outline.max_y(), i32::MIN);
        assert!(outline.cells().is_empty());
        assert!(outline.sorted());
    }

    #[test]
    fn test_block_arena_grows_and_keeps_capacity() {
        let mut blocks = CellBlocks::default();
        for i in 0..(CELL_BLOCK_SIZE + 1) as i32 {
            assert!(blocks.push(Cell { x: i, y: 0, cover: 1, area: 0 }));
        }
        assert_eq!(blocks.len, CELL_BLOCK_SIZE + 1);
        assert_eq!(blocks.capacity(), 2 * CELL_BLOCK_SIZE);
        assert_eq!(blocks.get(CELL_BLOCK_SIZE as u32).x, CELL_BLOCK_SIZE as i32);
        blocks.clear();
        assert_eq!(blocks.len, 0);
        assert_eq!(blocks.capacity(), 2 * CELL_BLOCK_SIZE);
    }

    #[test]
    fn test_vertical_line_cover_sum() {
        let mut outline = Outline::new();
        let x = 10 * S + S / 2;
        outline.move_to(x, 5 * S);
        outline.line_to(x, 8 * S);
        // Closing edge runs back over the same column and cancels out
        let cells = outline.cells();
        let cover: i32 = cells.iter().map(|c| c.cover).sum();
        assert_eq!(cover, 0);
    }

    #[test]
    fn test_open_edge_cover_equals_dy() {
        let mut outline = Outline::new();
        outline.move_to(0, 0);
        outline.line_to(5 * S, 5 * S);
        // Inspect before the auto-close in `cells()`
        outline.add_cur_cell();
        let cover: i32 = outline.cells.iter().map(|c| c.cover).sum();
        assert_eq!(cover, 5 * S);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut outline = Outline::new();
        square(&mut outline, 2, 3, 4);
        outline.cells();
        assert_eq!(outline.min_x(), 2);
        assert_eq!(outline.min_y(), 3);
        assert_eq!(outline.max_x(), 6);
        assert_eq!(outline.max_y(), 7);
    }

    #[test]
    fn test_cells_sorted_row_major() {
        let mut outline = Outline::new();
        outline.move_to(0, 0);
        outline.line_to(10 * S, 3 * S);
        outline.line_to(2 * S, 7 * S);
        let cells = outline.cells();
        assert!(!cells.is_empty());
        let keys: Vec<CellKey> = cells.iter().map(Cell::key).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut outline = Outline::new();
        square(&mut outline, 1, 1, 3);
        let first: Vec<Cell> = outline.cells().iter().copied().collect();
        let second: Vec<Cell> = outline.cells().iter().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_cells_are_not_merged() {
        let mut outline = Outline::new();
        // Two sub-paths crossing the same pixel column
        outline.move_to(S / 4, 0);
        outline.line_to(S / 4, S);
        outline.move_to(3 * S / 4, S);
        outline.line_to(3 * S / 4, 0);
        let cells = outline.cells();
        let in_pixel = cells.iter().filter(|c| c.x == 0 && c.y == 0).count();
        assert!(in_pixel >= 2);
    }

    #[test]
    fn test_zero_length_segment_is_ignored() {
        let mut outline = Outline::new();
        outline.move_to(3 * S, 3 * S);
        outline.line_to(3 * S, 3 * S);
        assert!(outline.cells().is_empty());
    }

    #[test]
    fn test_horizontal_line_has_no_cells() {
        let mut outline = Outline::new();
        outline.move_to(0, 10 * S);
        outline.line_to(32 * S, 10 * S);
        assert!(outline.cells().is_empty());
    }

    #[test]
    fn test_move_to_after_sort_resets() {
        let mut outline = Outline::new();
        square(&mut outline, 0, 0, 4);
        assert!(outline.cells().len() > 0);
        outline.move_to(20 * S, 20 * S);
        assert_eq!(outline.num_cells(), 0);
        assert!(!outline.sorted());
        assert_eq!(outline.min_x(), i32::MAX);
    }

    #[test]
    fn test_line_to_after_sort_is_ignored() {
        let mut outline = Outline::new();
        square(&mut outline, 0, 0, 4);
        let before = outline.cells().len();
        outline.line_to(50 * S, 50 * S);
        assert_eq!(outline.cells().len(), before);
    }

    #[test]
    fn test_reset_keeps_capacity() {
        let mut outline = Outline::new();
        square(&mut outline, 0, 0, 40);
        outline.cells();
        let capacity = outline.capacity();
        assert!(capacity >= CELL_BLOCK_SIZE);
        outline.reset();
        assert_eq!(outline.num_cells(), 0);
        assert_eq!(outline.capacity(), capacity);
    }

    #[test]
    fn test_block_limit_truncates_and_reset_clears() {
        let limit = CELL_BLOCK_SIZE * CELL_BLOCK_LIMIT;
        let mut outline = Outline::new();
        // Long diagonals produce roughly one cell per row each way
        let mut n = 0;
        while !outline.truncated {
            assert!(n < 2000, "block limit never reached");
            outline.move_to(0, n * S);
            outline.line_to(3000 * S, (n + 3000) * S);
            n += 1;
        }
        assert_eq!(outline.cells().len(), limit);
        assert_eq!(outline.num_cells(), limit);
        assert_eq!(outline.capacity(), limit);

        outline.reset();
        assert!(!outline.truncated);
        assert_eq!(outline.capacity(), limit);
        square(&mut outline, 0, 0, 4);
        assert_eq!(outline.cells().len(), 8);
        assert!(!outline.truncated);
    }

    #[test]
    fn test_large_dx_subdivision() {
        let mut outline = Outline::new();
        outline.move_to(0, 0);
        outline.line_to(20000 * S, S);
        outline.line_to(0, S);
        assert!(outline.cells().len() > 0);
        assert_eq!(outline.max_x(), 20000);
    }
}
