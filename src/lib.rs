//! # agg-grid
//!
//! Scanline polygon rasterizer for hit grids, in the Anti-Grain Geometry
//! tradition.
//!
//! The crate turns already-flattened polygon outlines in pixel space into
//! runs of covered pixels. Those runs are either written into a raster of
//! feature identifiers (a hit grid) or queried for a single point.
//!
//! ## Pipeline
//!
//! 1. **Vertex source**: [`PathStorage`] or any [`VertexSource`] supplies
//!    move-to / line-to commands.
//! 2. **Cell store**: [`Outline`] decomposes edges into 28.4 fixed-point
//!    cells and sorts them row-major.
//! 3. **Rasterizer**: [`GridRasterizer`] merges cells, resolves coverage with
//!    the [`FillingRule`] and drives a [`Scanline`] row by row.
//! 4. **Renderer**: [`GridRenderer`] clips each scanline against a
//!    [`GridRenderingBuffer`] and hands spans to a [`SpanPolicy`] such as
//!    [`SpanGrid`] (flat feature ids) or [`SpanGray8`] (coverage mask).
//!
//! ## Example
//!
//! ```
//! use agg_grid::{GridBuffer, GridRasterizer, GridRenderer, PathStorage, SpanGrid};
//!
//! let mut grid: GridBuffer = GridBuffer::new(8, 8);
//! let mut path = PathStorage::from_polygon(&[(1.0, 1.0), (5.0, 1.0), (5.0, 4.0), (1.0, 4.0)]);
//!
//! let mut ras = GridRasterizer::new();
//! ras.add_path(&mut path, 0);
//! let mut ren = GridRenderer::<SpanGrid>::new(grid.as_rendering_buffer());
//! ras.render(&mut ren, 42, 0, 0);
//!
//! assert_eq!(grid[(2, 2)], 42);
//! assert_eq!(grid[(6, 2)], 0);
//! assert!(ras.hit_test(2, 2));
//! ```

// Foundation
pub mod basics;
pub mod config;
pub mod error;

// Rasterization
pub mod grid_rasterizer;
pub mod outline;
pub mod path_storage;
pub mod scanline;

// Output
pub mod grid_buffer;
pub mod grid_renderer;
pub mod rendering_buffer;
pub mod span_grid;

pub use basics::{poly_coord, FillingRule, VertexSource};
pub use config::RasterizerConfig;
pub use error::{Error, Result};
pub use grid_buffer::GridBuffer;
pub use grid_rasterizer::{CoverageRun, CoverageRuns, GridRasterizer};
pub use grid_renderer::{GridRenderer, RenderScanline};
pub use outline::{Cell, CellKey, Outline, SortedCells};
pub use path_storage::PathStorage;
pub use rendering_buffer::{GridRenderingBuffer, GridValue};
pub use scanline::{Scanline, Span};
pub use span_grid::{SpanGray8, SpanGrid, SpanPolicy};
