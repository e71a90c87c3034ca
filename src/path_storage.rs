//! Path storage: a flat container of already-flattened path vertices.
//!
//! Holds the move-to / line-to / end-poly commands a rasterizer consumes
//! through [`VertexSource`]. Curves are expected to be subdivided before they
//! reach this container.

use crate::basics::{
    is_vertex, VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO,
    PATH_CMD_STOP, PATH_FLAGS_CLOSE,
};

/// A vertex with its path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub cmd: u32,
}

impl Vertex {
    pub fn new(x: f64, y: f64, cmd: u32) -> Self {
        Self { x, y, cmd }
    }
}

/// Growable vertex list with a read cursor.
///
/// Sub-paths are delimited by move-to commands; several polygons can be
/// stored in one container and replayed with `rewind(0)`.
#[derive(Debug, Clone, Default)]
pub struct PathStorage {
    vertices: Vec<Vertex>,
    iterator: usize,
}

impl PathStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a closed polygon from `(x, y)` points in pixel space.
    pub fn from_polygon(points: &[(f64, f64)]) -> Self {
        let mut path = Self::new();
        path.add_polygon(points);
        path
    }

    /// Remove all vertices and rewind.
    pub fn remove_all(&mut self) {
        self.vertices.clear();
        self.iterator = 0;
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(Vertex::new(x, y, PATH_CMD_MOVE_TO));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(Vertex::new(x, y, PATH_CMD_LINE_TO));
    }

    /// Terminate the current sub-path with a closing end-poly.
    ///
    /// Does nothing unless the last command was a vertex.
    pub fn close_polygon(&mut self, flags: u32) {
        if is_vertex(self.last_command()) {
            self.vertices
                .push(Vertex::new(0.0, 0.0, PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | flags));
        }
    }

    /// Append `points` as one closed sub-path. Fewer than two points add nothing.
    pub fn add_polygon(&mut self, points: &[(f64, f64)]) {
        if points.len() < 2 {
            return;
        }
        let (x0, y0) = points[0];
        self.move_to(x0, y0);
        for &(x, y) in &points[1..] {
            self.line_to(x, y);
        }
        self.close_polygon(0);
    }

    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Command of the last vertex, or stop if empty.
    pub fn last_command(&self) -> u32 {
        self.vertices.last().map_or(PATH_CMD_STOP, |v| v.cmd)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl VertexSource for PathStorage {
    fn rewind(&mut self, path_id: u32) {
        self.iterator = path_id as usize;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        let Some(v) = self.vertices.get(self.iterator) else {
            return PATH_CMD_STOP;
        };
        *x = v.x;
        *y = v.y;
        self.iterator += 1;
        v.cmd
    }
}
