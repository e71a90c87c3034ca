//! Owned, zero-initialised pixel store for hit grids.

use std::ops::{Index, IndexMut};

use crate::rendering_buffer::{GridRenderingBuffer, GridValue};

/// A `width * height` grid of values stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer<T = GridValue> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Copy + Default> GridBuffer<T> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.data[self.offset(x, y)])
        } else {
            None
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: u32) -> &[T] {
        let start = self.offset(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Top-down rendering buffer over this grid.
    pub fn as_rendering_buffer(&mut self) -> GridRenderingBuffer<'_, T> {
        let (width, height) = (self.width, self.height);
        GridRenderingBuffer::packed(&mut self.data, width, height)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}

impl<T: Copy + Default> Index<(u32, u32)> for GridBuffer<T> {
    type Output = T;

    fn index(&self, (x, y): (u32, u32)) -> &T {
        &self.data[self.offset(x, y)]
    }
}

impl<T: Copy + Default> IndexMut<(u32, u32)> for GridBuffer<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        let offset = self.offset(x, y);
        &mut self.data[offset]
    }
}
