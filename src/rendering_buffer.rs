//! Rendering buffer: row-oriented access to grid values.
//!
//! [`GridRenderingBuffer`] addresses rows of a caller-owned slice by
//! `y * stride`. A negative stride stores rows bottom-up: row 0 is the last
//! row in memory.

use crate::error::{Error, Result};

/// Value stored per pixel of a hit grid (a feature identifier).
pub type GridValue = u32;

/// Row accessor over a borrowed pixel slice.
///
/// `stride` is measured in values, not bytes, and its magnitude must be at
/// least `width`.
#[derive(Debug)]
pub struct GridRenderingBuffer<'a, T = GridValue> {
    buf: &'a mut [T],
    width: u32,
    height: u32,
    stride: i32,
}

impl<'a, T> GridRenderingBuffer<'a, T> {
    /// Attach to `buf`, checking that every addressed row fits.
    pub fn new(buf: &'a mut [T], width: u32, height: u32, stride: i32) -> Result<Self> {
        let stride_abs = stride.unsigned_abs() as usize;
        debug_assert!(height == 0 || stride_abs >= width as usize);
        let required = match height {
            0 => 0,
            h => (h as usize - 1) * stride_abs + width as usize,
        };
        if buf.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: buf.len(),
            });
        }
        Ok(Self {
            buf,
            width,
            height,
            stride,
        })
    }

    /// Attach to a tightly packed, top-down slice of exactly `width * height` values.
    pub(crate) fn packed(buf: &'a mut [T], width: u32, height: u32) -> Self {
        debug_assert_eq!(buf.len(), width as usize * height as usize);
        Self {
            buf,
            width,
            height,
            stride: width as i32,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    pub fn stride_abs(&self) -> u32 {
        self.stride.unsigned_abs()
    }

    /// Whether `(x, y)` lies inside the buffer.
    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    #[inline]
    fn row_start(&self, y: u32) -> usize {
        let stride = self.stride_abs() as usize;
        if self.stride < 0 {
            (self.height - 1 - y) as usize * stride
        } else {
            y as usize * stride
        }
    }

    /// Row `y`, `width` values long.
    pub fn row(&self, y: u32) -> &[T] {
        assert!(y < self.height, "row {} out of bounds (height={})", y, self.height);
        let start = self.row_start(y);
        &self.buf[start..start + self.width as usize]
    }

    /// Mutable row `y`, `width` values long.
    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        assert!(y < self.height, "row {} out of bounds (height={})", y, self.height);
        let start = self.row_start(y);
        &mut self.buf[start..start + self.width as usize]
    }

    /// The whole underlying slice.
    pub fn buf(&self) -> &[T] {
        &self.buf[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_top_down() {
        let mut data: Vec<GridValue> = (0..12).collect();
        let rbuf = GridRenderingBuffer::new(&mut data, 3, 4, 3).unwrap();
        assert_eq!(rbuf.row(0), &[0, 1, 2]);
        assert_eq!(rbuf.row(3), &[9, 10, 11]);
    }

    #[test]
    fn test_rows_bottom_up() {
        let mut data: Vec<GridValue> = (0..12).collect();
        let rbuf = GridRenderingBuffer::new(&mut data, 3, 4, -3).unwrap();
        assert_eq!(rbuf.row(0), &[9, 10, 11]);
        assert_eq!(rbuf.row(3), &[0, 1, 2]);
    }

    #[test]
    fn test_stride_wider_than_width() {
        let mut data = vec![0u32; 10];
        let mut rbuf = GridRenderingBuffer::new(&mut data, 2, 2, 5).unwrap();
        rbuf.row_mut(1).fill(7);
        assert_eq!(rbuf.buf(), &[0, 0, 0, 0, 0, 7, 7, 0, 0, 0]);
    }

    #[test]
    fn test_buffer_too_small() {
        let mut data = vec![0u32; 5];
        let err = GridRenderingBuffer::new(&mut data, 3, 2, 3).unwrap_err();
        assert_eq!(err, Error::BufferTooSmall { required: 6, actual: 5 });
    }

    #[test]
    fn test_inbox() {
        let mut data = vec![0u32; 6];
        let rbuf = GridRenderingBuffer::new(&mut data, 3, 2, 3).unwrap();
        assert!(rbuf.inbox(0, 0));
        assert!(rbuf.inbox(2, 1));
        assert!(!rbuf.inbox(3, 1));
        assert!(!rbuf.inbox(-1, 0));
        assert!(!rbuf.inbox(0, 2));
    }
}
