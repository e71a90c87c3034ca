//! Scanline renderer over a grid rendering buffer.
//!
//! [`GridRenderer`] receives complete scanlines from the rasterizer, clips
//! them against its buffer, and hands each surviving span to a
//! [`SpanPolicy`].

use std::marker::PhantomData;

use crate::rendering_buffer::GridRenderingBuffer;
use crate::scanline::Scanline;
use crate::span_grid::SpanPolicy;

/// Consumer of completed scanlines.
///
/// Called zero or more times per row; span lengths vary between calls. The
/// scanline is only borrowed for the duration of the call.
pub trait RenderScanline {
    type Value: Copy;

    fn render(&mut self, sl: &Scanline, value: Self::Value);
}

/// Renders scanlines into a [`GridRenderingBuffer`] using span policy `S`.
pub struct GridRenderer<'a, S: SpanPolicy> {
    rbuf: GridRenderingBuffer<'a, S::Value>,
    span: PhantomData<S>,
}

impl<'a, S: SpanPolicy> GridRenderer<'a, S> {
    pub fn new(rbuf: GridRenderingBuffer<'a, S::Value>) -> Self {
        Self {
            rbuf,
            span: PhantomData,
        }
    }

    /// Fill the whole buffer with `value`.
    pub fn clear(&mut self, value: S::Value) {
        let width = self.rbuf.width() as usize;
        if width == 0 {
            return;
        }
        for y in 0..self.rbuf.height() {
            S::hline(self.rbuf.row_mut(y), 0, width, value);
        }
    }

    /// Read back a pixel; `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<S::Value> {
        if !self.rbuf.inbox(x, y) {
            return None;
        }
        Some(S::get(self.rbuf.row(y as u32), x as usize))
    }

    pub fn rbuf(&self) -> &GridRenderingBuffer<'a, S::Value> {
        &self.rbuf
    }

    pub fn into_inner(self) -> GridRenderingBuffer<'a, S::Value> {
        self.rbuf
    }
}

impl<S: SpanPolicy> RenderScanline for GridRenderer<'_, S> {
    type Value = S::Value;

    fn render(&mut self, sl: &Scanline, value: S::Value) {
        let y = sl.y();
        if y < 0 || y >= self.rbuf.height() as i32 {
            return;
        }
        let width = self.rbuf.width() as i32;
        let base_x = sl.base_x();
        let row = self.rbuf.row_mut(y as u32);

        for span in sl {
            let mut x = span.x + base_x;
            let mut covers = span.covers;
            let mut num_pix = covers.len() as i32;
            if x < 0 {
                num_pix += x;
                if num_pix <= 0 {
                    continue;
                }
                covers = &covers[(-x) as usize..];
                x = 0;
            }
            if x + num_pix > width {
                num_pix = width - x;
                if num_pix <= 0 {
                    continue;
                }
            }
            S::render(row, x as usize, num_pix as usize, covers, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering_buffer::GridValue;
    use crate::span_grid::SpanGrid;

    #[test]
    fn test_clear_and_pixel() {
        let mut data = vec![0 as GridValue; 12];
        let rbuf = GridRenderingBuffer::new(&mut data, 4, 3, 4).unwrap();
        let mut ren = GridRenderer::<SpanGrid>::new(rbuf);
        ren.clear(5);
        assert_eq!(ren.pixel(3, 2), Some(5));
        assert_eq!(ren.pixel(4, 0), None);
        assert_eq!(ren.pixel(0, -1), None);
    }

    #[test]
    fn test_render_clips_spans() {
        let mut data = vec![0 as GridValue; 16];
        let rbuf = GridRenderingBuffer::new(&mut data, 4, 4, 4).unwrap();
        let mut ren = GridRenderer::<SpanGrid>::new(rbuf);

        let mut sl = Scanline::new();
        sl.reset(-3, 10, 0, 0);
        sl.add_span(-3, 1, 5, 1);
        sl.add_cell(4, 1, 1);
        sl.add_span(6, 1, 4, 1);
        ren.render(&sl, 7);

        let row: Vec<GridValue> = ren.rbuf().row(1).to_vec();
        assert_eq!(row, vec![7, 7, 0, 0]);
        assert_eq!(ren.rbuf().row(0), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_render_clips_right_edge() {
        let mut data = vec![0 as GridValue; 4];
        let rbuf = GridRenderingBuffer::new(&mut data, 4, 1, 4).unwrap();
        let mut ren = GridRenderer::<SpanGrid>::new(rbuf);

        let mut sl = Scanline::new();
        sl.reset(0, 10, 0, 0);
        sl.add_span(2, 0, 6, 1);
        ren.render(&sl, 3);
        assert_eq!(ren.rbuf().row(0), &[0, 0, 3, 3]);
    }

    #[test]
    fn test_render_skips_rows_outside() {
        let mut data = vec![0 as GridValue; 4];
        let rbuf = GridRenderingBuffer::new(&mut data, 2, 2, 2).unwrap();
        let mut ren = GridRenderer::<SpanGrid>::new(rbuf);

        let mut sl = Scanline::new();
        sl.reset(0, 4, 0, 5);
        sl.add_span(0, 0, 2, 1);
        ren.render(&sl, 9);
        assert!(ren.rbuf().buf().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_render_applies_translation() {
        let mut data = vec![0 as GridValue; 9];
        let rbuf = GridRenderingBuffer::new(&mut data, 3, 3, 3).unwrap();
        let mut ren = GridRenderer::<SpanGrid>::new(rbuf);

        let mut sl = Scanline::new();
        sl.reset(0, 4, 1, 2);
        sl.add_cell(0, 0, 1);
        ren.render(&sl, 4);
        assert_eq!(ren.pixel(1, 2), Some(4));
        assert_eq!(ren.pixel(0, 0), Some(0));
    }
}
