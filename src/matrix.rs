use std::fmt;

use crate::writer::Renderer;

/// A width x height raster of set (bar) and unset (blank) pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl BitMatrix {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-range coordinates read as unset.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.bits[y * self.width + x] = true;
        }
    }

    /// Set every pixel of the rectangle, clipped to the matrix bounds.
    pub fn set_region(&mut self, left: usize, top: usize, width: usize, height: usize) {
        let right = left.saturating_add(width).min(self.width);
        let bottom = top.saturating_add(height).min(self.height);
        for y in top..bottom {
            let row = y * self.width;
            self.bits[row + left.min(right)..row + right].fill(true);
        }
    }

    pub fn row(&self, y: usize) -> &[bool] {
        &self.bits[y * self.width..(y + 1) * self.width]
    }

    pub fn render(&self, style: RenderStyle) -> String {
        match style {
            RenderStyle::AsciiX => self.render_ascii('X', ' '),
            RenderStyle::Ascii01 => self.render_ascii('1', '0'),
        }
    }

    fn render_ascii(&self, mark: char, blank: char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for &bit in self.row(y) {
                out.push(if bit { mark } else { blank });
            }
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Use 'X' for bars and ' ' for blanks
    AsciiX,
    /// Use '1'/'0' for bar/blank
    Ascii01,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::AsciiX => write!(f, "ascii-x"),
            RenderStyle::Ascii01 => write!(f, "ascii-01"),
        }
    }
}

/// Default rasterizer for 1D symbols.
///
/// The symbol is scaled by the largest integer factor that fits `width`
/// after reserving `margin` blank columns, then centred horizontally.
/// Every row is identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRenderer;

impl Renderer for LinearRenderer {
    type Output = BitMatrix;

    fn render(&self, modules: &[bool], width: i32, height: i32, margin: i32) -> BitMatrix {
        let input_width = modules.len();
        let full_width = input_width + usize::try_from(margin).unwrap_or(0);
        let output_width = usize::try_from(width).unwrap_or(0).max(full_width);
        let output_height = usize::try_from(height).unwrap_or(0).max(1);

        let multiple = if full_width == 0 {
            1
        } else {
            output_width / full_width
        };
        let left_padding = (output_width - input_width * multiple) / 2;

        let mut matrix = BitMatrix::new(output_width, output_height);
        for (idx, &bar) in modules.iter().enumerate() {
            if bar {
                matrix.set_region(left_padding + idx * multiple, 0, multiple, output_height);
            }
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_region_clips_to_bounds() {
        let mut m = BitMatrix::new(4, 2);
        m.set_region(2, 1, 10, 10);
        assert_eq!(m.render(RenderStyle::Ascii01), "0000\n0011\n");
        assert!(!m.get(9, 9));
    }

    #[test]
    fn linear_render_without_scaling() {
        let m = LinearRenderer.render(&[true, false, true], 0, 0, 0);
        assert_eq!((m.width(), m.height()), (3, 1));
        assert_eq!(m.render(RenderStyle::AsciiX), "X X\n");
    }

    #[test]
    fn linear_render_scales_and_centres() {
        // full width = 3 + 2 = 5, output 11 => multiple 2, padding (11 - 6) / 2 = 2
        let m = LinearRenderer.render(&[true, false, true], 11, 2, 2);
        assert_eq!((m.width(), m.height()), (11, 2));
        assert_eq!(m.row(0), m.row(1));
        assert_eq!(m.render(RenderStyle::Ascii01).lines().next(), Some("00110011000"));
    }

    #[test]
    fn linear_render_widens_to_fit_margin() {
        let m = LinearRenderer.render(&[true, true], 1, -5, 10);
        assert_eq!((m.width(), m.height()), (12, 1));
        // multiple 1, padding (12 - 2) / 2 = 5
        assert!(m.get(5, 0) && m.get(6, 0));
        assert!(!m.get(4, 0) && !m.get(7, 0));
    }
}
