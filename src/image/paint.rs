use image::{DynamicImage, ImageBuffer, Rgba};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::matrix::BitMatrix;

const MAX_SCALE: u32 = 64;

/// Colour schemes for image output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarImageStyle {
    /// Black bars on white.
    Plain,
    /// White bars on black, for dark-background displays.
    Inverted,
    /// Dark grey bars on warm paper tone.
    Thermal,
}

/// Options controlling image generation.
#[derive(Debug, Clone, Copy)]
pub struct ImageRenderOptions {
    pub style: BarImageStyle,
    /// Pixels per matrix cell, clamped to `1..=64`.
    pub scale: u32,
}

impl Default for ImageRenderOptions {
    fn default() -> Self {
        Self {
            style: BarImageStyle::Plain,
            scale: 1,
        }
    }
}

struct Palette {
    bar: Rgba<u8>,
    space: Rgba<u8>,
}

/// Paint a rendered matrix into an RGBA image.
///
/// Horizontal runs of set cells are filled as a single rectangle.
pub fn render_matrix_image(matrix: &BitMatrix, options: &ImageRenderOptions) -> DynamicImage {
    let scale = options.scale.clamp(1, MAX_SCALE);
    let palette = palette(options.style);

    let width_px = px(matrix.width(), scale);
    let height_px = px(matrix.height(), scale);
    let mut img = ImageBuffer::from_pixel(width_px, height_px, palette.space);

    for y in 0..matrix.height() {
        let row = matrix.row(y);
        let mut x = 0;
        while x < row.len() {
            if !row[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < row.len() && row[x] {
                x += 1;
            }
            let rect = Rect::at(offset(start, scale), offset(y, scale))
                .of_size(px(x - start, scale), scale);
            draw_filled_rect_mut(&mut img, rect, palette.bar);
        }
    }

    DynamicImage::ImageRgba8(img)
}

fn px(cells: usize, scale: u32) -> u32 {
    u32::try_from(cells).unwrap_or(u32::MAX).saturating_mul(scale)
}

fn offset(cells: usize, scale: u32) -> i32 {
    i32::try_from(px(cells, scale)).unwrap_or(i32::MAX)
}

fn palette(style: BarImageStyle) -> Palette {
    match style {
        BarImageStyle::Plain => Palette {
            bar: rgba(0x00, 0x00, 0x00, 0xff),
            space: rgba(0xff, 0xff, 0xff, 0xff),
        },
        BarImageStyle::Inverted => Palette {
            bar: rgba(0xff, 0xff, 0xff, 0xff),
            space: rgba(0x00, 0x00, 0x00, 0xff),
        },
        BarImageStyle::Thermal => Palette {
            bar: rgba(0x28, 0x24, 0x1f, 0xff),
            space: rgba(0xfd, 0xfa, 0xf3, 0xff),
        },
    }
}

fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
    Rgba([r, g, b, a])
}
