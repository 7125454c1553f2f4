//! Palette-indexed pixel canvas.
//!
//! Every pixel of a [`Canvas`] stores one byte: an index into the fixed 16-color [`PALETTE`].
//! Conversion to real colors only happens when the canvas is presented (see
//! [`Canvas::to_rgba8`]).

pub mod draw;

#[cfg(test)]
mod tests;

use std::fmt;

use embedded_graphics::pixelcolor::PixelColor;

use crate::resolution::Resolution;

/// Width of the canvas drawn by the application, in logical pixels.
pub const WINDOW_W: u32 = 256;
/// Height of the canvas drawn by the application, in logical pixels.
pub const WINDOW_H: u32 = 256;

/// The default 16-color palette, as `0xRRGGBB`.
pub const PALETTE: [u32; 16] = [
    0x000000, 0x2b335f, 0x7e2072, 0x19959c, 0x8b4852, 0x395c98, 0xa9c1ff, 0xeeeeee, //
    0xd4186c, 0xd38441, 0xe9c35b, 0x70c6a9, 0x7696de, 0xa3a3a3, 0xff9798, 0xedc7b0,
];

/// A color, given as an index into the [`PALETTE`].
///
/// Indices past the end of the palette wrap around.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Color(pub u8);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const NAVY: Self = Self(1);
    pub const PURPLE: Self = Self(2);
    pub const GREEN: Self = Self(3);
    pub const BROWN: Self = Self(4);
    pub const DARK_BLUE: Self = Self(5);
    pub const LIGHT_BLUE: Self = Self(6);
    pub const WHITE: Self = Self(7);
    pub const RED: Self = Self(8);
    pub const ORANGE: Self = Self(9);
    pub const YELLOW: Self = Self(10);
    pub const LIME: Self = Self(11);
    pub const CYAN: Self = Self(12);
    pub const GRAY: Self = Self(13);
    pub const PINK: Self = Self(14);
    pub const PEACH: Self = Self(15);

    /// Looks up the 8-bit RGB components of this color in the [`PALETTE`].
    pub fn to_rgb8(self) -> [u8; 3] {
        let rgb = PALETTE[usize::from(self.0) % PALETTE.len()];
        [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "Color({}, #{:02x}{:02x}{:02x})", self.0, r, g, b)
    }
}

impl PixelColor for Color {
    type Raw = ();
}

/// A fixed-size canvas of palette-indexed pixels.
#[derive(Clone)]
pub struct Canvas {
    resolution: Resolution,
    pixels: Box<[u8]>,
}

impl Canvas {
    /// Creates a canvas of the given size, with every pixel set to [`Color::BLACK`].
    pub fn new(resolution: Resolution) -> Self {
        let len = resolution.width() as usize * resolution.height() as usize;
        Self {
            resolution,
            pixels: vec![Color::BLACK.0; len].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.resolution.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.resolution.height()
    }

    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Sets every pixel on the canvas to `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.0);
    }

    /// Returns the color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Color {
        Color(self.pixels[self.index(x, y)])
    }

    /// Sets the pixel at `(x, y)` to `color`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the canvas.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color.0;
    }

    /// Returns an iterator over every pixel's color, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.pixels.iter().map(|&index| Color(index))
    }

    /// Resolves every pixel through the palette, producing tightly packed RGBA8 data.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels()
            .flat_map(|color| {
                let [r, g, b] = color.to_rgb8();
                [r, g, b, 255]
            })
            .collect()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width() && y < self.height(),
            "pixel coordinate ({x}, {y}) is outside of {} canvas",
            self.resolution,
        );
        y as usize * self.width() as usize + x as usize
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Resolution::new(WINDOW_W, WINDOW_H))
    }
}
