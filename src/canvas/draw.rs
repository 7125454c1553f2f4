//! Drawing primitives.
//!
//! Each function returns a guard that allows customizing the drawn shape. The shape is drawn when
//! the guard is dropped, so a plain `draw::circle(canvas, x, y, 3);` statement draws immediately.

use std::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    mono_font::{ascii, MonoTextStyle},
    prelude::*,
    primitives::{self, PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::{Canvas, Color};

/// Guard returned by [`circle`]; draws the filled circle when dropped and allows customization.
pub struct DrawCircle<'a> {
    canvas: &'a mut Canvas,
    x: i32,
    y: i32,
    radius: u32,
    color: Color,
}

impl DrawCircle<'_> {
    /// Sets the circle's color.
    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }
}

impl Drop for DrawCircle<'_> {
    fn drop(&mut self) {
        let circle = primitives::Circle::with_center(Point::new(self.x, self.y), self.radius * 2 + 1);
        match circle
            .into_styled(PrimitiveStyle::with_fill(self.color))
            .draw(&mut Target(self.canvas))
        {
            Ok(_) => {}
            Err(infallible) => match infallible {},
        }
    }
}

/// Guard returned by [`text`]; draws the text when dropped and allows customization.
pub struct DrawText<'a> {
    canvas: &'a mut Canvas,
    x: i32,
    y: i32,
    text: &'a str,
    color: Color,
}

impl DrawText<'_> {
    /// Sets the text color.
    pub fn color(&mut self, color: Color) -> &mut Self {
        self.color = color;
        self
    }
}

impl Drop for DrawText<'_> {
    fn drop(&mut self) {
        let character_style = MonoTextStyle::new(&ascii::FONT_4X6, self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Top)
            .build();
        match Text::with_text_style(
            self.text,
            Point::new(self.x, self.y),
            character_style,
            text_style,
        )
        .draw(&mut Target(self.canvas))
        {
            Ok(_) => {}
            Err(infallible) => match infallible {},
        }
    }
}

/// Draws a filled circle of the given `radius` centered at `(x, y)`.
///
/// The circle covers `2 * radius + 1` pixels in each direction, so a radius of 0 draws a single
/// pixel. It is drawn in [`Color::WHITE`] unless another color is selected.
pub fn circle(canvas: &mut Canvas, x: i32, y: i32, radius: u32) -> DrawCircle<'_> {
    DrawCircle {
        canvas,
        x,
        y,
        radius,
        color: Color::WHITE,
    }
}

/// Draws a text string whose top left corner is placed at `(x, y)`.
///
/// Glyphs are 4x6 pixels. The text is drawn in [`Color::WHITE`] unless another color is selected.
pub fn text<'a>(canvas: &'a mut Canvas, x: i32, y: i32, text: &'a str) -> DrawText<'a> {
    DrawText {
        canvas,
        x,
        y,
        text,
        color: Color::WHITE,
    }
}

struct Target<'a>(&'a mut Canvas);

impl Dimensions for Target<'_> {
    fn bounding_box(&self) -> Rectangle {
        let (width, height) = (self.0.width(), self.0.height());

        Rectangle {
            top_left: Point { x: 0, y: 0 },
            size: Size { width, height },
        }
    }
}

impl DrawTarget for Target<'_> {
    type Color = Color;

    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && (point.x as u32) < self.0.width()
                && point.y >= 0
                && (point.y as u32) < self.0.height()
            {
                self.0.set(point.x as u32, point.y as u32, color);
            }
        }

        Ok(())
    }
}
