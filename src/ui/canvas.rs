//! Drawing primitives used by the screen renderers.
//!
//! Renderers only see [`Canvas`]; [`GraphicsCanvas`] maps it onto any
//! `embedded-graphics` monochrome draw target (the SSD1306 buffer on the
//! board, an in-memory framebuffer in tests).

use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/// Display width in pixels.
pub const WIDTH: i32 = 128;
/// Display height in pixels.
pub const HEIGHT: i32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    /// Bold title font.
    Primary,
    /// Small body font.
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Minimal set of 2D primitives for a 128×64 monochrome screen.
pub trait Canvas {
    fn clear(&mut self);

    fn set_font(&mut self, font: Font);

    /// Draw `text` with its left edge at `x` and its baseline at `y`.
    fn draw_str(&mut self, x: i32, y: i32, text: &str);

    /// Draw `text` horizontally centred on `x`, vertically placed against
    /// `y` by `v`.
    fn draw_str_centered(&mut self, x: i32, y: i32, v: VAlign, text: &str);

    /// Draw a one-pixel rectangle outline.
    fn draw_frame(&mut self, x: i32, y: i32, width: u32, height: u32);
}

/// [`Canvas`] over an `embedded-graphics` draw target.
///
/// Draw errors are dropped: a failed frame is simply redrawn on the next
/// tick.
pub struct GraphicsCanvas<'a, D> {
    target: &'a mut D,
    font: Font,
}

impl<'a, D> GraphicsCanvas<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            font: Font::Secondary,
        }
    }

    fn mono_font(&self) -> &'static MonoFont<'static> {
        match self.font {
            Font::Primary => &FONT_7X13_BOLD,
            Font::Secondary => &FONT_6X10,
        }
    }

    fn character_style(&self) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(self.mono_font(), BinaryColor::On)
    }
}

impl<D> Canvas for GraphicsCanvas<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn clear(&mut self) {
        let _ = self.target.clear(BinaryColor::Off);
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn draw_str(&mut self, x: i32, y: i32, text: &str) {
        let _ = Text::with_baseline(
            text,
            Point::new(x, y),
            self.character_style(),
            Baseline::Alphabetic,
        )
        .draw(self.target);
    }

    fn draw_str_centered(&mut self, x: i32, y: i32, v: VAlign, text: &str) {
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(match v {
                VAlign::Top => Baseline::Top,
                VAlign::Center => Baseline::Middle,
                VAlign::Bottom => Baseline::Bottom,
            })
            .build();
        let _ = Text::with_text_style(text, Point::new(x, y), self.character_style(), text_style)
            .draw(self.target);
    }

    fn draw_frame(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(self.target);
    }
}
