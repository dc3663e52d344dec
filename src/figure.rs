use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::data::{Category, Operation, Tool};
use crate::error::{Error, Result};

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const TOOL_COLOURS: [RGBColor; 3] = [
    hexcolour!(0x1F77B4),
    hexcolour!(0xFF7F0E),
    hexcolour!(0x2CA02C),
];

const OPERATION_COLOURS: [RGBColor; 4] = [
    hexcolour!(0xFF0000),
    hexcolour!(0x0000FF),
    hexcolour!(0x008000),
    hexcolour!(0x800080),
];

pub const FONT: &str = "sans-serif";

pub const DEFAULT_DPI: u32 = 600;

pub fn tool_colour(tool: Tool) -> RGBColor {
    TOOL_COLOURS[tool.index()]
}

pub fn operation_colour(operation: Operation) -> RGBColor {
    OPERATION_COLOURS[operation.index()]
}

/// The 10x6 inch figure every chart is drawn on. Font sizes and stroke
/// widths are given in points and scaled to pixels by the DPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    dpi: u32,
}

impl Figure {
    const INCHES: (u32, u32) = (10, 6);

    pub fn standard(dpi: u32) -> Result<Self> {
        if dpi == 0 {
            return Err(Error::InvalidDpi(dpi));
        }
        Ok(Self { dpi })
    }

    pub fn pixels(&self) -> (u32, u32) {
        (Self::INCHES.0 * self.dpi, Self::INCHES.1 * self.dpi)
    }

    pub fn points(&self, pt: f64) -> f64 {
        pt * self.dpi as f64 / 72.0
    }

    /// `points` rounded for APIs that take whole pixels.
    pub fn px(&self, pt: f64) -> i32 {
        self.points(pt).round() as i32
    }

    pub fn stroke(&self, pt: f64) -> u32 {
        self.points(pt).round().max(1.0) as u32
    }

    pub fn font(&self, pt: f64) -> FontDesc<'static> {
        (FONT, self.points(pt)).into_font()
    }

    /// Text style anchored at `h`/`v` of the drawing position.
    pub fn text(&self, pt: f64, h: HPos, v: VPos) -> TextStyle<'static> {
        TextStyle::from(self.font(pt)).pos(Pos::new(h, v))
    }
}

/// Category name for an x axis position, empty between categories.
pub fn category_label(x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 {
        return String::new();
    }
    Category::ALL
        .iter()
        .find(|c| c.index() as f64 == index)
        .map(|c| c.label().to_string())
        .unwrap_or_default()
}

/// Draws `lines` centred in `area`, one below the other.
pub fn draw_title(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    lines: &[&str],
    figure: &Figure,
) -> Result<()> {
    let (width, height) = area.dim_in_pixel();
    let line_height = figure.points(14.0 * 1.3);
    let top = (height as f64 - line_height * lines.len() as f64) / 2.0;
    let style = figure.text(14.0, HPos::Center, VPos::Top);
    for (i, line) in lines.iter().enumerate() {
        let y = top + line_height * i as f64;
        area.draw(&Text::new(
            line.to_string(),
            ((width / 2) as i32, y.round() as i32),
            style.clone(),
        ))?;
    }
    Ok(())
}
