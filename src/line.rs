//! Fold-difference of both AWS CLI configurations over s5cmd for every
//! operation, as one line pair per operation on a shared log axis.

use std::ops::Range;
use std::path::Path;

use log::{debug, info};
use plotters::coord::combinators::LogCoord;
use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, ValueFormatter};
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, VPos};

use crate::data::{Category, Dataset, Operation};
use crate::error::Result;
use crate::figure::{category_label, operation_colour, Figure};
use crate::ratio::{axis_ticks, tick_label, RatioMatrix};

pub const FILE_NAME: &str = "all_operations_ratio_comparison_log_scale.png";

pub const TITLE: &str = "Runtime Improvement of 's5cmd' over 'aws s3 cp' When Moving 4 TBs";

pub const LEGEND_TITLE: &str = "Scenarios";

/// How a configuration's series is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
}

/// One line of the chart: an operation under one AWS CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub operation: Operation,
    pub stroke: Stroke,
    pub label: String,
    pub ratios: [f64; 4],
}

impl Series {
    fn points(&self) -> Vec<(f64, f64)> {
        Category::ALL
            .iter()
            .map(|c| (c.index() as f64, self.ratios[c.index()]))
            .collect()
    }
}

/// The eight series in legend order: per operation, default then optimized.
pub fn series(data: &Dataset) -> Vec<Series> {
    let default = RatioMatrix::new(&data.aws_default, data.reference());
    let optimized = RatioMatrix::new(&data.aws_optimized, data.reference());

    let mut series = Vec::with_capacity(8);
    for operation in Operation::ALL {
        series.push(Series {
            operation,
            stroke: Stroke::Solid,
            label: format!("{} (Default AWS CLI)", operation),
            ratios: default.column(operation),
        });
        series.push(Series {
            operation,
            stroke: Stroke::Dashed,
            label: format!("{} (Optimized AWS CLI)", operation),
            ratios: optimized.column(operation),
        });
    }
    series
}

/// Log axis range with some margin around the extreme ratios.
pub fn y_range(series: &[Series]) -> Range<f64> {
    let (lo, hi) = series
        .iter()
        .flat_map(|s| s.ratios)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    lo / 1.3..hi * 1.3
}

/// Log scaled ratio axis whose ticks are the fixed set from
/// [`axis_ticks`], each labelled like `10X`.
pub struct RatioAxis {
    log: LogCoord<f64>,
    ticks: Vec<f64>,
}

impl RatioAxis {
    pub fn new(range: Range<f64>) -> Self {
        let ticks = axis_ticks(range.start, range.end);
        Self {
            log: range.log_scale().into(),
            ticks,
        }
    }
}

impl Ranged for RatioAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.log.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.log.range()
    }
}

impl ValueFormatter<f64> for RatioAxis {
    fn format(value: &f64) -> String {
        tick_label(*value)
    }

    fn format_ext(&self, value: &f64) -> String {
        tick_label(*value)
    }
}

fn draw_legend(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    series: &[Series],
    figure: &Figure,
) -> Result<()> {
    let x = figure.px(8.0);
    let sample = figure.px(24.0);
    let row = figure.points(10.0 * 1.5);
    let top = figure.points(40.0);

    area.draw(&Text::new(
        LEGEND_TITLE,
        (x, top.round() as i32),
        figure.text(10.0, HPos::Left, VPos::Center),
    ))?;

    let style = figure.text(9.0, HPos::Left, VPos::Center);
    for (i, s) in series.iter().enumerate() {
        let y = (top + row * (i + 1) as f64).round() as i32;
        let colour = operation_colour(s.operation);
        let line = vec![(x, y), (x + sample, y)];
        let stroke = colour.stroke_width(figure.stroke(1.5));
        match s.stroke {
            Stroke::Solid => area.draw(&PathElement::new(line, stroke))?,
            Stroke::Dashed => area.draw(&DashedPathElement::new(
                line,
                figure.px(5.5),
                figure.px(2.5),
                stroke,
            ))?,
        }
        area.draw(&Circle::new((x + sample / 2, y), figure.px(3.0), colour.filled()))?;
        area.draw(&Text::new(
            s.label.clone(),
            (x + sample + figure.px(6.0), y),
            style.clone(),
        ))?;
    }
    Ok(())
}

pub fn render(data: &Dataset, path: &Path, figure: &Figure) -> Result<()> {
    let series = series(data);
    for s in &series {
        debug!("{}: {:?}", s.label, s.ratios);
    }

    let root = BitMapBackend::new(path, figure.pixels()).into_drawing_area();
    root.fill(&WHITE)?;

    let (width, _) = root.dim_in_pixel();
    let (plot_area, legend_area) = root.split_horizontally((width as f64 * 0.7).round() as u32);

    let mut ctx = ChartBuilder::on(&plot_area)
        .caption(TITLE, figure.font(12.0))
        .margin(figure.px(8.0))
        .x_label_area_size(figure.px(32.0))
        .y_label_area_size(figure.px(48.0))
        .build_cartesian_2d(-0.25f64..3.25f64, RatioAxis::new(y_range(&series)))?;

    ctx.configure_mesh()
        .x_labels(Category::ALL.len())
        .x_label_formatter(&|x| category_label(*x))
        .x_desc("File Size")
        .y_desc("Runtime Ratio (AWS CLI / s5cmd)")
        .label_style(figure.font(9.0))
        .axis_desc_style(figure.font(10.0))
        .draw()?;

    let width = figure.stroke(1.5);
    let radius = figure.px(3.0);
    for s in &series {
        let colour = operation_colour(s.operation);
        let style = colour.stroke_width(width);
        match s.stroke {
            Stroke::Solid => ctx.draw_series(LineSeries::new(s.points(), style))?,
            Stroke::Dashed => ctx.draw_series(DashedLineSeries::new(
                s.points(),
                figure.px(5.5),
                figure.px(2.5),
                style,
            ))?,
        };
        ctx.draw_series(
            s.points()
                .into_iter()
                .map(|p| Circle::new(p, radius, colour.filled())),
        )?;
    }

    draw_legend(&legend_area, &series, figure)?;

    root.present()?;
    info!("wrote {}", path.display());
    Ok(())
}
