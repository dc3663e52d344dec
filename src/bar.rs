//! One grouped bar chart per operation: the three tools side by side for
//! every size category, on a log runtime axis, with each bar annotated by
//! its runtime and (for the AWS CLI) its fold-difference over s5cmd.

use std::ops::Range;
use std::path::Path;

use log::{debug, info};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use crate::data::{Category, Dataset, Operation, Tool};
use crate::error::Result;
use crate::figure::{category_label, draw_title, tool_colour, Figure};
use crate::ratio::{bar_label, fold_difference};

pub const BAR_WIDTH: f64 = 0.2;

pub const SUBTITLE: &str = "(AWS vs. s5cmd runtime difference shown in parentheses)";

/// What to draw for one operation and where to save it.
#[derive(Debug, Clone, Copy)]
pub struct BarChart {
    pub operation: Operation,
    pub title: &'static str,
    pub file_name: &'static str,
}

pub const BAR_CHARTS: [BarChart; 4] = [
    BarChart {
        operation: Operation::Upload,
        title: "Upload Time Comparison for 4 TBs of Data",
        file_name: "upload_comparison.png",
    },
    BarChart {
        operation: Operation::Download,
        title: "Download Time Comparison for 4 TBs of Data",
        file_name: "download_comparison.png",
    },
    BarChart {
        operation: Operation::SameRegionCopy,
        title: "Same-Region Bucket Copy Time Comparison for 4 TBs of Data",
        file_name: "same_region_copy_comparison.png",
    },
    BarChart {
        operation: Operation::DifferentRegionCopy,
        title: "Different-Region Bucket Copy Time Comparison for 4 TBs of Data",
        file_name: "different_region_copy_comparison.png",
    },
];

/// Centre of the bar for `tool` within the `category` group.
pub fn bar_x(category: Category, tool: Tool) -> f64 {
    category.index() as f64 + (tool.index() as f64 - 1.0) * BAR_WIDTH
}

/// Log axis range: from the power of ten at or below the fastest runtime
/// up to enough headroom above the slowest for a two line label.
pub fn y_range(lo: f64, hi: f64) -> Range<f64> {
    10f64.powi(lo.log10().floor() as i32)..hi * 5.0
}

pub fn render(data: &Dataset, chart: &BarChart, path: &Path, figure: &Figure) -> Result<()> {
    let operation = chart.operation;
    let reference = data.reference();

    let root = BitMapBackend::new(path, figure.pixels()).into_drawing_area();
    root.fill(&WHITE)?;

    let (title_area, plot_area) = root.split_vertically(figure.px(48.0));
    draw_title(&title_area, &[chart.title, SUBTITLE], figure)?;

    let (lo, hi) = data.bounds(operation);
    let y = y_range(lo, hi);
    let floor = y.start;

    let mut ctx = ChartBuilder::on(&plot_area)
        .margin(figure.px(8.0))
        .x_label_area_size(figure.px(24.0))
        .y_label_area_size(figure.px(56.0))
        .build_cartesian_2d(-0.5f64..3.5f64, y.log_scale())?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(Category::ALL.len())
        .x_label_formatter(&|x| category_label(*x))
        .y_label_formatter(&|y| format!("{}", *y as i64))
        .y_desc("Runtime (seconds)")
        .label_style(figure.font(10.0))
        .axis_desc_style(figure.font(10.0))
        .draw()?;

    let marker = figure.px(5.0);
    for tool in Tool::ALL {
        let runtimes = data.runtimes(tool);
        let colour = tool_colour(tool);
        ctx.draw_series(Category::ALL.iter().map(|&c| {
            let x = bar_x(c, tool);
            Rectangle::new(
                [
                    (x - BAR_WIDTH / 2.0, floor),
                    (x + BAR_WIDTH / 2.0, runtimes.get(c, operation)),
                ],
                colour.filled(),
            )
        }))?
        .label(tool.label())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - marker), (x + 2 * marker, y + marker)], colour.filled())
        });
    }

    let line_height = figure.points(8.0 * 1.2);
    let gap = figure.points(1.0);
    let style = figure.text(8.0, HPos::Center, VPos::Bottom);
    for tool in Tool::ALL {
        let runtimes = data.runtimes(tool);
        for category in Category::ALL {
            let runtime = runtimes.get(category, operation);
            let base = reference.get(category, operation);
            if !tool.is_reference() {
                debug!(
                    "{} {} {}: {:.2}x",
                    operation,
                    category,
                    tool,
                    fold_difference(runtime, base)
                );
            }
            let label = bar_label(runtime, (!tool.is_reference()).then(|| base));

            let (px, py) = ctx
                .plotting_area()
                .map_coordinate(&(bar_x(category, tool), runtime));
            for (i, line) in label.lines().rev().enumerate() {
                let y = py as f64 - gap - line_height * i as f64;
                root.draw(&Text::new(
                    line.to_string(),
                    (px, y.round() as i32),
                    style.clone(),
                ))?;
            }
        }
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .legend_area_size(figure.px(24.0))
        .label_font(figure.font(10.0))
        .background_style(WHITE.filled())
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_chart_per_operation_in_order() {
        let ops: Vec<_> = BAR_CHARTS.iter().map(|c| c.operation).collect();
        assert_eq!(ops, Operation::ALL.to_vec());
        let names: Vec<_> = BAR_CHARTS.iter().map(|c| c.file_name).collect();
        assert_eq!(
            names,
            [
                "upload_comparison.png",
                "download_comparison.png",
                "same_region_copy_comparison.png",
                "different_region_copy_comparison.png",
            ]
        );
    }

    #[test]
    fn bars_sit_side_by_side() {
        let eps = 1e-9;
        assert!((bar_x(Category::VeryLarge, Tool::S5cmd) + 0.2).abs() < eps);
        assert!((bar_x(Category::VeryLarge, Tool::AwsDefault)).abs() < eps);
        assert!((bar_x(Category::Small, Tool::AwsOptimized) - 3.2).abs() < eps);

        // bars of one group never overlap the next group
        let last = bar_x(Category::Large, Tool::AwsOptimized) + BAR_WIDTH / 2.0;
        let next = bar_x(Category::Medium, Tool::S5cmd) - BAR_WIDTH / 2.0;
        assert!(last < next);
    }

    #[test]
    fn runtime_axis_covers_every_bar() {
        let data = Dataset::measured();
        for operation in Operation::ALL {
            let (lo, hi) = data.bounds(operation);
            let range = y_range(lo, hi);
            assert!(range.start > 0.0 && range.start <= lo);
            assert!(range.end > hi);
        }
        let range = y_range(612.0, 185440.0);
        assert_eq!(range.start, 100.0);
    }
}
