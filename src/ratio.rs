//! Fold-difference of the AWS CLI runtimes over s5cmd, and the text used to
//! show it on the charts.

use crate::data::{Category, Operation, RuntimeMatrix};

/// Fixed minor ticks of the ratio axis.
pub const MINOR_TICKS: [f64; 19] = [
    1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 20., 30., 40., 50., 60., 70., 80., 100., 200.,
];

/// Elementwise `baseline / reference`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioMatrix {
    values: [[f64; 4]; 4],
}

impl RatioMatrix {
    pub fn new(baseline: &RuntimeMatrix, reference: &RuntimeMatrix) -> Self {
        let mut values = [[0.0; 4]; 4];
        for category in Category::ALL {
            for operation in Operation::ALL {
                values[category.index()][operation.index()] = fold_difference(
                    baseline.get(category, operation),
                    reference.get(category, operation),
                );
            }
        }
        Self { values }
    }

    pub fn get(&self, category: Category, operation: Operation) -> f64 {
        self.values[category.index()][operation.index()]
    }

    pub fn column(&self, operation: Operation) -> [f64; 4] {
        Category::ALL.map(|c| self.get(c, operation))
    }

    pub fn min(&self) -> f64 {
        self.values.iter().flatten().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

pub fn fold_difference(runtime: f64, reference: f64) -> f64 {
    runtime / reference
}

/// Annotation above a bar. Reference bars carry the runtime only, the
/// others add the fold-difference on a second line, e.g. `"11790\n(19.2x)"`.
pub fn bar_label(runtime: f64, reference: Option<f64>) -> String {
    let seconds = runtime as i64;
    match reference {
        None => format!("{}", seconds),
        Some(reference) => format!(
            "{}\n({:.1}x)",
            seconds,
            fold_difference(seconds as f64, reference)
        ),
    }
}

/// Ratio axis label, e.g. `10X`.
pub fn tick_label(value: f64) -> String {
    format!("{}X", value as i64)
}

/// Powers of ten inside `lo..=hi`.
pub fn major_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut exp = lo.log10().ceil() as i32;
    loop {
        let tick = 10f64.powi(exp);
        if tick > hi {
            break;
        }
        ticks.push(tick);
        exp += 1;
    }
    ticks
}

/// Every labelled tick of the ratio axis that falls inside `lo..=hi`:
/// the fixed minor set plus the powers of ten, ascending and deduplicated.
pub fn axis_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let mut ticks: Vec<f64> = MINOR_TICKS
        .iter()
        .copied()
        .filter(|&t| t >= lo && t <= hi)
        .chain(major_ticks(lo, hi))
        .collect();
    ticks.sort_by(|a, b| a.total_cmp(b));
    ticks.dedup();
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, Tool};

    #[test]
    fn elementwise_division() {
        let data = Dataset::measured();
        let ratio = RatioMatrix::new(&data.aws_default, &data.s5cmd);
        for category in Category::ALL {
            for operation in Operation::ALL {
                assert_eq!(
                    ratio.get(category, operation),
                    data.aws_default.get(category, operation)
                        / data.s5cmd.get(category, operation)
                );
            }
        }
    }

    #[test]
    fn ratio_extent() {
        let data = Dataset::measured();
        let ratio = RatioMatrix::new(&data.aws_optimized, &data.s5cmd);
        assert_eq!(ratio.min(), 14431.0 / 4132.0);
        assert_eq!(ratio.max(), 11221.0 / 617.0);
        assert_eq!(
            ratio.column(Operation::SameRegionCopy)[2],
            1355.0 / 335.0
        );
    }

    #[test]
    fn reference_label_is_plain() {
        assert_eq!(bar_label(614.0, None), "614");
    }

    #[test]
    fn baseline_labels_carry_ratio() {
        let data = Dataset::measured();
        let reference = data.s5cmd.get(Category::VeryLarge, Operation::Upload);
        let runtime = data
            .runtimes(Tool::AwsDefault)
            .get(Category::VeryLarge, Operation::Upload);
        assert_eq!(bar_label(runtime, Some(reference)), "11790\n(19.2x)");

        assert_eq!(bar_label(14431.0, Some(4132.0)), "14431\n(3.5x)");
        assert_eq!(bar_label(120009.0, Some(4132.0)), "120009\n(29.0x)");
    }

    #[test]
    fn tick_labels() {
        let labels: Vec<_> = MINOR_TICKS.iter().map(|&t| tick_label(t)).collect();
        assert_eq!(
            labels,
            [
                "1X", "2X", "3X", "4X", "5X", "6X", "7X", "8X", "9X", "10X", "20X", "30X", "40X",
                "50X", "60X", "70X", "80X", "100X", "200X"
            ]
        );
    }

    #[test]
    fn majors_are_powers_of_ten() {
        assert_eq!(major_ticks(2.5, 150.0), vec![10.0, 100.0]);
        assert_eq!(major_ticks(1.0, 1000.0), vec![1.0, 10.0, 100.0, 1000.0]);
        assert!(major_ticks(2.0, 9.0).is_empty());
    }

    #[test]
    fn axis_ticks_stay_in_range() {
        let ticks = axis_ticks(2.5, 150.0);
        assert!(ticks.iter().all(|&t| (2.5..=150.0).contains(&t)));
        assert!(ticks.contains(&10.0) && ticks.contains(&100.0));
        assert!(!ticks.contains(&200.0) && !ticks.contains(&2.0));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));

        let all = axis_ticks(1.0, 200.0);
        assert_eq!(all, MINOR_TICKS.to_vec());
    }
}
