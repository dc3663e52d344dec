//! Runtime tables for the s5cmd vs. AWS CLI comparison.
//!
//! Rows are size categories and columns are operations, both in the order
//! given by [`Category::ALL`] and [`Operation::ALL`]. All values are in
//! seconds for moving 4 TB of data.

use std::fmt;

use crate::error::{Error, Result};

/// Size tier of the objects being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    VeryLarge,
    Large,
    Medium,
    Small,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::VeryLarge,
        Category::Large,
        Category::Medium,
        Category::Small,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::VeryLarge => "Very Large (5 GB)",
            Category::Large => "Large (1 GB)",
            Category::Medium => "Medium (32 MB)",
            Category::Small => "Small (256 KB)",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of transfer being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Upload,
    Download,
    SameRegionCopy,
    DifferentRegionCopy,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Upload,
        Operation::Download,
        Operation::SameRegionCopy,
        Operation::DifferentRegionCopy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::Upload => "Upload",
            Operation::Download => "Download",
            Operation::SameRegionCopy => "Same-Region Copy",
            Operation::DifferentRegionCopy => "Different-Region Copy",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A timed tool configuration. `S5cmd` is the reference every ratio is
/// taken against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    S5cmd,
    AwsDefault,
    AwsOptimized,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::S5cmd, Tool::AwsDefault, Tool::AwsOptimized];

    pub fn label(self) -> &'static str {
        match self {
            Tool::S5cmd => "s5cmd",
            Tool::AwsDefault => "AWS CLI Default",
            Tool::AwsOptimized => "AWS CLI Optimized",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_reference(self) -> bool {
        self == Tool::S5cmd
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 4x4 runtimes in seconds, indexed `[category][operation]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeMatrix {
    values: [[f64; 4]; 4],
}

impl RuntimeMatrix {
    /// Builds a matrix, rounding every value to whole seconds (halves to even).
    pub fn new(values: [[f64; 4]; 4]) -> Self {
        let mut values = values;
        for row in values.iter_mut() {
            for value in row.iter_mut() {
                *value = value.round_ties_even();
            }
        }
        Self { values }
    }

    pub fn get(&self, category: Category, operation: Operation) -> f64 {
        self.values[category.index()][operation.index()]
    }

    /// Runtimes of one operation in category order.
    pub fn column(&self, operation: Operation) -> [f64; 4] {
        Category::ALL.map(|c| self.get(c, operation))
    }

    pub fn rows(&self) -> &[[f64; 4]; 4] {
        &self.values
    }

    /// Checks every cell is finite and strictly positive so that ratios
    /// and logarithms are defined.
    pub fn validate(&self, tool: Tool) -> Result<()> {
        for category in Category::ALL {
            for operation in Operation::ALL {
                let value = self.get(category, operation);
                if !value.is_finite() || value <= 0.0 {
                    return Err(Error::InvalidRuntime {
                        tool,
                        category,
                        operation,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

/// The three runtime tables side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dataset {
    pub s5cmd: RuntimeMatrix,
    pub aws_default: RuntimeMatrix,
    pub aws_optimized: RuntimeMatrix,
}

impl Dataset {
    /// The measured runtimes for moving 4 TB.
    pub fn measured() -> Self {
        Self {
            s5cmd: RuntimeMatrix::new([
                [614., 895., 465., 4132.],
                [612., 899., 405., 3499.],
                [617., 880., 335., 3656.],
                [7988., 6599., 12053., 44127.],
            ]),
            aws_default: RuntimeMatrix::new([
                [11790., 13806., 17446., 120009.],
                [12835., 15078., 19465., 122780.],
                [16317., 13447., 26874., 146184.],
                [185440., 201390., 332655., 1216567.],
            ]),
            aws_optimized: RuntimeMatrix::new([
                [10928., 11507., 1664., 14431.],
                [10782., 5773., 1615., 16890.],
                [11221., 6261., 1355., 14653.],
                [60509., 57255., 52854., 194838.],
            ]),
        }
    }

    pub fn runtimes(&self, tool: Tool) -> &RuntimeMatrix {
        match tool {
            Tool::S5cmd => &self.s5cmd,
            Tool::AwsDefault => &self.aws_default,
            Tool::AwsOptimized => &self.aws_optimized,
        }
    }

    pub fn reference(&self) -> &RuntimeMatrix {
        self.runtimes(Tool::S5cmd)
    }

    pub fn validate(&self) -> Result<()> {
        for tool in Tool::ALL {
            self.runtimes(tool).validate(tool)?;
        }
        Ok(())
    }

    /// Smallest and largest runtime of one operation across all tools.
    pub fn bounds(&self, operation: Operation) -> (f64, f64) {
        Tool::ALL
            .iter()
            .flat_map(|&t| self.runtimes(t).column(operation))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orderings() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["Very Large (5 GB)", "Large (1 GB)", "Medium (32 MB)", "Small (256 KB)"]
        );
        let labels: Vec<_> = Operation::ALL.iter().map(|o| o.label()).collect();
        assert_eq!(
            labels,
            ["Upload", "Download", "Same-Region Copy", "Different-Region Copy"]
        );
        for (i, op) in Operation::ALL.iter().enumerate() {
            assert_eq!(op.index(), i);
        }
        assert!(Tool::S5cmd.is_reference());
        assert!(!Tool::AwsOptimized.is_reference());
    }

    #[test]
    fn measured_is_valid() {
        let data = Dataset::measured();
        data.validate().unwrap();
        for tool in Tool::ALL {
            for row in data.runtimes(tool).rows() {
                assert!(row.iter().all(|&v| v > 0.0));
            }
        }
    }

    #[test]
    fn lookup() {
        let data = Dataset::measured();
        assert_eq!(data.s5cmd.get(Category::VeryLarge, Operation::Upload), 614.0);
        assert_eq!(
            data.aws_optimized
                .get(Category::VeryLarge, Operation::DifferentRegionCopy),
            14431.0
        );
        assert_eq!(
            data.aws_default.column(Operation::Download),
            [13806., 15078., 13447., 201390.]
        );
    }

    #[test]
    fn rounds_on_construction() {
        let m = RuntimeMatrix::new([[1.4, 1.6, 2.5, 3.5]; 4]);
        assert_eq!(m.rows()[0], [1.0, 2.0, 2.0, 4.0]);
    }

    #[test]
    fn rejects_non_positive() {
        let mut values = [[1.0; 4]; 4];
        values[2][3] = 0.0;
        let m = RuntimeMatrix::new(values);
        match m.validate(Tool::AwsDefault) {
            Err(Error::InvalidRuntime {
                tool,
                category,
                operation,
                ..
            }) => {
                assert_eq!(tool, Tool::AwsDefault);
                assert_eq!(category, Category::Medium);
                assert_eq!(operation, Operation::DifferentRegionCopy);
            }
            other => panic!("unexpected: {:?}", other),
        }

        let mut values = [[1.0; 4]; 4];
        values[0][0] = f64::NAN;
        assert!(RuntimeMatrix::new(values).validate(Tool::S5cmd).is_err());
    }

    #[test]
    fn bounds_span_all_tools() {
        let data = Dataset::measured();
        assert_eq!(data.bounds(Operation::Upload), (612.0, 185440.0));
        assert_eq!(
            data.bounds(Operation::DifferentRegionCopy),
            (3499.0, 1216567.0)
        );
    }
}
