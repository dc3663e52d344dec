use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::data::{Category, Operation, Tool};

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("invalid runtime {value} for {tool} / {category} / {operation}: must be finite and > 0")]
    InvalidRuntime {
        tool: Tool,
        category: Category,
        operation: Operation,
        value: f64,
    },

    #[error("invalid dpi {0}: must be at least 1")]
    InvalidDpi(u32),
}

// plotters errors are generic over the backend, so they are flattened to text here
impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Drawing(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
