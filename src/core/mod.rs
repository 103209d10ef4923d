pub mod evaluator;
pub mod report;
pub mod resolver;
pub mod schedule;
pub mod tokenizer;

pub use crate::domain::model::{FieldKind, OutputFormat, ValueRange};
pub use crate::domain::ports::ValueResolver;
pub use crate::utils::error::Result;
