pub mod engine;
pub mod filter;
pub mod pipeline;

pub use crate::domain::model::{CustomParams, Extracted, Record, TransformResult};
pub use crate::domain::ports::{Algorithm, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
