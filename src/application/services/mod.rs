mod pipeline_service;
pub mod prompt_templates;
mod structuring_service;

pub use pipeline_service::{PipelineError, PipelineService};
pub use structuring_service::{Stage, StructuringError, StructuringService};
