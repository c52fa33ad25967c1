pub mod config;
pub mod models;
pub mod pipeline;

pub use models::{CourseMetadata, DeadlineTemplate, DeadlineType, ExpandedDeadline};
pub use pipeline::{PipelineError, ServiceError, SyllabusPipeline};
