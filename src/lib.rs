pub mod aggregate;
pub mod commands;
pub mod completion;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod session;
pub mod snapshot;
pub mod variants;

pub use aggregate::{
    summarize_project, summarize_record, summarize_task, ProjectProgress, TaskProgress, TaskStatus,
};
pub use content::ContentRegistry;
pub use error::{LearnboardError, Result, ValidationError};
pub use model::{ProjectVariant, TaskRecord, TaskSummary, TestOutcome, TestStatus};
pub use session::{Session, SessionStore};
pub use snapshot::{CatalogSnapshot, ProgressSnapshot};
pub use variants::{group_projects, select_variant, VariantGroup, VariantSelections};
