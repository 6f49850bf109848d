//! Reporting
//!
//! Turns scan results into CI annotations, a run summary and an exit status.

pub mod annotation;
pub mod reporter;
pub mod summary;

pub use annotation::{Annotation, ANNOTATION_TITLE};
pub use reporter::{Reporter, ReporterConfig};
pub use summary::{RunSummary, SummarySink};
