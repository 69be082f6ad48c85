pub mod schedule;
pub mod task;
pub mod timeline;

pub use schedule::Schedule;
pub use task::{DependencyKind, PredecessorLink, TaskId, TaskRecord};
pub use timeline::TimelineViewport;
