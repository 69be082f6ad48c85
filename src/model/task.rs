use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a task within one loaded schedule.
pub type TaskId = u32;

/// Color token used when the source row carries no color cell at all.
pub const DEFAULT_COLOR_CODE: &str = "#FF5733";

/// Represents the type of dependency between two tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyKind {
    #[default]
    FinishToStart,
    StartToStart,
    FinishToFinish,
    StartToFinish,
}

impl DependencyKind {
    /// Interpret the text following a predecessor id (`"FS"`, `"ss+2d"`, ...).
    ///
    /// Only the first two letters matter; anything unrecognised is treated
    /// as finish-to-start.
    pub fn from_suffix(suffix: &str) -> Self {
        let code: String = suffix
            .trim_start()
            .chars()
            .take(2)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match code.as_str() {
            "SS" => Self::StartToStart,
            "FF" => Self::FinishToFinish,
            "SF" => Self::StartToFinish,
            _ => Self::FinishToStart,
        }
    }

    /// Short code as written in schedule files.
    pub fn code(self) -> &'static str {
        match self {
            Self::FinishToStart => "FS",
            Self::StartToStart => "SS",
            Self::FinishToFinish => "FF",
            Self::StartToFinish => "SF",
        }
    }
}

/// One resolved entry of a task's predecessor field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredecessorLink {
    pub id: TaskId,
    pub kind: DependencyKind,
}

/// A single row of a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    /// Indent depth in the source outline. Only used for ordering.
    pub outline_level: u32,
    pub name: String,
    pub start: NaiveDate,
    /// Not validated against `start`.
    pub finish: NaiveDate,
    /// Shown verbatim, no range clamp.
    pub percent_complete: f64,
    /// Predecessor field exactly as it appeared in the source.
    pub predecessors_raw: String,
    /// Parsed from `predecessors_raw`, in order of appearance.
    pub predecessors: Vec<PredecessorLink>,
    pub resource: String,
    pub color_code: String,
    /// May contain `<br>`, `<p>`, `</p>` and `&nbsp;`.
    pub notes: String,
}

impl TaskRecord {
    /// Create a task with empty optional fields.
    pub fn new(id: TaskId, name: impl Into<String>, start: NaiveDate, finish: NaiveDate) -> Self {
        Self {
            id,
            outline_level: 0,
            name: name.into(),
            start,
            finish,
            percent_complete: 0.0,
            predecessors_raw: String::new(),
            predecessors: Vec::new(),
            resource: String::new(),
            color_code: DEFAULT_COLOR_CODE.to_string(),
            notes: String::new(),
        }
    }

    /// Set the raw predecessor field and re-derive the parsed links.
    pub fn with_predecessors(mut self, raw: impl Into<String>) -> Self {
        self.predecessors_raw = raw.into();
        self.predecessors = crate::chart::predecessors::parse_links(&self.predecessors_raw);
        self
    }

    /// Predecessor ids in order of appearance, duplicates kept.
    pub fn predecessor_ids(&self) -> Vec<TaskId> {
        self.predecessors.iter().map(|link| link.id).collect()
    }

    /// Finish minus start in whole days. Negative for inverted rows.
    pub fn duration_days(&self) -> i64 {
        (self.finish - self.start).num_days()
    }
}
