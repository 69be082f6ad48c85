use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::chart::predecessors;
use crate::error::ImportError;
use crate::model::task::DEFAULT_COLOR_CODE;
use crate::model::{Schedule, TaskId, TaskRecord};

/// Outcome of reading a CSV schedule.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub schedule: Schedule,
    /// Data rows dropped because a required cell was unusable.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    OutlineLevel,
    Id,
    Name,
    Start,
    Finish,
    PercentComplete,
    Predecessors,
    Resource,
    ColorCode,
    Notes,
}

/// Try parsing a date string with several common formats. A time part,
/// if present, is discarded.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%d/%m/%Y %H:%M",
        "%m/%d/%Y %H:%M",
        "%m/%d/%Y %I:%M:%S %p",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Parse a completion value such as `"40"`, `"12.5"` or `"40%"`.
fn parse_percent(s: &str) -> Option<f64> {
    s.trim().trim_end_matches('%').trim().parse::<f64>().ok()
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if commas >= semicolons && commas >= tabs {
        b','
    } else if semicolons >= tabs {
        b';'
    } else {
        b'\t'
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim()
        .trim_start_matches('\u{feff}')
        .to_lowercase()
        .replace([' ', '-', '_'], "")
}

fn header_to_col(normalized: &str) -> Option<Column> {
    match normalized {
        "outlinelevel" | "level" | "outline" | "indent" => Some(Column::OutlineLevel),

        "id" | "taskid" | "uniqueid" => Some(Column::Id),

        "name" | "task" | "taskname" | "label" | "title" => Some(Column::Name),

        "start" | "startdate" | "begin" => Some(Column::Start),

        "finish" | "finishdate" | "end" | "enddate" => Some(Column::Finish),

        "percentcomplete" | "%complete" | "complete" | "progress" => {
            Some(Column::PercentComplete)
        }

        "predecessors" | "predecessor" | "dependencies" | "dependson" => {
            Some(Column::Predecessors)
        }

        "resource" | "resources" | "resourcenames" | "assignee" => Some(Column::Resource),

        "colorcode" | "color" | "colour" => Some(Column::ColorCode),

        "notes" | "note" | "comments" | "description" => Some(Column::Notes),

        _ => None,
    }
}

/// Read a schedule from a CSV file.
///
/// The schedule is named after the file stem.
pub fn import_csv(path: &Path) -> Result<ImportReport, ImportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Imported Schedule");
    parse_csv(name, &content)
}

/// Read a schedule from CSV text.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches headers
/// flexibly. ID, Name, Start and Finish columns are required; rows where
/// any of those cannot be read are skipped. Other cells default when
/// missing or malformed.
pub fn parse_csv(name: &str, content: &str) -> Result<ImportReport, ImportError> {
    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let col_map: Vec<Option<Column>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    let has = |col: Column| col_map.contains(&Some(col));
    if !(has(Column::Id) && has(Column::Name) && has(Column::Start) && has(Column::Finish)) {
        return Err(ImportError::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut tasks: Vec<TaskRecord> = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let row = i + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping CSV row {}: {}", row, e);
                skipped += 1;
                continue;
            }
        };

        let cell = |col: Column| {
            col_map
                .iter()
                .position(|c| *c == Some(col))
                .and_then(|idx| record.get(idx))
        };

        let id = match cell(Column::Id).and_then(|s| s.parse::<TaskId>().ok()) {
            Some(id) => id,
            None => {
                tracing::warn!("Skipping row {}: invalid ID '{}'", row, cell(Column::Id).unwrap_or(""));
                skipped += 1;
                continue;
            }
        };

        let start = match cell(Column::Start).and_then(parse_date) {
            Some(d) => d,
            None => {
                tracing::warn!(
                    "Skipping row {}: invalid start date '{}'",
                    row,
                    cell(Column::Start).unwrap_or("")
                );
                skipped += 1;
                continue;
            }
        };

        let finish = match cell(Column::Finish).and_then(parse_date) {
            Some(d) => d,
            None => {
                tracing::warn!(
                    "Skipping row {}: invalid finish date '{}'",
                    row,
                    cell(Column::Finish).unwrap_or("")
                );
                skipped += 1;
                continue;
            }
        };

        let outline_level = match cell(Column::OutlineLevel).filter(|s| !s.is_empty()) {
            Some(s) => s.parse::<u32>().unwrap_or_else(|_| {
                tracing::warn!("Row {}: invalid outline level '{}', using 0", row, s);
                0
            }),
            None => 0,
        };

        let percent_complete = match cell(Column::PercentComplete).filter(|s| !s.is_empty()) {
            Some(s) => parse_percent(s).unwrap_or_else(|| {
                tracing::warn!("Row {}: invalid percent complete '{}', using 0", row, s);
                0.0
            }),
            None => 0.0,
        };

        let predecessors_raw = cell(Column::Predecessors).unwrap_or_default().to_string();
        let predecessors = predecessors::parse_links(&predecessors_raw);

        tasks.push(TaskRecord {
            id,
            outline_level,
            name: cell(Column::Name).unwrap_or_default().to_string(),
            start,
            finish,
            percent_complete,
            predecessors_raw,
            predecessors,
            resource: cell(Column::Resource).unwrap_or_default().to_string(),
            color_code: cell(Column::ColorCode)
                .unwrap_or(DEFAULT_COLOR_CODE)
                .to_string(),
            notes: cell(Column::Notes).unwrap_or_default().to_string(),
        });
    }

    tracing::debug!(tasks = tasks.len(), skipped, "Parsed CSV schedule '{}'", name);

    Ok(ImportReport {
        schedule: Schedule::new(name, tasks),
        skipped,
    })
}
