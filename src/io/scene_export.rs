use std::path::Path;

use crate::chart::ChartScene;
use crate::error::ExportError;

/// Write a chart scene as pretty JSON. Returns the number of bars written.
pub fn export_scene(scene: &ChartScene, path: &Path) -> Result<usize, ExportError> {
    let json = serde_json::to_string_pretty(scene)?;
    std::fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bars = scene.bars.len(), "Exported chart scene");
    Ok(scene.bars.len())
}

/// Read a scene previously written by [`export_scene`].
pub fn load_scene(path: &Path) -> Result<ChartScene, ExportError> {
    let json = std::fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{build_scene, ChartStyle};
    use crate::model::{Schedule, TaskRecord};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn exported_scene_reads_back() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 9, d).unwrap();
        let mut b = TaskRecord::new(2, "b", day(4), day(8)).with_predecessors("1");
        b.notes = "ship<br>it".into();
        b.color_code = "#112233".into();
        let schedule = Schedule::new("s", vec![TaskRecord::new(1, "a", day(1), day(3)), b]);
        let scene = build_scene(&schedule, &ChartStyle::default()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        assert_eq!(export_scene(&scene, &path).unwrap(), 2);

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"fill\": \"#112233\""));
        let loaded = load_scene(&path).unwrap();
        assert_eq!(loaded.axes, scene.axes);
        assert_eq!(loaded.bars[1].fill, scene.bars[1].fill);
        assert_eq!(loaded.bars[1].x0, scene.bars[1].x0);
        assert_eq!(loaded.connectors.len(), 1);
        assert_eq!(loaded.callouts[0].text, "ship\nit");
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scene.json");
        let scene = build_scene(
            &Schedule::new(
                "s",
                vec![TaskRecord::new(
                    1,
                    "a",
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                )],
            ),
            &ChartStyle::default(),
        )
        .unwrap();
        assert!(matches!(export_scene(&scene, &path), Err(ExportError::Write { .. })));
    }
}
