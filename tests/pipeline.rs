//! End-to-end: CSV text through import and scene building.

use std::io::Write;

use chrono::NaiveDate;
use csv_gantt_viewer::chart::axis::date_to_coord;
use csv_gantt_viewer::chart::color::SKY_BLUE;
use csv_gantt_viewer::io::csv_import::import_csv;
use csv_gantt_viewer::{build_scene, ChartStyle, EmptyScheduleError};
use egui::Color32;
use pretty_assertions::assert_eq;

const HEADER: &str =
    "OutlineLevel,ID,Name,Start,Finish,PercentComplete,Predecessors,Resource,ColorCode,Notes";

fn write_csv(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    writeln!(file, "{HEADER}").unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn full_schedule_renders() {
    let file = write_csv(
        "1,1,Plan,2024-01-01,2024-01-05,100,,Ann,#FF5733,<p>Kickoff&nbsp;done</p>\n\
         2,3,Test,2024-01-15,2024-01-20,0,\"2FS;1SS\",Cy,nonsense,\n\
         2,2,Build,2024-01-06,2024-01-14,45.5,1FS,Bo,,Line1<br>Line2\n",
    );
    let report = import_csv(file.path()).unwrap();
    assert_eq!(report.skipped, 0);

    let scene = build_scene(&report.schedule, &ChartStyle::default()).unwrap();

    assert_eq!(scene.axes.dates.min, d(2023, 12, 31));
    assert_eq!(scene.axes.dates.max, d(2024, 1, 21));
    assert_eq!(scene.axes.categories, vec!["Plan", "Build", "Test"]);

    assert_eq!(scene.bars.len(), 3);
    let lo = scene.axes.dates.min_coord();
    let hi = scene.axes.dates.max_coord();
    for (slot, bar) in scene.bars.iter().enumerate() {
        assert_eq!(bar.slot, slot);
        assert!(bar.x0 >= lo && bar.x1 <= hi);
        assert!(((bar.y1 - bar.y0) - 0.8).abs() < 1e-9);
        assert!((((bar.y0 + bar.y1) / 2.0) - slot as f64).abs() < 1e-9);
    }
    assert_eq!(scene.bars[0].fill, Color32::from_rgb(0xFF, 0x57, 0x33));
    assert_eq!(scene.bars[1].fill, SKY_BLUE);
    assert_eq!(scene.bars[2].fill, SKY_BLUE);
    assert_eq!(scene.bars[1].label, "45.5%");
    assert_eq!(scene.bars[0].label, "100%");

    let links: Vec<(u32, u32)> = scene
        .connectors
        .iter()
        .map(|c| (c.from_task, c.to_task))
        .collect();
    assert_eq!(links, vec![(1, 2), (2, 3), (1, 3)]);
    assert!(scene.connectors.iter().all(|c| c.label == "FS"));
    assert_eq!(scene.connectors[0].x0, date_to_coord(d(2024, 1, 5)));
    assert_eq!(scene.connectors[0].x1, date_to_coord(d(2024, 1, 6)));

    let texts: Vec<&str> = scene.callouts.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["Kickoff done", "Line1\nLine2"]);
}

#[test]
fn header_only_file_reports_empty_schedule() {
    let file = write_csv("");
    let report = import_csv(file.path()).unwrap();
    assert!(report.schedule.is_empty());
    assert_eq!(
        build_scene(&report.schedule, &ChartStyle::default()),
        Err(EmptyScheduleError)
    );
}

#[test]
fn all_rows_invalid_reports_empty_schedule() {
    let file = write_csv("1,x,Bad,2024-01-01,2024-01-02,0,,,,\n1,2,Bad,never,2024-01-02,0,,,,\n");
    let report = import_csv(file.path()).unwrap();
    assert_eq!(report.skipped, 2);
    assert!(build_scene(&report.schedule, &ChartStyle::default()).is_err());
}

#[test]
fn dangling_dependency_draws_nothing() {
    let file = write_csv("1,1,Only,2024-02-01,2024-02-03,10,999,,,\n");
    let report = import_csv(file.path()).unwrap();
    assert_eq!(report.schedule.tasks()[0].predecessor_ids(), vec![999]);
    let scene = build_scene(&report.schedule, &ChartStyle::default()).unwrap();
    assert!(scene.connectors.is_empty());
    assert_eq!(scene.bars.len(), 1);
}

#[test]
fn inverted_dates_clamp_and_continue() {
    let file = write_csv(
        "1,1,Backwards,2024-03-10,2024-03-05,0,,,,\n\
         1,2,Normal,2024-03-01,2024-03-04,0,1,,,\n",
    );
    let report = import_csv(file.path()).unwrap();
    let scene = build_scene(&report.schedule, &ChartStyle::default()).unwrap();
    assert_eq!(scene.bars.len(), 2);
    assert_eq!(scene.bars[0].width(), 0.0);
    assert_eq!(scene.bars[1].width(), 3.0);
    assert_eq!(scene.connectors.len(), 1);
}

#[test]
fn rebuilding_is_deterministic() {
    let file = write_csv(
        "0,5,E,2024-01-01,2024-01-02,0,,,,\n\
         0,2,B,2024-01-01,2024-01-02,0,5,,,\n\
         1,1,A,2024-01-01,2024-01-02,0,2,,,\n",
    );
    let report = import_csv(file.path()).unwrap();
    let first = build_scene(&report.schedule, &ChartStyle::default()).unwrap();
    let second = build_scene(&report.schedule, &ChartStyle::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.axes.categories, vec!["B", "E", "A"]);
}
