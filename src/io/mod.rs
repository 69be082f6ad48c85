pub mod csv_import;
pub mod scene_export;
