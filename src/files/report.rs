use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Record of a single regeneration run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReport {
    pub root: PathBuf,
    pub source_image: PathBuf,
    pub descriptions_removed: usize,
    pub titles_removed: usize,
    pub descriptions_written: usize,
    pub titles_copied: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Save a run report to a JSON file
pub fn save_run_report<P: AsRef<Path>>(file_path: P, report: &RunReport) -> Result<(), Box<dyn Error>> {
    let file_path = file_path.as_ref();
    let json = serde_json::to_string_pretty(report)?;

    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(file_path)?;
    file.write_all(json.as_bytes())?;

    log::info!("Saved run report to {}", file_path.display());
    Ok(())
}

/// Read a run report from a file
pub fn read_run_report<P: AsRef<Path>>(file_path: P) -> Result<RunReport, Box<dyn Error>> {
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);
    let report = serde_json::from_reader(reader)?;

    Ok(report)
}
