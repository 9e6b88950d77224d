use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::config::AppConfig;
use crate::error::{RegenError, Result};
use crate::files::file_manager::{count_files, file_exists};
use crate::product::template::{description_file_name, render_description, title_file_name, PRODUCT_COUNT};

#[derive(Debug, Default)]
pub struct VerifyReport {
    pub description_count: usize,
    pub title_count: usize,
    pub problems: Vec<String>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

fn entry_names(dir: &Path) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(dir).map_err(|e| RegenError::io(dir, e))? {
        let entry = entry.map_err(|e| RegenError::io(dir, e))?;
        names.insert(entry.file_name().to_string_lossy().to_string());
    }
    Ok(names)
}

/// Report names in `dir` that are not part of the expected set
fn check_extra_entries(dir: &Path, expected: &BTreeSet<String>, problems: &mut Vec<String>) -> Result<()> {
    for name in entry_names(dir)?.difference(expected) {
        problems.push(format!("Unexpected entry {}", dir.join(name).display()));
    }
    Ok(())
}

/// Check the output tree against the expected 50 descriptions and 50 title copies.
/// Missing directories are reported as problems rather than errors.
pub fn verify(config: &AppConfig) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();
    let description_dir = config.description_dir();
    let title_dir = config.title_dir();

    if description_dir.is_dir() {
        report.description_count = count_files(&description_dir, "txt")?;
        let expected: BTreeSet<String> = (1..=PRODUCT_COUNT).map(description_file_name).collect();
        check_extra_entries(&description_dir, &expected, &mut report.problems)?;

        for index in 1..=PRODUCT_COUNT {
            let path = description_dir.join(description_file_name(index));
            if !file_exists(&path) {
                report.problems.push(format!("Missing {}", path.display()));
                continue;
            }
            let text = fs::read_to_string(&path).map_err(|e| RegenError::io(&path, e))?;
            if text != render_description(index) {
                report.problems.push(format!("Unexpected content in {}", path.display()));
            }
        }
    } else {
        report.problems.push(format!("Missing directory {}", description_dir.display()));
    }

    if title_dir.is_dir() {
        report.title_count = count_files(&title_dir, "png")?;
        let expected: BTreeSet<String> = (1..=PRODUCT_COUNT).map(title_file_name).collect();
        check_extra_entries(&title_dir, &expected, &mut report.problems)?;

        // Without the source, copies can only be checked for presence
        let source = &config.source_image;
        let source_bytes = match fs::read(source) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                report.problems.push(format!("Cannot read source image {}: {}", source.display(), e));
                None
            }
        };

        for index in 1..=PRODUCT_COUNT {
            let path = title_dir.join(title_file_name(index));
            if !file_exists(&path) {
                report.problems.push(format!("Missing {}", path.display()));
                continue;
            }
            let Some(source_bytes) = &source_bytes else {
                continue;
            };
            let bytes = fs::read(&path).map_err(|e| RegenError::io(&path, e))?;
            if &bytes != source_bytes {
                report.problems.push(format!("{} differs from {}", path.display(), source.display()));
            }
        }
    } else {
        report.problems.push(format!("Missing directory {}", title_dir.display()));
    }

    for problem in &report.problems {
        log::warn!("{}", problem);
    }
    log::info!(
        "Verified {}: {} descriptions, {} titles, {} problems",
        config.output_root.display(),
        report.description_count,
        report.title_count,
        report.problems.len()
    );

    Ok(report)
}
