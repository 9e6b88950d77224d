use chrono::Utc;
use indicatif::ProgressBar;
use std::fs;

use crate::config::AppConfig;
use crate::error::{RegenError, Result};
use crate::files::cleanup::clear_directory;
use crate::files::file_manager::ensure_dir;
use crate::files::report::RunReport;
use crate::product::template::{description_file_name, render_description, title_file_name, PRODUCT_COUNT};
use crate::ui;

/// Deletes and repopulates the description and title directories
pub struct Regenerator<'a> {
    config: &'a AppConfig,
}

impl<'a> Regenerator<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    pub fn clear_descriptions(&self, progress_bar: &ProgressBar) -> Result<usize> {
        ui::progress::print_with_progress(progress_bar, "delete all description files");
        clear_directory(&self.config.description_dir())
    }

    pub fn clear_titles(&self, progress_bar: &ProgressBar) -> Result<usize> {
        ui::progress::print_with_progress(progress_bar, "delete all title files");
        clear_directory(&self.config.title_dir())
    }

    /// Write `1.txt`..`50.txt`, overwriting any file of the same name
    pub fn write_descriptions(&self, progress_bar: &ProgressBar) -> Result<usize> {
        let dir = self.config.description_dir();
        ensure_dir(&dir)?;

        ui::progress::print_with_progress(progress_bar, "generate description files");
        ui::progress::start_phase(progress_bar, "Writing descriptions", PRODUCT_COUNT as u64);

        for index in 1..=PRODUCT_COUNT {
            let path = dir.join(description_file_name(index));
            fs::write(&path, render_description(index)).map_err(|e| RegenError::io(&path, e))?;
            progress_bar.inc(1);
        }

        log::info!("Wrote {} description files to {}", PRODUCT_COUNT, dir.display());
        Ok(PRODUCT_COUNT)
    }

    /// Copy the source image to `1.png`..`50.png`, overwriting existing copies
    pub fn copy_titles(&self, progress_bar: &ProgressBar) -> Result<usize> {
        let dir = self.config.title_dir();
        ensure_dir(&dir)?;

        ui::progress::print_with_progress(progress_bar, "generate title files");
        ui::progress::start_phase(progress_bar, "Copying title images", PRODUCT_COUNT as u64);

        let source = &self.config.source_image;
        for index in 1..=PRODUCT_COUNT {
            let path = dir.join(title_file_name(index));
            progress_bar.set_message(format!("Copying {}", path.display()));

            // The source is not checked up front; a missing image fails the first copy
            fs::copy(source, &path).map_err(|e| {
                let culprit = if source.is_file() { &path } else { source };
                RegenError::io(culprit, e)
            })?;
            progress_bar.inc(1);
        }

        log::info!(
            "Copied {} to {} title files in {}",
            source.display(),
            PRODUCT_COUNT,
            dir.display()
        );
        Ok(PRODUCT_COUNT)
    }

    /// Run every phase in order. The first failure aborts the run and
    /// leaves whatever the earlier phases already did on disk.
    pub fn regenerate(&self, progress_bar: &ProgressBar) -> Result<RunReport> {
        let started_at = Utc::now();
        log::info!("Regenerating demo product files under {}", self.config.output_root.display());

        let descriptions_removed = self.clear_descriptions(progress_bar)?;
        let titles_removed = self.clear_titles(progress_bar)?;

        ensure_dir(&self.config.output_root)?;
        let descriptions_written = self.write_descriptions(progress_bar)?;
        let titles_copied = self.copy_titles(progress_bar)?;

        Ok(RunReport {
            root: self.config.output_root.clone(),
            source_image: self.config.source_image.clone(),
            descriptions_removed,
            titles_removed,
            descriptions_written,
            titles_copied,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
