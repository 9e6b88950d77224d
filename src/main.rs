mod config;
mod error;
mod files;
mod product;
mod ui;

use chrono::prelude::*;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::AppConfig;
use crate::files::file_manager::purge_root;
use crate::files::report::{read_run_report, save_run_report};
use crate::product::regenerate::Regenerator;
use crate::product::verify::verify;
use crate::ui::progress::create_progress_bar;

#[derive(Parser)]
#[clap(author, version, about = "Demo product file generator")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Config file name, extension optional
    #[clap(long, default_value = "config")]
    config: String,

    /// Remove the whole output directory before starting
    #[clap(short, long)]
    purge: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete old files and regenerate descriptions and title images
    Generate,

    /// Delete description and title files without regenerating
    Clean,

    /// Check the output directories against the expected file set
    Verify,
}

impl Commands {
    /// `--purge` only applies to commands that rewrite the tree
    fn allows_purge(&self) -> bool {
        matches!(self, Commands::Generate | Commands::Clean)
    }
}

fn setup_logger(log_file: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut builder = env_logger::Builder::new();

    if let Some(log_file) = log_file {
        let log_path = Path::new(log_file);

        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(log_path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}: {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S%z"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log::info!("Logger initialized");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let app_config = AppConfig::from_env_or_file(&cli.config)?;

    setup_logger(app_config.log_file())?;

    log::info!("Starting demo product file generator");

    let command = cli.command.unwrap_or(Commands::Generate);

    if cli.purge {
        if command.allows_purge() {
            purge_root(&app_config.output_root)?;
        } else {
            log::warn!("Ignoring --purge, verify does not modify the output directory");
        }
    }

    let result = match command {
        Commands::Generate => generate_phase(&app_config),
        Commands::Clean => clean_phase(&app_config),
        Commands::Verify => verify_phase(&app_config),
    };

    if let Err(e) = &result {
        log::error!("Run aborted: {}", e);
    }
    result
}

fn generate_phase(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    log::info!("Starting Generation Phase");

    let progress_bar = create_progress_bar("Regenerating");
    let report = Regenerator::new(config).regenerate(&progress_bar)?;

    progress_bar.finish_with_message(format!(
        "Generated {} descriptions and {} titles",
        report.descriptions_written, report.titles_copied
    ));

    if let Some(report_path) = config.report_path() {
        save_run_report(report_path, &report)?;
    }

    println!(
        "Generated {} description files and {} title files in {}",
        report.descriptions_written,
        report.titles_copied,
        config.output_root.display()
    );
    Ok(())
}

fn clean_phase(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    log::info!("Starting Clean Phase");

    let progress_bar = create_progress_bar("Cleaning");
    let regenerator = Regenerator::new(config);
    let descriptions = regenerator.clear_descriptions(&progress_bar)?;
    let titles = regenerator.clear_titles(&progress_bar)?;

    progress_bar.finish_and_clear();
    println!("Removed {} description entries and {} title entries", descriptions, titles);
    Ok(())
}

fn verify_phase(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    log::info!("Starting Verify Phase");

    if let Some(report_path) = config.report_path() {
        if Path::new(report_path).exists() {
            let last_run = read_run_report(report_path)?;
            println!("Last run finished at {}", last_run.finished_at);
        }
    }

    let report = verify(config)?;
    println!(
        "Found {} description files and {} title files",
        report.description_count, report.title_count
    );

    if report.is_ok() {
        println!("Output matches the expected file set");
        Ok(())
    } else {
        for problem in &report.problems {
            println!("  {}", problem);
        }
        Err(format!("Verification found {} problems", report.problems.len()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_generate_with_purge() {
        let cli = Cli::try_parse_from(["product-gen", "--purge"]).unwrap();
        assert!(cli.purge);
        let command = cli.command.unwrap_or(Commands::Generate);
        assert!(matches!(command, Commands::Generate));
        assert!(command.allows_purge());
    }

    #[test]
    fn test_verify_never_purges() {
        let cli = Cli::try_parse_from(["product-gen", "--purge", "verify"]).unwrap();
        let command = cli.command.unwrap();
        assert!(matches!(command, Commands::Verify));
        assert!(!command.allows_purge());
        assert!(Commands::Clean.allows_purge());
    }

    #[test]
    fn test_config_name_flag() {
        let cli = Cli::try_parse_from(["product-gen", "--config", "demo", "clean"]).unwrap();
        assert_eq!(cli.config, "demo");
        assert!(!cli.purge);
        assert!(matches!(cli.command, Some(Commands::Clean)));
    }
}
