use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar shared by every phase of a run
pub fn create_progress_bar(message: &str) -> ProgressBar {
    let progress_bar = ProgressBar::new(0);

    if let Ok(style) = ProgressStyle::default_bar().template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})") {
        progress_bar.set_style(style.progress_chars("=> "));
    }

    progress_bar.set_message(message.to_string());

    progress_bar
}

/// Point the bar at a new phase of `length` steps
pub fn start_phase(progress_bar: &ProgressBar, message: &str, length: u64) {
    progress_bar.set_message(message.to_string());
    progress_bar.set_length(length);
    progress_bar.set_position(0);
}

/// Print a phase line above the bar instead of through it
pub fn print_with_progress(progress_bar: &ProgressBar, message: &str) {
    progress_bar.suspend(|| {
        println!("{}", message);
    });
}
