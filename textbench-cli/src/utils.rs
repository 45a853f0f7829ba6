//! Utility functions for the CLI.

use crate::commands::bench::FileReport;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner with standard styling.
pub fn create_spinner(message: String, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("[{elapsed_precise}] {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print one file's reports followed by the best codec.
pub fn print_file_report(file_report: &FileReport) {
    println!("File: {}", file_report.file);
    println!("{}", "-".repeat(60));

    for report in &file_report.reports {
        println!("{}", report);
        println!("Space savings: {:.1}%", report.space_savings());
        println!();
    }

    match &file_report.best {
        Some(best) => println!("Best compression algorithm: {}", best),
        None => println!("Best compression algorithm: none (no codec verified)"),
    }
    println!();
}
