//! Progress display across the halftoning jobs of one image

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static JOB_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed jobs with a single progress bar
pub struct ProgressManager {
    bar: ProgressBar,
    completed: Vec<String>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(JOB_STYLE.clone());
        Self {
            bar,
            completed: Vec::new(),
        }
    }

    /// Set the number of jobs that will run
    pub fn initialize(&mut self, job_count: usize) {
        self.completed.clear();
        self.bar.set_length(job_count as u64);
        self.bar.set_position(0);
    }

    /// Show the job now running
    pub fn start_job(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Mark the running job as done
    pub fn complete_job(&mut self, name: &str) {
        self.completed.push(name.to_string());
        self.bar.inc(1);
    }

    /// Names of the jobs completed so far
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    /// Number of jobs completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
