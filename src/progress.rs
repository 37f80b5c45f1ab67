//! Progress bar display for catalog runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for an orchestrator run
pub struct ProgressDisplay {
    task_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total task count
    pub fn new(total_tasks: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let task_pb = ProgressBar::new(total_tasks);
        task_pb.set_style(style);

        Self { task_pb }
    }

    /// Show the task currently being processed
    pub fn update_task(&self, task_name: &str) {
        self.task_pb.set_message(task_name.to_string());
    }

    /// Increment task progress
    pub fn inc_task(&self) {
        self.task_pb.inc(1);
    }

    /// Finish and clear the bar, leaving only the printed lines
    pub fn finish(&self) {
        self.task_pb.finish_and_clear();
    }
}
