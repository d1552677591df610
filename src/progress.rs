//! Progress bar display for installations

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for a batch install
pub struct ProgressDisplay {
    item_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total item count
    pub fn new(total_items: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let item_pb = ProgressBar::new(total_items);
        item_pb.set_style(style);

        Self { item_pb }
    }

    /// Update to show the item currently being installed
    pub fn update_item(&self, name: &str, current: usize, total: usize) {
        self.item_pb
            .set_message(format!("({}/{}) {}", current, total, name));
    }

    /// Set absolute item progress
    pub fn set_position(&self, position: u64) {
        self.item_pb.set_position(position);
    }

    /// Finish and clear the bar so the summary prints on a clean line
    pub fn finish(&self) {
        self.item_pb.finish_and_clear();
    }
}
