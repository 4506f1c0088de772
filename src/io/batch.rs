//! Per-batch bookkeeping shared by the compress and decompress drivers.

use std::time::Instant;

use crate::container::ContainerError;
use crate::displaylevel;

/// Outcome of a multi-file run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files handled successfully.
    pub processed: usize,
    /// Files whose pipeline returned an error.
    pub failed: usize,
    /// Files not attempted because no output name could be derived.
    pub skipped: usize,
    /// Bytes produced across all successful files.
    pub total_bytes: u64,
    first_error_code: Option<i32>,
}

impl BatchSummary {
    pub fn record_success(&mut self, bytes: u64) {
        self.processed += 1;
        self.total_bytes += bytes;
    }

    pub fn record_failure(&mut self, err: &ContainerError) {
        self.failed += 1;
        self.first_error_code.get_or_insert(err.exit_code());
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Folds a later batch into this one, keeping the earliest error code.
    pub fn merge(&mut self, other: BatchSummary) {
        self.processed += other.processed;
        self.failed += other.failed;
        self.skipped += other.skipped;
        self.total_bytes += other.total_bytes;
        if self.first_error_code.is_none() {
            self.first_error_code = other.first_error_code;
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }

    /// Exit status for the batch: the code of the first failing file, 1 when
    /// files were only skipped, 0 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self.first_error_code {
            Some(code) => code,
            None if self.skipped > 0 => 1,
            None => 0,
        }
    }
}

/// Reports a per-file failure on stderr at level 1.
pub fn report_failure(display_level: u32, src: &str, err: &ContainerError) {
    match err {
        // I/O errors already name the path they concern.
        ContainerError::Io { .. } => displaylevel!(display_level, 1, "Error : {}\n", err),
        _ => displaylevel!(display_level, 1, "Error : {}: {}\n", src, err),
    }
}

/// Prints the level-3 throughput line at the end of a batch.
pub fn final_time_display(display_level: u32, start: Instant, size: u64) {
    let seconds = start.elapsed().as_secs_f64().max(1e-9);
    displaylevel!(
        display_level,
        3,
        "Done in {:.2} s ==> {:.2} MiB/s\n",
        seconds,
        size as f64 / seconds / 1024.0 / 1024.0
    );
}
