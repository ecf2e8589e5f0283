// src/progress.rs

//! Defines a trait for reporting progress of long-running operations
//! (cloning, API downloads, reading file contents).
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "progress")]
use std::time::Duration;

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// # Examples
///
/// ```
/// use llmstxt::progress::ProgressReporter;
/// use std::sync::Mutex;
///
/// struct Recorder {
///     position: Mutex<u64>,
/// }
/// impl ProgressReporter for Recorder {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, pos: u64) {
///         *self.position.lock().unwrap() = pos;
///     }
///     fn set_message(&self, _msg: String) {}
///     fn finish_with_message(&self, _msg: String) {}
/// }
///
/// let reporter = Recorder { position: Mutex::new(0) };
/// reporter.set_position(3);
/// assert_eq!(*reporter.position.lock().unwrap(), 3);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the total number of items to process.
    fn set_length(&self, len: u64);
    /// Sets the current position in the process.
    fn set_position(&self, pos: u64);
    /// Sets a descriptive message for the current operation (e.g., "Cloning...").
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting with a final message.
    fn finish_with_message(&self, msg: String);
}

/// A `ProgressReporter` that does nothing.
///
/// Used when stderr is not a terminal and by the library when no reporter is supplied.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish_with_message(&self, _msg: String) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar. It ticks as a spinner until a length is set.
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        Self { bar: pb }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}
