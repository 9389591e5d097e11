//! Spinner shown while a request is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// A single-line spinner; hidden entirely when disabled
pub struct LoadingSpinner {
    bar: Option<ProgressBar>,
}

impl LoadingSpinner {
    /// Start spinning with `message`; `enabled = false` gives a no-op spinner
    pub fn start(message: impl Into<String>, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Remove the spinner line
    pub fn finish(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    /// Spin while `future` runs
    pub async fn wrap<F: Future>(message: impl Into<String>, enabled: bool, future: F) -> F::Output {
        let spinner = Self::start(message, enabled);
        let output = future.await;
        spinner.finish();
        output
    }
}

impl Drop for LoadingSpinner {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
