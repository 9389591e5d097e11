//! Console notifications ("toasts")

use colored::Colorize;
use std::io::Write;
use tracing::debug;
use votacao_application::{Notice, Notifier, Severity};

/// Prints notices to stderr, one line each, colored by severity
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Only errors are printed when quiet
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Render a notice without printing it
    pub fn render(notice: &Notice) -> String {
        let (icon, summary) = match notice.severity {
            Severity::Success => ("v".green().bold(), notice.summary.green().bold()),
            Severity::Info => ("i".cyan().bold(), notice.summary.cyan().bold()),
            Severity::Warn => ("!".yellow().bold(), notice.summary.yellow().bold()),
            Severity::Error => ("x".red().bold(), notice.summary.red().bold()),
        };

        match notice.detail.as_deref() {
            Some(detail) => format!("{} {}: {}", icon, summary, detail),
            None => format!("{} {}", icon, summary),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        debug!("notice {:?}: {}", notice.severity, notice.summary);
        if self.quiet && notice.severity != Severity::Error {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", Self::render(&notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_detail() {
        let notice = Notice::warn("Attention").with_detail("Session is closed");
        let text = ConsoleNotifier::render(&notice);
        assert!(text.contains("Attention"));
        assert!(text.ends_with(": Session is closed"));
    }

    #[test]
    fn test_render_summary_only() {
        let text = ConsoleNotifier::render(&Notice::success("Vote recorded"));
        assert!(text.contains("Vote recorded"));
        assert!(!text.contains(':'));
    }
}
