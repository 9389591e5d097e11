//! Output formatting and notifications

pub mod console;
pub mod formatter;
pub mod live;
pub mod toast;

pub use console::ConsoleFormatter;
pub use formatter::{JsonFormatter, OutputFormatter, formatter_for};
pub use live::follow_result;
pub use toast::ConsoleNotifier;
