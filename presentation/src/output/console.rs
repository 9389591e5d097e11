//! Console output formatter for agenda listings and tallies

use crate::output::formatter::OutputFormatter;
use chrono::{DateTime, Local, TimeZone, Utc};
use colored::Colorize;
use votacao_domain::{AgendaId, AgendaItem, SessionStatus, Tally};

const BAR_WIDTH: usize = 30;
const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Formats agenda items and tallies for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the agenda as an aligned table
    pub fn format_agenda(items: &[AgendaItem]) -> String {
        if items.is_empty() {
            return format!("{}\n", "No agenda items.".dimmed());
        }

        let rows: Vec<[String; 4]> = items
            .iter()
            .map(|item| {
                [
                    item.id.to_string(),
                    item.title.clone(),
                    format_date(&item.created_at, &Local),
                    item.effective_status().display_name().to_string(),
                ]
            })
            .collect();

        let headers = ["ID", "TITLE", "CREATED", "STATUS"];
        let mut widths = headers.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        let header_line = headers
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{:<w$}", h, w = w))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(&format!("{}\n", header_line.cyan().bold()));
        output.push_str(&format!(
            "{}\n",
            "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1))
        ));

        for (row, item) in rows.iter().zip(items) {
            let [id, title, created, _] = row;
            let status = Self::status_label(item.effective_status(), widths[3]);
            output.push_str(&format!(
                "{:<iw$}  {:<tw$}  {}  {}\n",
                id,
                title,
                format!("{:<cw$}", created, cw = widths[2]).dimmed(),
                status,
                iw = widths[0],
                tw = widths[1],
            ));
        }

        output
    }

    /// Format one item with its description
    pub fn format_item(item: &AgendaItem) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            format!("[{}]", item.id).yellow().bold(),
            item.title.bold()
        ));
        if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
            output.push_str(&format!("{}\n", Self::indent(description, "  ")));
        }
        output.push_str(&format!(
            "  {} {}   {} {}\n",
            "Created:".dimmed(),
            format_date(&item.created_at, &Local),
            "Status:".dimmed(),
            Self::status_label(item.effective_status(), 0)
        ));
        output
    }

    /// Format a tally as a card with proportional bars
    pub fn format_tally(id: &AgendaId, title: Option<&str>, tally: &Tally) -> String {
        let mut output = String::new();

        let heading = match title {
            Some(title) => format!("Result: {} ({})", title, id),
            None => format!("Result: {}", id),
        };
        output.push_str(&Self::header(&heading));
        output.push('\n');

        output.push_str(&Self::bar_line("YES", tally.yes, tally.total));
        output.push_str(&Self::bar_line("NO", tally.no, tally.total));
        output.push_str(&format!(
            "\n{} {}   {} {}\n",
            "Total:".cyan().bold(),
            tally.total,
            "Session:".cyan().bold(),
            Self::status_label(tally.status, 0)
        ));

        output.push_str(&Self::footer());
        output
    }

    fn bar_line(label: &str, count: u64, total: u64) -> String {
        let ratio = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };
        let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let bar = format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled));
        let bar = if label == "YES" { bar.green() } else { bar.red() };
        format!(
            "  {} {} {:>5} ({:>3.0}%)\n",
            format!("{:<4}", label).bold(),
            bar,
            count,
            ratio * 100.0
        )
    }

    fn status_label(status: SessionStatus, width: usize) -> String {
        let padded = format!("{:<w$}", status.display_name(), w = width);
        match status {
            SessionStatus::Open => padded.green().bold().to_string(),
            SessionStatus::Closed => padded.red().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!(
            "{}\n{}\n{}",
            line.cyan(),
            format!("{:^50}", title).bold(),
            line.cyan()
        )
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(50).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a timestamp as `DD/MM/YYYY HH:mm` in the given zone
pub fn format_date<Tz: TimeZone>(at: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(zone).format(DATE_FORMAT).to_string()
}

impl OutputFormatter for ConsoleFormatter {
    fn format_agenda(&self, items: &[AgendaItem]) -> String {
        Self::format_agenda(items)
    }

    fn format_item(&self, item: &AgendaItem) -> String {
        Self::format_item(item)
    }

    fn format_tally(&self, id: &AgendaId, title: Option<&str>, tally: &Tally) -> String {
        Self::format_tally(id, title, tally)
    }
}
