//! Output formatter trait

use crate::output::console::ConsoleFormatter;
use votacao_domain::{AgendaId, AgendaItem, OutputFormat, Tally};

/// Trait for formatting agenda listings and tallies
pub trait OutputFormatter: Send + Sync {
    /// Format the agenda board
    fn format_agenda(&self, items: &[AgendaItem]) -> String;

    /// Format a single item (e.g. after creation)
    fn format_item(&self, item: &AgendaItem) -> String;

    /// Format a tally snapshot for `id`; `title` is shown when known
    fn format_tally(&self, id: &AgendaId, title: Option<&str>, tally: &Tally) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Table => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Machine-readable output, using the API's own field names
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_agenda(&self, items: &[AgendaItem]) -> String {
        Self::to_json(items)
    }

    fn format_item(&self, item: &AgendaItem) -> String {
        Self::to_json(item)
    }

    fn format_tally(&self, id: &AgendaId, _title: Option<&str>, tally: &Tally) -> String {
        Self::to_json(&serde_json::json!({
            "id": id,
            "resultado": tally,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use votacao_domain::SessionStatus;

    #[test]
    fn test_json_agenda_includes_status() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let items = vec![AgendaItem::new("p1", "Budget", created).with_status(SessionStatus::Open)];

        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_agenda(&items)).unwrap();
        assert_eq!(json[0]["id"], "p1");
        assert_eq!(json[0]["titulo"], "Budget");
        assert_eq!(json[0]["sessaoStatus"], "ABERTA");
    }

    #[test]
    fn test_json_tally() {
        let tally = Tally::new(2, 1, SessionStatus::Closed);
        let json: serde_json::Value = serde_json::from_str(
            &JsonFormatter.format_tally(&AgendaId::from("p1"), None, &tally),
        )
        .unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["resultado"]["sim"], 2);
        assert_eq!(json["resultado"]["total"], 3);
        assert_eq!(json["resultado"]["status"], "ENCERRADA");
    }
}
