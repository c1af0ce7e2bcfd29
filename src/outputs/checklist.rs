//! The field update checklist shown after an auto-generator run.

use crate::models::{ChecklistEntry, EnrichedSignals, FaqSource};
use std::fmt::Write;

/// Checklist entries describing the derived signals, appended after the
/// per-field extraction entries.
pub fn derived_entries(signals: &EnrichedSignals) -> Vec<ChecklistEntry> {
    let about = signals
        .about
        .iter()
        .map(|topic| topic.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let faq = match signals.faq_source {
        FaqSource::Synthesized => "Auto-created based on category and title".to_string(),
        FaqSource::Scraped => format!("{} detected from page", signals.faq.len()),
    };

    vec![
        ChecklistEntry::derived("Keyword Set", "Auto-updated from content + category"),
        ChecklistEntry::derived("About", about),
        ChecklistEntry::derived("Audience", signals.audience.join(", ")),
        ChecklistEntry::derived("FAQ", faq),
    ]
}

/// Render the checklist as a titled block of lines.
pub fn render(entries: &[ChecklistEntry]) -> String {
    let mut out = String::from("Field Update Checklist\n");
    for entry in entries {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {}", entry);
    }
    out
}
