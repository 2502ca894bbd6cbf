//! Rendering of standings: printable document and console table.
//! The web pages are static files under `templates/` that read the JSON API.

mod document;
mod text;

pub use document::{document_filename, render_document};
pub use text::render_text_table;

use crate::models::Scope;
use chrono::NaiveDate;

/// Event name shown in titles and footers.
pub const EVENT_NAME: &str = "AAROHAN BGMI ELIMS";

/// Document title for a scope.
pub fn title(scope: Scope) -> String {
    match scope {
        Scope::Group(g) => format!("{} - GROUP {}", EVENT_NAME, g),
        Scope::Combined => format!("{} - OVERALL STANDINGS", EVENT_NAME),
    }
}

/// Subtitle with match count and generation date, e.g.
/// `Points Table | 3 Matches | October 19, 2026`.
pub fn subtitle(scope: Scope, match_count: usize, date: NaiveDate) -> String {
    let label = match scope {
        Scope::Group(_) => "Points Table",
        Scope::Combined => "All Groups",
    };
    format!("{} | {} Matches | {}", label, match_count, date.format("%B %d, %Y"))
}

pub fn footer() -> String {
    format!("{} - Official Tournament Points Table", EVENT_NAME)
}

/// Column headers; GROUP only appears in combined standings.
pub fn columns(scope: Scope) -> Vec<&'static str> {
    let mut cols = vec!["RANK", "TEAM NAME"];
    if scope.is_combined() {
        cols.push("GROUP");
    }
    cols.extend(["WWCD", "PLCT.", "KILLS", "TOTAL"]);
    cols
}

/// WWCD cell text: the count, or `placeholder` when the team never won.
pub fn wwcd_cell(wins: u64, placeholder: &str) -> String {
    if wins > 0 {
        wins.to_string()
    } else {
        placeholder.to_string()
    }
}

/// Escape text for HTML element content and attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
