//! Fixed-width console table.

use crate::models::{Scope, Standings};
use crate::report::wwcd_cell;
use std::fmt::Write;

/// Render standings as a console table. Zero wins show as blank.
pub fn render_text_table(standings: &Standings) -> String {
    let scope = standings.scope;
    if standings.is_empty() {
        return match scope {
            Scope::Group(g) => format!("No match data available for Group {}.\n", g),
            Scope::Combined => "No match data available for any group.\n".to_string(),
        };
    }
    let (width, heading) = match scope {
        Scope::Group(g) => (75, format!("GROUP {} POINTS TABLE", g)),
        Scope::Combined => (85, "COMBINED POINTS TABLE - ALL GROUPS".to_string()),
    };
    let rule = "=".repeat(width);
    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}\n  {heading}\n{rule}");
    let group_header = if scope.is_combined() {
        format!("{:<7} ", "GROUP")
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        "{:<6} {:<30} {}{:<6} {:<6} {:<6} {:<6}",
        "RANK", "TEAM NAME", group_header, "WWCD", "PLCT.", "KILLS", "TOTAL"
    );
    let _ = writeln!(out, "{}", "-".repeat(width));
    for row in &standings.rows {
        let group_cell = if scope.is_combined() {
            format!("{:<7} ", row.group.as_str())
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{:<6} {:<30} {}{:<6} {:<6} {:<6} {:<6}",
            row.rank,
            row.team,
            group_cell,
            wwcd_cell(row.wins, ""),
            row.points,
            row.kills,
            row.total()
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}
