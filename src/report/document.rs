//! Printable standings document (self-contained HTML, A4 portrait print layout).

use crate::models::{ScoreError, Scope, Standings};
use crate::report::{columns, escape_html, footer, subtitle, title, wwcd_cell};
use chrono::NaiveDate;
use std::fmt::Write;

const DOCUMENT_STYLE: &str = r#"
@page { size: A4 portrait; margin: 0.5in; }
body { background: #0d1117; color: #e6edf3; font-family: Helvetica, Arial, sans-serif; margin: 0; }
.sheet { max-width: 7.3in; margin: 0 auto; padding: 0.25in 0; }
h1 { color: #58a6ff; font-size: 22pt; text-align: center; margin: 0 0 8pt; }
.subtitle { color: #8b949e; font-size: 11pt; text-align: center; margin: 0 0 20pt; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 0.5pt solid #30363d; text-align: center; }
th { background: #1c2128; color: #58a6ff; font-size: 11pt; padding: 12pt 4pt; border-bottom: 2pt solid #58a6ff; }
td { background: #161b22; font-size: 10pt; padding: 10pt 4pt; }
td.team { text-align: left; padding-left: 12pt; }
td.total { font-weight: bold; color: #58a6ff; }
tr.top-1 td { background: #1c3d5a; }
tr.top-2 td { background: #1a3851; }
tr.top-3 td { background: #183349; }
.footer { color: #8b949e; font-size: 9pt; text-align: center; margin-top: 0.25in; }
@media print { body { -webkit-print-color-adjust: exact; print-color-adjust: exact; } }
"#;

/// Download name of the document for a scope.
pub fn document_filename(scope: Scope) -> String {
    match scope {
        Scope::Group(g) => format!("AAROHAN_BGMI_Group_{}_Leaderboard.html", g),
        Scope::Combined => "AAROHAN_BGMI_Combined_Leaderboard.html".to_string(),
    }
}

/// Render the printable document. Fails with `NoData` when nothing has been recorded.
pub fn render_document(standings: &Standings, date: NaiveDate) -> Result<String, ScoreError> {
    if standings.is_empty() {
        return Err(ScoreError::NoData(standings.scope));
    }
    let title = escape_html(&title(standings.scope));
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{DOCUMENT_STYLE}</style>\n</head>\n<body>\n<div class=\"sheet\">\n<h1>{title}</h1>\n<p class=\"subtitle\">{}</p>\n",
        escape_html(&subtitle(standings.scope, standings.match_count, date)),
    );
    html.push_str(&standings_table(standings, "-"));
    let _ = write!(
        html,
        "<p class=\"footer\">{}</p>\n</div>\n</body>\n</html>\n",
        escape_html(&footer())
    );
    Ok(html)
}

/// The standings `<table>` of the printable document.
fn standings_table(standings: &Standings, wwcd_placeholder: &str) -> String {
    let mut html = String::from("<table class=\"standings\">\n<thead><tr>");
    for col in columns(standings.scope) {
        let _ = write!(html, "<th>{}</th>", col);
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &standings.rows {
        let class = match row.rank {
            1..=3 => format!(" class=\"top-{}\"", row.rank),
            _ => String::new(),
        };
        let _ = write!(
            html,
            "<tr{}><td>{}</td><td class=\"team\">{}</td>",
            class,
            row.rank,
            escape_html(&row.team)
        );
        if standings.scope.is_combined() {
            let _ = write!(html, "<td>{}</td>", row.group);
        }
        let _ = writeln!(
            html,
            "<td>{}</td><td>{}</td><td>{}</td><td class=\"total\">{}</td></tr>",
            escape_html(&wwcd_cell(row.wins, wwcd_placeholder)),
            row.points,
            row.kills,
            row.total()
        );
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Group, LeaderboardRow};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn standings(scope: Scope) -> Standings {
        Standings {
            scope,
            match_count: 2,
            rows: vec![
                LeaderboardRow {
                    rank: 1,
                    team: "X & Co".into(),
                    group: Group::A,
                    wins: 1,
                    points: 10,
                    kills: 5,
                },
                LeaderboardRow {
                    rank: 2,
                    team: "Y".into(),
                    group: Group::B,
                    wins: 0,
                    points: 6,
                    kills: 3,
                },
            ],
        }
    }

    #[test]
    fn empty_standings_are_missing() {
        let empty = Standings {
            scope: Scope::Group(Group::C),
            match_count: 0,
            rows: Vec::new(),
        };
        assert!(matches!(
            render_document(&empty, date()),
            Err(ScoreError::NoData(Scope::Group(Group::C)))
        ));
    }

    #[test]
    fn group_document_contents() {
        let html = render_document(&standings(Scope::Group(Group::A)), date()).unwrap();
        assert!(html.contains("<h1>AAROHAN BGMI ELIMS - GROUP A</h1>"));
        assert!(html.contains("Points Table | 2 Matches | October 19, 2026"));
        assert!(html.contains("<th>WWCD</th><th>PLCT.</th>"));
        assert!(!html.contains("<th>GROUP</th>"));
        assert!(html.contains("X &amp; Co"));
        // Y never won: dash instead of 0.
        assert!(html.contains("<td class=\"team\">Y</td><td>-</td><td>6</td><td>3</td><td class=\"total\">9</td>"));
        assert!(html.contains("Official Tournament Points Table"));
    }

    #[test]
    fn combined_document_has_group_column() {
        let html = render_document(&standings(Scope::Combined), date()).unwrap();
        assert!(html.contains("OVERALL STANDINGS"));
        assert!(html.contains("All Groups | 2 Matches"));
        assert!(html.contains("<th>TEAM NAME</th><th>GROUP</th>"));
        assert!(html.contains("<td class=\"team\">Y</td><td>B</td>"));
    }

    #[test]
    fn filenames() {
        assert_eq!(
            document_filename(Scope::Group(Group::C)),
            "AAROHAN_BGMI_Group_C_Leaderboard.html"
        );
        assert_eq!(document_filename(Scope::Combined), "AAROHAN_BGMI_Combined_Leaderboard.html");
    }
}
