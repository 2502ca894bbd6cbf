//! Interactive console menu: enter match results and print standings.
//! Run with: cargo run --bin points-table
//! Uses DATA_DIR like the web server, so both share the same match files.

use bgmi_points_table::{
    combined_standings, group_standings, record_match, report, AppConfig, Group, MatchStore,
    ScoreError, TeamEntry,
};
use std::io::{self, BufRead, Write};

enum Choice {
    AddMatch(Group),
    ShowGroup(Group),
    ShowAllGroups,
    ShowCombined,
    Exit,
}

fn parse_choice(input: &str) -> Option<Choice> {
    let choice = match input.trim() {
        "1" => Choice::AddMatch(Group::A),
        "2" => Choice::AddMatch(Group::B),
        "3" => Choice::AddMatch(Group::C),
        "4" => Choice::ShowGroup(Group::A),
        "5" => Choice::ShowGroup(Group::B),
        "6" => Choice::ShowGroup(Group::C),
        "7" => Choice::ShowAllGroups,
        "8" => Choice::ShowCombined,
        "9" => Choice::Exit,
        _ => return None,
    };
    Some(choice)
}

fn print_menu() {
    let rule = "=".repeat(60);
    println!("\n{rule}\n  BGMI TOURNAMENT POINTS TABLE SYSTEM\n{rule}");
    for group in Group::ALL {
        let n = group as usize + 1;
        println!("{}. Add Match Data for Group {}", n, group);
    }
    for group in Group::ALL {
        let n = group as usize + 4;
        println!("{}. View Group {} Standings", n, group);
    }
    println!("7. View All Groups Standings");
    println!("8. View Combined Leaderboard (All Groups)");
    println!("9. Exit");
    println!("{rule}");
}

/// Print `label`, read one line. `None` on end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for team name and kills for every rank of the group roster, then record the match.
fn add_match(store: &MatchStore, input: &mut impl BufRead, group: Group) -> Result<(), Box<dyn std::error::Error>> {
    let roster = group.roster();
    let rule = "=".repeat(70);
    println!("\n{rule}\n  ENTERING MATCH DATA FOR GROUP {} - MATCH {}\n{rule}", group, store.next_match_no(group)?);
    println!("\nTeams in Group {}:", group);
    for (i, team) in roster.iter().enumerate() {
        println!("  {}. {}", i + 1, team);
    }

    let mut entries = Vec::with_capacity(roster.len());
    for rank in 1..=roster.len() as i64 {
        println!("\n--- Rank {} ---", rank);
        let Some(team) = prompt(input, "Team Name: ")? else {
            println!("\nInput closed, match discarded.");
            return Ok(());
        };
        let kills = loop {
            let Some(raw) = prompt(input, &format!("Kills for {}: ", team))? else {
                println!("\nInput closed, match discarded.");
                return Ok(());
            };
            match raw.parse::<u32>() {
                Ok(k) => break k,
                Err(_) => println!("Please enter a whole number."),
            }
        };
        entries.push(TeamEntry::new(team, rank, kills));
    }

    let recorded = record_match(store, group, &entries)?;
    println!("\n✓ Match {} for Group {} saved successfully!", recorded.match_no, group);
    println!("  Saved to: {}\n", recorded.path.display());
    Ok(())
}

fn show_group(store: &MatchStore, group: Group) -> Result<(), ScoreError> {
    print!("{}", report::render_text_table(&group_standings(store, group)?));
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let config = AppConfig::from_env();
    let store = MatchStore::new(&config.data_dir);
    if let Err(e) = store.ensure_layout() {
        log::error!("Cannot create data folders under {}: {}", config.data_dir.display(), e);
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print_menu();
        let line = match prompt(&mut input, "\nSelect Option: ") {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        };
        let result: Result<(), Box<dyn std::error::Error>> = match parse_choice(&line) {
            Some(Choice::AddMatch(group)) => add_match(&store, &mut input, group),
            Some(Choice::ShowGroup(group)) => show_group(&store, group).map_err(Into::into),
            Some(Choice::ShowAllGroups) => Group::ALL
                .into_iter()
                .try_for_each(|g| show_group(&store, g))
                .map_err(Into::into),
            Some(Choice::ShowCombined) => combined_standings(&store)
                .map(|s| print!("{}", report::render_text_table(&s)))
                .map_err(Into::into),
            Some(Choice::Exit) => {
                println!("\nExiting... Goodbye!");
                break;
            }
            None => {
                println!("\n⚠ Invalid choice. Please try again.");
                Ok(())
            }
        };
        if let Err(e) = result {
            log::error!("{}", e);
            println!("\nError: {}", e);
        }
    }
}
