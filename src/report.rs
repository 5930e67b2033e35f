use colored::{ColoredString, Colorize};
use serde_json::Value;

use crate::domain::{Court, CourtCollection, status};

/// One line per court, status coloured by how far the match is
pub fn format_courts(courts: &CourtCollection) -> String {
    let mut lines = vec![format!(
        "{:<10} {:<24} {:>5}   {:<24} {:<12} {}",
        "COURT", "PLAYER 1", "SCORE", "PLAYER 2", "STATUS", "NEXT"
    )];
    lines.extend(courts.courts().enumerate().map(|(i, court)| match court {
        Ok(court) => format_court(&court),
        Err(e) => format!("#{:<9} {}", i + 1, format!("unreadable record: {}", e).red()),
    }));
    lines.join("\n")
}

fn format_court(court: &Court) -> String {
    format!(
        "{:<10} {:<24} {:>5}   {:<24} {:<12} {}",
        court.id,
        or_dash(&court.player1),
        format_score(court),
        or_dash(&court.player2),
        paint_status(&court.status),
        court.next_players
    )
}

fn format_score(court: &Court) -> String {
    if !court.has_score() {
        return "-".to_string();
    }
    format!("{}:{}", score_text(&court.score1), score_text(&court.score2))
}

fn score_text(score: &Option<Value>) -> String {
    match score {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn or_dash(name: &str) -> &str {
    if name.is_empty() { "-" } else { name }
}

fn paint_status(label: &str) -> ColoredString {
    match label {
        status::IN_PROGRESS => label.green().bold(),
        status::FINISHED => label.blue(),
        status::NOT_STARTED | status::IDLE => label.dimmed(),
        _ => label.yellow(),
    }
}
