use colored::Colorize;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cards::{Card, Suit};
use crate::simulator::{Bet, EvReport};

fn bet_label(bet: Bet) -> &'static str {
    match bet {
        Bet::Main => "Main bet",
        Bet::Bust => "Dealer Bust",
        Bet::TwentyOnePlusThree => "21+3",
        Bet::PerfectPairs => "Perfect Pairs",
        Bet::HotThree => "Hot 3",
    }
}

pub fn signed_ev(ev: f64) -> String {
    let s = format!("{:+.4}", ev);
    if ev > 0.0 {
        s.green().bold().to_string()
    } else {
        s.red().to_string()
    }
}

pub fn cards_display(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| {
            let text = card.pretty();
            match card.suit {
                Suit::Spades | Suit::Clubs => text.white().to_string(),
                Suit::Hearts | Suit::Diamonds => text.red().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn ev_table(report: &EvReport) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Bet").set_alignment(CellAlignment::Left),
        Cell::new("EV").set_alignment(CellAlignment::Right),
        Cell::new("Std Err").set_alignment(CellAlignment::Right),
        Cell::new("Edge").set_alignment(CellAlignment::Right),
    ]);

    for (&bet, &ev) in &report.ev {
        let se = report.std_error.get(&bet).copied().unwrap_or(0.0);
        table.add_row(vec![
            Cell::new(bet_label(bet).bold().to_string()),
            Cell::new(signed_ev(ev)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", se)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:+.2}%", ev * 100.0)).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

pub fn probability_table(rows: &[(String, f64)], label: &str) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(label).set_alignment(CellAlignment::Left),
        Cell::new("Probability").set_alignment(CellAlignment::Right),
    ]);
    for (name, p) in rows {
        table.add_row(vec![
            Cell::new(name.bold().to_string()),
            Cell::new(format!("{:.1}%", p * 100.0)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}

/// Plain-language betting notes: Kelly sizing for the main bet and the side
/// bets whose EV clears `threshold`.
pub fn betting_notes(report: &EvReport, kelly_fraction: f64, threshold: f64) -> Vec<String> {
    let mut notes = Vec::new();

    if let Some(main) = report.get(Bet::Main) {
        let edge = main * 100.0;
        if main > 0.0 {
            notes.push(format!(
                "Player advantage {:+.2}%: bet {:.2}% of bankroll ({:.0}% Kelly).",
                edge,
                edge * kelly_fraction,
                kelly_fraction * 100.0,
            ));
        } else {
            notes.push(format!("Player advantage {:+.2}%: bet the table minimum.", edge));
        }
    }

    let profitable: Vec<&str> = report
        .ev
        .iter()
        .filter(|&(&bet, &ev)| bet != Bet::Main && ev > threshold)
        .map(|(&bet, _)| bet_label(bet))
        .collect();
    if profitable.is_empty() {
        notes.push("No profitable side bets.".to_string());
    } else {
        notes.push(format!("Profitable side bets: {}.", profitable.join(", ")));
    }

    notes
}

pub fn print_section(title: &str, content: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", content);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}
