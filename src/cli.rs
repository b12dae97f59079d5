use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cards::{parse_card, parse_cards, NUM_CARDS};
use crate::config::{ConfigOverrides, SimConfig};
use crate::dealer::final_total_distribution;
use crate::display::{
    betting_notes, cards_display, ev_table, print_error, print_section, probability_table,
};
use crate::error::{EvError, EvResult};
use crate::immediate::next_hand_side_bets;
use crate::shoe::{Shoe, ShoeCounts};
use crate::simulator::simulate;

#[derive(Parser)]
#[command(name = "bjev", version = "1.0.0", about = "Blackjack shoe EV: main bet and side bets by Monte Carlo.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the remaining shoe comes from.
#[derive(Args, Clone)]
struct ShoeArgs {
    /// Number of decks in a fresh shoe [default: 8]
    #[arg(short, long)]
    decks: Option<u32>,
    /// Cards already dealt (e.g., "AS 10H KD")
    #[arg(long)]
    dealt: Option<String>,
    /// JSON file mapping card identifiers to remaining counts
    #[arg(long)]
    shoe: Option<PathBuf>,
}

impl ShoeArgs {
    fn decks(&self) -> u32 {
        self.decks.unwrap_or(SimConfig::DEFAULT_DECKS)
    }

    fn counts(&self) -> EvResult<ShoeCounts> {
        let mut counts = match &self.shoe {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                let mapping: HashMap<String, u32> = serde_json::from_str(&raw)?;
                ShoeCounts::encode(mapping)?
            }
            None => Shoe::new(self.decks())?.counts(),
        };
        if let Some(dealt) = &self.dealt {
            for card in parse_cards(dealt)? {
                counts.take(card)?;
            }
        }
        Ok(counts)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate full rounds and report the EV of every bet
    Simulate {
        #[command(flatten)]
        shoe: ShoeArgs,
        /// JSON config file (flags override its values)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of rounds
        #[arg(short = 'n', long)]
        rounds: Option<usize>,
        /// Number of parallel workers
        #[arg(short, long)]
        workers: Option<usize>,
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Report the main and bust bets only
        #[arg(long)]
        no_side_bets: bool,
        /// Let rounds keep drawing from the same shoe instead of restarting
        /// each round from the full composition
        #[arg(long)]
        carry: bool,
        /// Kelly fraction for bet sizing notes
        #[arg(long, default_value = "0.5")]
        kelly: f64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Side-bet EV for the next hand only
    Sidebets {
        #[command(flatten)]
        shoe: ShoeArgs,
        /// Number of trials
        #[arg(short = 'n', long, default_value = "25000")]
        trials: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Distribution of the dealer's final total for an up-card
    Dealer {
        /// Dealer up-card (e.g., 6H)
        upcard: String,
        #[command(flatten)]
        shoe: ShoeArgs,
        /// Number of simulations
        #[arg(short = 'n', long, default_value = "10000")]
        sims: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Summarise the remaining shoe
    Shoe {
        #[command(flatten)]
        shoe: ShoeArgs,
        /// Most likely next cards to list
        #[arg(long, default_value = "5")]
        top: usize,
    },
}

pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    dispatch(cli);
}

fn dispatch(cli: Cli) {
    let result = match cli.command {
        Commands::Simulate {
            shoe,
            config,
            rounds,
            workers,
            seed,
            no_side_bets,
            carry,
            kelly,
            json,
        } => {
            let overrides = ConfigOverrides {
                decks: shoe.decks,
                rounds,
                workers,
                seed,
                no_side_bets,
                carry,
            };
            cmd_simulate(&shoe, config, overrides, kelly, json)
        }
        Commands::Sidebets {
            shoe,
            trials,
            seed,
            json,
        } => cmd_sidebets(&shoe, trials, seed, json),
        Commands::Dealer {
            upcard,
            shoe,
            sims,
            seed,
        } => cmd_dealer(&upcard, &shoe, sims, seed),
        Commands::Shoe { shoe, top } => cmd_shoe(&shoe, top),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn resolve_config(path: Option<PathBuf>, overrides: &ConfigOverrides) -> EvResult<SimConfig> {
    let mut config = match path {
        Some(path) => SimConfig::from_json_file(&path)?,
        None => SimConfig::default(),
    };
    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

fn cmd_simulate(
    shoe: &ShoeArgs,
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
    kelly: f64,
    json: bool,
) -> EvResult<()> {
    let config = resolve_config(config_path, &overrides)?;
    let shoe_args = ShoeArgs {
        decks: Some(config.decks),
        ..shoe.clone()
    };
    let counts = shoe_args.counts()?;
    let report = simulate(&counts, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} cards in shoe, {} rounds on {} workers",
        format!("{}", counts.total()).bold(),
        format!("{}", report.rounds).bold(),
        config.workers,
    );
    if report.is_empty() {
        println!("  Nothing simulated.");
        return Ok(());
    }
    println!("{}", ev_table(&report));
    if report.voided > 0 {
        println!(
            "  {}",
            format!("{} rounds ran out of cards before the deal", report.voided).yellow()
        );
    }
    let notes = betting_notes(&report, kelly, 0.0);
    print_section("Betting notes", &format!("  {}", notes.join("\n  ")));
    println!();
    Ok(())
}

fn cmd_sidebets(shoe: &ShoeArgs, trials: usize, seed: Option<u64>, json: bool) -> EvResult<()> {
    let counts = shoe.counts()?;
    let report = next_hand_side_bets(&counts, trials, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!();
    println!("  Next-hand side bets over {} trials", format!("{}", report.rounds).bold());
    println!("{}", ev_table(&report));
    println!();
    Ok(())
}

fn cmd_dealer(upcard: &str, shoe: &ShoeArgs, sims: usize, seed: Option<u64>) -> EvResult<()> {
    let up = parse_card(upcard)?;
    let counts = shoe.counts()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dist = final_total_distribution(&counts, up, sims, &mut rng)?;

    let rows: Vec<(String, f64)> = dist.iter().map(|(k, &p)| (k.to_string(), p)).collect();
    println!();
    println!("  Dealer showing {}", cards_display(&[up]));
    println!("{}", probability_table(&rows, "Final total"));
    println!();
    Ok(())
}

fn cmd_shoe(shoe: &ShoeArgs, top: usize) -> EvResult<()> {
    let counts = shoe.counts()?;
    let decks = shoe.decks();
    let initial = Shoe::new(decks)?.initial_cards();
    if counts.total() > initial {
        return Err(EvError::InvalidDeckCount(decks));
    }
    let dealt = initial - counts.total();

    println!();
    println!(
        "  {} of {} cards remaining ({:.2} decks), penetration {:.1}%",
        format!("{}", counts.total()).bold(),
        initial,
        counts.total() as f64 / NUM_CARDS as f64,
        dealt as f64 / initial.max(1) as f64 * 100.0,
    );

    let ranks: Vec<(String, f64)> = counts
        .next_rank_probabilities()
        .into_iter()
        .map(|(rank, p)| (rank.to_string(), p))
        .collect();
    print_section("Next rank", &probability_table(&ranks, "Rank"));

    let suits: Vec<(String, f64)> = counts
        .next_suit_probabilities()
        .into_iter()
        .map(|(suit, p)| (format!("{} {}", suit.symbol(), suit.to_char()), p))
        .collect();
    print_section("Next suit", &probability_table(&suits, "Suit"));

    let cards: Vec<(String, f64)> = counts
        .next_card_probabilities(top)
        .into_iter()
        .map(|(card, p)| (card.pretty(), p))
        .collect();
    print_section("Most likely next cards", &probability_table(&cards, "Card"));
    println!();
    Ok(())
}
