//! Print (or play) the daily chain for a directory of Lahman-style CSV tables.
//!
//! Run with:
//!
//! ```text
//! cargo run --example daily_chain -- <data-dir> [YYYY-MM-DD] [--json] [--play]
//! ```
//!
//! - Without a date the local calendar date is used.
//! - `--json` prints the chain as JSON instead of cards.
//! - `--play` runs a terminal game: type a name to guess, `?` to reveal,
//!   `!teams`, `!bio` or `!origin` for hints, `>` to advance after a reveal.
//!
//! Set `RUST_LOG=full_count=debug` to watch the walk.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use full_count::{
    AggregateIndex, DailyChain, DailyChainCache, DataSource, Dataset, GameSession, GuessOutcome,
    HintKind, SessionError,
};
use tracing_subscriber::EnvFilter;

/// Print every card of the chain, answer included.
fn print_chain(chain: &DailyChain) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  FULL COUNT  {}  {}  (seed {})", chain.date, chain.difficulty.label, chain.seed);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for entry in &chain.entries {
        match &entry.connection {
            Some(link) => println!("  {}  | teammate connection: {link}", entry.position),
            None       => println!("  {}  | start the chain with this featured player", entry.position),
        }
        for line in entry.report.lines() {
            println!("       {line}");
        }
        println!("       answer: {}{}", entry.name, if entry.relaxed { "  (threshold relaxed)" } else { "" });
        println!();
    }
}

fn take_turn(session: &mut GameSession, input: &str) -> Result<(), SessionError> {
    match input {
        "?" => println!("MANAGER REVEAL: {}", session.reveal()?),
        ">" => session.advance()?,
        "!teams"  => println!("Teams: {}", session.hint(HintKind::Teams)?),
        "!bio"    => println!("Physicals: {}", session.hint(HintKind::Bio)?),
        "!origin" => println!("Birthplace: {}", session.hint(HintKind::Origin)?),
        name => match session.guess(name)? {
            GuessOutcome::Correct              => println!("Hit!"),
            GuessOutcome::Incorrect { outs }   => println!("Strike. {outs} out(s)."),
            GuessOutcome::StruckOut { answer } => println!("STRIKE THREE! The player was {answer}."),
        },
    }
    Ok(())
}

fn play(chain: DailyChain) -> Result<()> {
    let mut session = GameSession::new(chain);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(entry) = session.current() {
        println!();
        println!("Inning {} / 9   outs: {}", session.slot() + 1, session.outs());
        println!("{}", entry.position);
        if let Some(link) = &entry.connection {
            println!("Teammate connection: {link}");
        }
        println!("{}", entry.report);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let input = line?;
        if let Err(e) = take_turn(&mut session, input.trim()) {
            println!("{e}");
        }
    }

    println!();
    println!("FINAL BOX SCORE  outs: {}  hints: {}", session.outs(), session.hints_used());
    for (entry, result) in session.chain().entries.iter().zip(session.results()) {
        println!("  {:?}  {}: {}", result, entry.position, entry.name);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let interactive = args.iter().any(|a| a == "--play");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let Some(dir) = positional.first() else {
        bail!("usage: daily_chain <data-dir> [YYYY-MM-DD] [--json] [--play]");
    };
    let date = match positional.get(1) {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid date {s}"))?,
        None => Local::now().date_naive(),
    };

    let data = Dataset::load(&DataSource::new(dir.as_str()))
        .with_context(|| format!("load dataset from {dir}"))?;
    let index = AggregateIndex::build(&data);

    let mut cache = DailyChainCache::new();
    let chain = cache
        .get_or_generate(&index, date)
        .with_context(|| format!("generate chain for {date}"))?
        .clone();

    if json {
        println!("{}", chain.to_json()?);
    } else if interactive {
        play(chain)?;
    } else {
        print_chain(&chain);
    }
    Ok(())
}
