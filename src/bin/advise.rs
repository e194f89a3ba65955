//! Advisory Binary
//!
//! Computes completion odds for a described table state and prints
//! the recommended action. `--json` emits the machine-readable form.

use clap::Parser;
use oddsmaker::cards::Sight;
use oddsmaker::dto::ApiCalculation;
use oddsmaker::engine::Calculation;
use oddsmaker::engine::Stakes;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// your two hole cards, e.g. "Ah Kd"
    #[arg(long, required = true)]
    pocket: String,
    /// the community cards so far, e.g. "2c 7h Js"
    #[arg(long, default_value = "")]
    board: String,
    /// opponents still in the hand
    #[arg(long, default_value_t = 1)]
    opponents: usize,
    /// small blind denomination
    #[arg(long, default_value_t = Stakes::SMALL_BLIND)]
    blind: u32,
    /// accumulated bet to match, 0 if checked to you
    #[arg(long, default_value_t = 0)]
    bet: u32,
    /// emit JSON instead of the table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    oddsmaker::log();
    let args = Args::parse();
    let seen = match args.board.trim().is_empty() {
        true => args.pocket.clone(),
        false => format!("{} ~ {}", args.pocket, args.board),
    };
    let sight = Sight::try_from(seen.as_str())?;
    let stakes = Stakes::new(args.opponents, args.blind, args.bet)?;
    let calculation = Calculation::from((sight, stakes));
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&ApiCalculation::from(calculation))?),
        false => println!("{}", calculation),
    }
    Ok(())
}
