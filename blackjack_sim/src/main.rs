use blackjack_sim::write::{write_summary, OutputFormat};
use blackjack_sim::{init_logging, BlackjackSimulatorConfig, DecisionKind, SimulationError};
use blackjack_lib::Options;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Simulate rounds of blackjack with a fixed decision strategy and report the results.
#[derive(Parser, Debug)]
#[command(name = "blackjack_sim", version, about)]
struct Cli {
    /// Number of rounds to play
    #[arg(long)]
    hands: Option<u32>,
    /// Number of 52 card decks in the shoe
    #[arg(long)]
    decks: Option<u32>,
    /// Multiplier paid on a player natural
    #[arg(long)]
    payout: Option<f64>,
    /// Flat bet placed every round
    #[arg(long)]
    bet: Option<u32>,
    /// Seed for the shuffles, drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Decision strategy used by the player
    #[arg(long, value_enum)]
    strategy: Option<DecisionKind>,
    /// JSON configuration file, flags given on the command line take precedence
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the summary as JSON
    #[arg(long)]
    json: bool,
    /// Log every round
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Result<BlackjackSimulatorConfig, SimulationError> {
        let mut config = match &self.config {
            Some(path) => BlackjackSimulatorConfig::from_file(path)?,
            None => BlackjackSimulatorConfig::default(),
        };
        let defaults = config.options;
        config.options = Options::new()
            .hands(self.hands.unwrap_or(defaults.hands))
            .decks(self.decks.unwrap_or(defaults.decks))
            .blackjack_payout(self.payout.unwrap_or(defaults.blackjack_payout))
            .build();
        if let Some(bet) = self.bet {
            config.bet = bet;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }

    fn run(&self) -> Result<(), SimulationError> {
        let config = self.config()?;
        let mut simulation = config.simulation();
        let summary = simulation.run()?;
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        write_summary(&summary, &simulation.options(), format, std::io::stdout().lock())
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    if let Err(e) = cli.run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
