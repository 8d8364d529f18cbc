use crate::stats::SimulationSummary;
use crate::SimulationError;
use blackjack_lib::Options;
use serde::Serialize;
use std::io::Write;

/// How a summary is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    options: Options,
    #[serde(flatten)]
    summary: &'a SimulationSummary,
    win_pct: f64,
    push_pct: f64,
    loss_pct: f64,
    avg_winnings_per_hand: f64,
}

fn format_summary(summary: &SimulationSummary, options: &Options) -> String {
    const width: usize = 80;
    let header = format!(
        "{:-^width$}\n",
        format!(
            " {} hands, {} decks, blackjack pays {} ",
            options.hands, options.decks, options.blackjack_payout
        )
    );
    format!("{}{}{}\n", header, summary, "-".repeat(width))
}

/// A public function to take a `SimulationSummary` and the options it was played under and write it to `writer`.
pub fn write_summary(
    summary: &SimulationSummary,
    options: &Options,
    format: OutputFormat,
    mut writer: impl Write,
) -> Result<(), SimulationError> {
    match format {
        OutputFormat::Text => {
            writer.write_all(format_summary(summary, options).as_bytes())?;
        }
        OutputFormat::Json => {
            let json = SummaryJson {
                options: *options,
                summary,
                win_pct: summary.win_pct(),
                push_pct: summary.push_pct(),
                loss_pct: summary.loss_pct(),
                avg_winnings_per_hand: summary.avg_winnings_per_hand(),
            };
            serde_json::to_writer_pretty(&mut writer, &json)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
