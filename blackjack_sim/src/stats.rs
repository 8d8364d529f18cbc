use serde::Serialize;
use std::fmt::Display;

/// Simple struct for recording all of the interesting data points accumulated during a simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub label: String,
    pub num_rounds: u32,
    pub hands_played: u32,
    pub wins: u32,
    pub pushes: u32,
    pub losses: u32,
    pub player_blackjacks: u32,
    pub reshuffles: u32,
    pub winnings: i64,
}

impl SimulationSummary {
    pub fn new(label: String) -> SimulationSummary {
        SimulationSummary {
            label,
            num_rounds: 0,
            hands_played: 0,
            wins: 0,
            pushes: 0,
            losses: 0,
            player_blackjacks: 0,
            reshuffles: 0,
            winnings: 0,
        }
    }

    fn pct(&self, n: u32) -> f64 {
        if self.hands_played == 0 {
            return 0.0;
        }
        n as f64 / self.hands_played as f64
    }

    pub fn win_pct(&self) -> f64 {
        self.pct(self.wins)
    }

    pub fn push_pct(&self) -> f64 {
        self.pct(self.pushes)
    }

    pub fn loss_pct(&self) -> f64 {
        self.pct(self.losses)
    }

    pub fn avg_winnings_per_hand(&self) -> f64 {
        if self.hands_played == 0 {
            return 0.0;
        }
        self.winnings as f64 / self.hands_played as f64
    }
}

impl Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const width: usize = 80;
        const text_width: usize = "number of player blackjacks".len() + 20;
        const num_width: usize = width - text_width;
        write!(
            f,
            "{:<text_width$}{:>num_width$}\n\
        {:<text_width$}{:>num_width$}\n\
        {:<text_width$}{:>num_width$}\n\
        {:<text_width$}{:>num_width$}\n\
        {:<text_width$}{:>num_width$}\n\
        {:<text_width$}{:>num_width$}\n\
        {:<text_width$}{:>num_width$}\n\
        {:<text_width$}{:>num_width$}\n\
        {:<text_width$}{:>num_width$}\n\
        {:<text_width$}{:>num_width$.4}\n\
        {:<text_width$}{:>num_width$.4}\n\
        {:<text_width$}{:>num_width$.4}\n\
        {:<text_width$}{:>num_width$.4}\n",
            "strategy",
            self.label,
            "rounds played",
            self.num_rounds,
            "total hands played",
            self.hands_played,
            "hands won",
            self.wins,
            "hands pushed",
            self.pushes,
            "hands lost",
            self.losses,
            "number of player blackjacks",
            self.player_blackjacks,
            "number of reshuffles",
            self.reshuffles,
            "winnings",
            self.winnings,
            "win percentage",
            self.win_pct(),
            "push percentage",
            self.push_pct(),
            "loss percentage",
            self.loss_pct(),
            "average winnings per hand",
            self.avg_winnings_per_hand(),
        )
    }
}
