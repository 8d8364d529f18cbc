use blackjack_lib::{Game, Options};
use blackjack_sim::game::player::ConsolePlayer;
use blackjack_sim::init_logging;
use log::LevelFilter;

fn main() {
    let numb_rounds_result = if let Some(n) = std::env::args().nth(1) {
        n.parse::<u32>()
    } else {
        eprintln!("usage: play_n_rounds ROUNDS");
        std::process::exit(1);
    };

    let numb_rounds = match numb_rounds_result {
        Ok(n) => n,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    init_logging(LevelFilter::Warn);

    const DEFAULT_BET: u32 = 5;
    let options = Options::new().hands(numb_rounds).decks(6).build();
    let mut game = Game::new(options);
    let stdin = std::io::stdin();
    let mut player = ConsolePlayer::new(stdin.lock(), std::io::stdout(), DEFAULT_BET);

    let bankroll = match game.play(&mut player) {
        Ok(bankroll) => bankroll,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    const width: usize = 80;
    const text_width: usize = "number of reshuffles".len() + 20;
    const num_width: usize = width - text_width;
    println!("{:-^width$}", " stats ");
    println!("{:<text_width$}{:>num_width$}", "rounds played", options.hands);
    println!("{:<text_width$}{:>num_width$}", "number of reshuffles", game.reshuffles());
    println!("{:<text_width$}{:>num_width$}", "final bankroll", bankroll);
    println!("{}", "-".repeat(width));
}
