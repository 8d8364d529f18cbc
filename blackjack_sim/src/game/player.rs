use blackjack_lib::scoring;
use blackjack_lib::{Card, Hand, Move, Strategy};
use std::io::{BufRead, Write};

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Parses a line of console input into a move, accepts the first letter or the full name.
pub fn parse_move(input: &str) -> Option<Move> {
    match input.trim().to_lowercase().as_str() {
        "h" | "hit" => Some(Move::Hit),
        "s" | "stand" => Some(Move::Stand),
        "p" | "split" => Some(Move::Split),
        "d" | "double" | "double down" => Some(Move::Double),
        _ => None,
    }
}

/// A human player at a console. Prompts on `writer` and reads answers from `reader`,
/// invalid or illegal answers are rejected and the player is asked again.
pub struct ConsolePlayer<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    default_bet: u32,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub fn new(reader: R, writer: W, default_bet: u32) -> ConsolePlayer<R, W> {
        ConsolePlayer {
            reader,
            writer,
            default_bet,
        }
    }

    fn say(&mut self, msg: std::fmt::Arguments) {
        if let Err(e) = self.writer.write_fmt(msg).and_then(|_| self.writer.flush()) {
            log::warn!("unable to write to console: {e}");
        }
    }

    /// Reads one line, `None` once the input is exhausted or unreadable.
    fn read_line(&mut self) -> Option<String> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input),
            Err(e) => {
                log::warn!("unable to read from console: {e}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Strategy for ConsolePlayer<R, W> {
    fn bet(&mut self, reshuffled: bool) -> u32 {
        if reshuffled {
            self.say(format_args!("the shoe has been shuffled\n"));
        }
        let default_bet = self.default_bet;
        loop {
            self.say(format_args!("place your bet [{default_bet}]: "));
            let Some(input) = self.read_line() else {
                return default_bet;
            };
            let input = input.trim();
            if input.is_empty() {
                return default_bet;
            }
            match input.parse::<u32>() {
                Ok(bet) => return bet,
                Err(e) => self.say(format_args!("invalid bet {input:?}: {e}\n")),
            }
        }
    }

    fn play(&mut self, hand: &[Card], dealer_up_card: Card) -> Move {
        loop {
            self.say(format_args!(
                "player: {} ({})\ndealer: {}\n",
                format_cards(hand),
                scoring::score(hand),
                dealer_up_card
            ));
            self.say(format_args!(
                "what will you do? (h)it, (s)tand, s(p)lit, (d)ouble down\n"
            ));

            // with no more input, finish the hand as quietly as possible
            let Some(input) = self.read_line() else {
                return if Move::Stand.check(hand).is_ok() {
                    Move::Stand
                } else {
                    Move::Hit
                };
            };

            match parse_move(&input) {
                Some(mv) => match mv.check(hand) {
                    Ok(()) => return mv,
                    Err(e) => self.say(format_args!("can't {mv}: {e}\n")),
                },
                None => self.say(format_args!("invalid option: {}\n", input.trim())),
            }
        }
    }

    fn summary(&mut self, hands: &[Hand], dealer: &[Card]) {
        self.say(format_args!("==FINAL HANDS==\n"));
        for hand in hands {
            self.say(format_args!("player: {}\n", hand));
        }
        self.say(format_args!(
            "dealer: {} ({})\n\n",
            format_cards(dealer),
            scoring::score(dealer)
        ));
    }
}
