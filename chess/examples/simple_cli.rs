// Simple command-line application relaying move suggestions to the board

use relaychess::{chain::TurnError, Color, MoveChain};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let mut stdin = io::stdin().lock();

    let mut chain = MoveChain::new_initial();

    loop {
        if let Some(outcome) = chain.outcome() {
            println!("Game finished: {}", outcome);
            println!("Moves: {}", chain.uci_list());
            println!("Final position: {}", chain.fen());
            break;
        }

        println!("{}", chain.last().pretty());
        println!("FEN: {}", chain.fen());
        let side = match chain.last().side() {
            Color::White => "White",
            Color::Black => "Black",
        };
        print!("{} suggests ({}): ", side, chain.last().state().fullmove_number);
        io::stdout().flush()?;
        let mut s = String::new();
        if stdin.read_line(&mut s)? == 0 {
            break;
        }

        // Any text will do, the first coordinate move in it is taken.
        match chain.push_suggestion(s.trim()) {
            Ok(mv) => println!("Played {}", mv),
            Err(TurnError::NotFound(_)) => println!("No move found, try again"),
            Err(e) => println!("Bad move: {}", e),
        }
        println!();
    }

    Ok(())
}
