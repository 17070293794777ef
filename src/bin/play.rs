//! Interactive driver: prompts for actions, feeds them to the engine and
//! renders the board. Glue only - every rule decision stays in the
//! library, and this loop owns all printing.

use std::io::{self, BufRead, Write};

use rust_tictactoe::{Action, Player, TicTacToe, to_text};

fn main() -> io::Result<()> {
    let size = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);
    let mut game = match TicTacToe::new(size) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    game.reset(None);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let legal = game
            .legal_actions()
            .iter()
            .map(|action| action.index().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        print!("Select action ({}): ", legal);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let Ok(index) = line?.trim().parse::<u32>() else {
            println!("Error: invalid action, please try again");
            continue;
        };

        match game.step(Action::new(index)) {
            Ok(step) => {
                print!("{}", to_text(&game.observation(Player::ONE)));
                if step.terminal {
                    match step.result.signed() {
                        0 => println!("It's a draw"),
                        winner => println!("Winner is player {}", winner),
                    }
                    break;
                }
            }
            Err(err) => println!("Error: {}, please try again", err),
        }
    }
    Ok(())
}
