//! Endgame Arcade Demo
//!
//! Plays a few simulated rounds, renders the game-over screen after each,
//! and submits eligible scores to an in-process leaderboard.
//!
//! Run with: cargo run -p endgame-arcade
//!
//! Environment variables:
//! - RUST_LOG: tracing filter (e.g. debug, endgame=debug)

use endgame::prelude::*;
use rand::Rng;

const PLAYERS: [&str; 4] = ["ada", "grace", "alan", "edsger"];

fn print_screen(screen: &Screen) {
    for fragment in screen.fragments() {
        println!("  [{:<14}] {}", fragment.id, fragment.text);
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let store = ScoreStore::new();
    let view = GameOverView::new(store.clone());
    let board = MemoryLeaderboard::new();
    let mut workflow = SubmissionWorkflow::new(store.clone());

    let mut rng = rand::thread_rng();

    for (round, player) in PLAYERS.iter().enumerate() {
        // One round of play, as the game-play collaborator would report it
        let score = rng.gen_range(0..40);
        store.set_score(score);

        println!("-- game over, round {} --", round + 1);
        let screen = view.render();
        print_screen(&screen);

        if screen.has(SUBMIT_BUTTON_ID) {
            workflow.engage().expect("eligible score engages the control");
            match workflow.submit(&board, player).await {
                Ok(SubmissionOutcome::Accepted { rank }) => {
                    println!("  {player} ranked #{rank}");
                }
                Ok(outcome) => println!("  submission not accepted: {outcome:?}"),
                Err(err) => println!("  submission refused: {err}"),
            }
            workflow.dismiss();
        } else {
            println!("  nothing to submit");
        }

        store.reset();
        println!();
    }

    println!("final board:");
    for (idx, entry) in board.top(PLAYERS.len()).iter().enumerate() {
        println!("  #{} {:<8} {}", idx + 1, entry.player_name, entry.score);
    }

    // High score survives every reset within the session
    println!("\nback at the title screen:");
    print_screen(&view.render());
}
