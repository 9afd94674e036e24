//! Arcade Binary
//!
//! Interactive rock-paper-scissors against the house. Frames come from a
//! recorded landmark file or from canonical synthetic poses; the session
//! score is committed to the leaderboard document on exit.

use clap::Parser;
use colored::Colorize;
use roshambot::dto::Frame;
use roshambot::gesture::Detection;
use roshambot::gesture::Gesture;
use roshambot::hand::synthetic;
use roshambot::play::Chaos;
use roshambot::play::Mirror;
use roshambot::play::Opponent;
use roshambot::play::Outcome;
use roshambot::play::Round;
use roshambot::session::Session;
use roshambot::Arbitrary;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of recorded landmark frames to classify and play.
    #[arg(long)]
    frames: Option<std::path::PathBuf>,
    /// Rounds of synthetic play when no frames file is given.
    #[arg(long, default_value_t = 5)]
    rounds: usize,
    /// Leaderboard document location.
    #[arg(long, default_value = "leaderboard.json")]
    leaderboard: std::path::PathBuf,
    /// Mirror the player's move instead of playing randomly.
    #[arg(long)]
    mirror: bool,
}

fn main() -> anyhow::Result<()> {
    roshambot::log();
    let args = Args::parse();
    let session = Session::hydrate(&args.leaderboard);
    let mut house: Box<dyn Opponent> = match args.mirror {
        true => Box::new(Mirror),
        false => Box::new(Chaos),
    };
    session.start();
    for frame in frames(&args)? {
        let skeleton = frame.skeleton().map_err(|e| anyhow::anyhow!(e))?;
        let detection = Detection::from_frame(skeleton.as_ref());
        match detection.gesture() {
            None => println!("{}", "no gesture detected, try again".dimmed()),
            Some(player) => {
                let round = Round::resolve(player, house.as_mut());
                let scores = session.record(round.outcome());
                println!("{:<24} {}", paint(&round), scores);
            }
        }
    }
    let name: String = dialoguer::Input::new()
        .with_prompt("name for the board")
        .default(roshambot::ANONYMOUS.to_string())
        .interact_text()?;
    let (scores, board) = session.end(Some(&name));
    session.checkpoint(&args.leaderboard)?;
    println!("final: {}", scores);
    print!("{}", board);
    Ok(())
}

/// Recorded frames if a file was given, else random canonical poses.
fn frames(args: &Args) -> anyhow::Result<Vec<Frame>> {
    match &args.frames {
        Some(path) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok((0..args.rounds)
            .map(|_| synthetic::pose(Gesture::random()))
            .map(|skeleton| Frame::from(&skeleton))
            .collect()),
    }
}

fn paint(round: &Round) -> String {
    let outcome = match round.outcome() {
        Outcome::Win => "win".green(),
        Outcome::Lose => "lose".red(),
        Outcome::Draw => "draw".yellow(),
    };
    format!("{} vs {} · {}", round.player(), round.opponent(), outcome)
}
