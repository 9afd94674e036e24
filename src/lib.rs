pub mod dto;
pub mod gesture;
pub mod hand;
pub mod play;
pub mod session;

/// Normalized image-relative positions in [0, 1].
pub type Coordinate = f32;
/// Rule-tier certainty attached to a classification (0-100, not a calibrated probability).
pub type Confidence = u8;
/// Cumulative round-win counters.
pub type Score = u32;

/// Random instance generation for testing and default opponent sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// FINGER EXTENSION GEOMETRY
// Thresholds assume a canonical upright hand; no rotation compensation.
// ============================================================================
/// How far above its PIP joint a fingertip must sit to count as extended.
pub const EXTENSION_MARGIN: Coordinate = 0.04;
/// A fingertip must be at least this fraction of its PIP's wrist distance away from the wrist.
pub const EXTENSION_RATIO: Coordinate = 0.9;
/// Minimum horizontal offset of the thumb tip from the wrist (thumbs extend sideways).
pub const THUMB_SPREAD: Coordinate = 0.1;

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Entries kept on the leaderboard after any insert.
pub const LEADERBOARD_CAP: usize = 10;
/// Name committed to the leaderboard when the player never gave one.
pub const ANONYMOUS: &str = "Player";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use crate::gesture::Detection;
    use crate::gesture::Gesture;
    use crate::hand::synthetic;
    use crate::hand::Skeleton;
    use crate::play::Fixed;
    use crate::play::Outcome;
    use crate::play::Round;
    use crate::session::Session;

    // the whole pipeline: landmarks in, leaderboard entry out
    #[test]
    fn fist_beats_scissors_and_scores() {
        let skeleton = synthetic::fist();
        let detection = Detection::from_frame(Some(&skeleton));
        assert!(detection.gesture() == Some(Gesture::Rock));
        assert!(detection.confidence() == 95);

        let session = Session::new();
        assert!(session.start().player() == 0);
        let player = detection.gesture().expect("unambiguous pose");
        let round = Round::resolve(player, &mut Fixed(Gesture::Scissors));
        assert!(round.outcome() == Outcome::Win);
        let scores = session.record(round.outcome());
        assert!(scores.player() == 1);

        let (finals, board) = session.end(None);
        assert!(finals.player() == 1);
        assert!(board.entries()[0].score() == 1);
    }

    #[test]
    fn malformed_landmarks_never_reach_the_classifier() {
        let landmarks = vec![crate::hand::Landmark::default(); 7];
        assert!(Skeleton::try_from(landmarks).is_err());
    }
}
