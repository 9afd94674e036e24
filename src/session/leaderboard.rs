use crate::Score;
use crate::LEADERBOARD_CAP;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// A committed session score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    player: String,
    score: Score,
}

impl Entry {
    pub fn player(&self) -> &str {
        &self.player
    }
    pub fn score(&self) -> Score {
        self.score
    }
}

impl From<(&str, Score)> for Entry {
    fn from((player, score): (&str, Score)) -> Self {
        Self {
            player: player.to_string(),
            score,
        }
    }
}

/// Top scores across sessions: descending by score, stable on ties, never
/// more than [`LEADERBOARD_CAP`] entries after an insert. The durable form
/// is a JSON array of `{player, score}` records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard(Vec<Entry>);

impl Leaderboard {
    pub fn entries(&self) -> &[Entry] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Insert, re-sort descending, and keep the top entries. The sort is
    /// stable, so equal scores stay in insertion order.
    pub fn submit(&mut self, entry: Entry) {
        self.0.push(entry);
        self.0.sort_by(|a, b| b.score.cmp(&a.score));
        self.0.truncate(LEADERBOARD_CAP);
    }
    /// Read the board from disk. A missing, unreadable, or malformed
    /// document yields an empty board rather than a crash.
    pub fn load(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|json| {
                serde_json::from_str(&json)
                    .inspect_err(|e| log::warn!("discarding malformed leaderboard: {}", e))
                    .ok()
            })
            .unwrap_or_default()
    }
    /// Write the board to disk as a JSON document.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl FromIterator<Entry> for Leaderboard {
    fn from_iter<I: IntoIterator<Item = Entry>>(entries: I) -> Self {
        let mut board = Self::default();
        for entry in entries {
            board.submit(entry);
        }
        board
    }
}

impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            writeln!(f, "{:>2}. {:<16} {:>4}", i + 1, entry.player, entry.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(scores: &[(&str, Score)]) -> Leaderboard {
        scores.iter().map(|(p, s)| Entry::from((*p, *s))).collect()
    }

    #[test]
    fn sorts_descending() {
        let board = board(&[("a", 1), ("b", 5), ("c", 3)]);
        let scores: Vec<Score> = board.entries().iter().map(Entry::score).collect();
        assert!(scores == vec![5, 3, 1]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let board = board(&[("first", 4), ("second", 4), ("third", 4)]);
        let players: Vec<&str> = board.entries().iter().map(Entry::player).collect();
        assert!(players == vec!["first", "second", "third"]);
    }

    #[test]
    fn eleventh_entry_never_survives() {
        let mut board = board(&[
            ("a", 10),
            ("b", 9),
            ("c", 8),
            ("d", 7),
            ("e", 6),
            ("f", 5),
            ("g", 4),
            ("h", 3),
            ("i", 2),
            ("j", 1),
        ]);
        assert!(board.len() == LEADERBOARD_CAP);
        board.submit(Entry::from(("k", 0)));
        assert!(board.len() == LEADERBOARD_CAP);
        assert!(board.entries().iter().all(|e| e.player() != "k"));
    }

    #[test]
    fn strong_newcomer_displaces_the_floor() {
        let mut board = board(&[
            ("a", 6),
            ("b", 6),
            ("c", 5),
            ("d", 5),
            ("e", 4),
            ("f", 4),
            ("g", 3),
            ("h", 2),
            ("i", 2),
            ("j", 1),
        ]);
        board.submit(Entry::from(("alice", 7)));
        assert!(board.len() == LEADERBOARD_CAP);
        assert!(board.entries()[0].player() == "alice");
        assert!(board.entries().iter().all(|e| e.player() != "j"));
    }

    #[test]
    fn missing_file_loads_empty() {
        let board = Leaderboard::load(Path::new("/definitely/not/here.json"));
        assert!(board.is_empty());
    }

    #[test]
    fn malformed_document_loads_empty() {
        let path = std::env::temp_dir().join("roshambot-malformed-board.json");
        std::fs::write(&path, "not json at all").unwrap();
        let board = Leaderboard::load(&path);
        assert!(board.is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn document_roundtrips() {
        let path = std::env::temp_dir().join("roshambot-roundtrip-board.json");
        let board = board(&[("a", 3), ("b", 1)]);
        board.save(&path).unwrap();
        assert!(Leaderboard::load(&path) == board);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn save_to_unwritable_path_errors() {
        let board = board(&[("a", 3)]);
        assert!(board.save(Path::new("/no/such/dir/board.json")).is_err());
    }
}
