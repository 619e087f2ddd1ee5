use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use chrono::Local;
use log::warn;

use crate::model::LeaderboardEntry;

pub const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.txt";
pub const DEFAULT_TOP_N: usize = 10;

const DEFAULT_PLAYER_NAME: &str = "Player";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only score log, one `timestamp|name|score` line per entry. The
/// file is opened and closed per call; nothing is held across operations.
#[derive(Debug)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Best-effort append; I/O failures are logged and swallowed.
    pub fn append(&self, name: &str, score: i64) {
        let name = name.trim();
        let name = if name.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            name
        };
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let line = format!("{}|{}|{}\n", timestamp, name, score);
        if let Err(err) = self.try_append(&line) {
            warn!(target: "leaderboard", "Could not record score for {}: {}", name, err);
        }
    }

    fn try_append(&self, line: &str) -> std::io::Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }

    /// The `n` highest-scoring entries, descending; ties keep file order.
    /// A missing or unreadable file is an empty leaderboard, not an error.
    pub fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!(target: "leaderboard", "Could not read {:?}: {}", self.path, err);
                }
                return Vec::new();
            }
        };
        let mut entries: Vec<LeaderboardEntry> = contents.lines().filter_map(parse_line).collect();
        // stable sort, so equal scores stay in append order
        entries.sort_by_key(|entry| std::cmp::Reverse(entry.score));
        entries.truncate(n);
        entries
    }
}

/// Lenient per-line parse: anything other than three pipe-delimited fields is
/// skipped; a malformed score field defaults to 0.
pub fn parse_line(line: &str) -> Option<LeaderboardEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() != 3 {
        return None;
    }
    Some(LeaderboardEntry {
        timestamp: parts[0].to_string(),
        name: parts[1].to_string(),
        score: parts[2].trim().parse::<i64>().unwrap_or(0),
    })
}
