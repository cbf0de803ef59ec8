//! Turn and score announcements.
//!
//! The controller reports progress as [`Announcement`] values; their
//! `Display` form is the text shown to players.

use derive_more::Display;

use crate::core::{Player, PlayerId, PlayerMap};
use crate::rules::Scoreboard;

/// One line of the final scoreboard.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
#[display("{label} got {faces} points.")]
pub struct ScoreLine {
    pub player: PlayerId,
    pub label: String,
    pub faces: u32,
}

/// A message for the players.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Announcement {
    /// It is `player`'s turn.
    Turn { player: PlayerId, label: String },
    /// The game is over.
    FinalScore { lines: Vec<ScoreLine> },
}

impl Announcement {
    /// Announce `player`'s turn.
    #[must_use]
    pub fn turn(roster: &PlayerMap<Player>, player: PlayerId) -> Self {
        Announcement::Turn {
            player,
            label: roster[player].label.clone(),
        }
    }

    /// Announce the final scores, in seat order.
    #[must_use]
    pub fn final_score(roster: &PlayerMap<Player>, scores: &Scoreboard) -> Self {
        let lines = roster
            .iter()
            .map(|(player, seat)| ScoreLine {
                player,
                label: seat.label.clone(),
                faces: scores.count(player),
            })
            .collect();
        Announcement::FinalScore { lines }
    }
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Announcement::Turn { label, .. } => write!(f, "{label}'s turn."),
            Announcement::FinalScore { lines } => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{line}")?;
                }
                Ok(())
            }
        }
    }
}

/// Text sink for announcements.
pub trait Announcer {
    fn announce(&mut self, announcement: &Announcement);
}

/// Keeps every announcement it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingAnnouncer {
    messages: Vec<Announcement>,
}

impl RecordingAnnouncer {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything announced so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Announcement] {
        &self.messages
    }

    /// The most recent announcement.
    #[must_use]
    pub fn last(&self) -> Option<&Announcement> {
        self.messages.last()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, announcement: &Announcement) {
        self.messages.push(announcement.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardTopology;
    use crate::core::{FaceId, GameState};

    #[test]
    fn test_turn_text() {
        let roster = Player::roster(3);
        let msg = Announcement::turn(&roster, PlayerId::new(2));

        assert_eq!(msg.to_string(), "Player 3 (blue)'s turn.");
    }

    #[test]
    fn test_final_score_text() {
        let board = BoardTopology::standard();
        let mut state = GameState::new(&board, 2);
        state.face_mut(FaceId(0)).claim(PlayerId::new(1));
        let roster = Player::roster(2);

        let msg = Announcement::final_score(&roster, &Scoreboard::tally(&state));

        assert_eq!(
            msg.to_string(),
            "Player 1 (green) got 0 points.\nPlayer 2 (red) got 1 points."
        );
    }

    #[test]
    fn test_recording_announcer() {
        let roster = Player::roster(2);
        let mut sink = RecordingAnnouncer::new();

        sink.announce(&Announcement::turn(&roster, PlayerId::new(0)));
        sink.announce(&Announcement::turn(&roster, PlayerId::new(1)));

        assert_eq!(sink.messages().len(), 2);
        assert_eq!(sink.last().unwrap().to_string(), "Player 2 (red)'s turn.");
    }
}
