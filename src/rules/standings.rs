//! Final ranking of a session.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub is_human: bool,
    pub penalty_points: u32,
}

/// Players ordered by penalty points, lowest first. Equal scores keep
/// seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    entries: Vec<Standing>,
}

impl Standings {
    /// Rank the players by their current penalty points.
    pub fn from_players(players: &PlayerMap<Player>) -> Self {
        let mut entries: Vec<Standing> = players
            .iter()
            .map(|(id, p)| Standing {
                player: id,
                name: p.name.clone(),
                is_human: p.is_human,
                penalty_points: p.penalty_points,
            })
            .collect();
        entries.sort_by_key(|s| s.penalty_points);
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[Standing] {
        &self.entries
    }

    /// Everyone tied for the lowest score.
    #[must_use]
    pub fn winners(&self) -> Vec<&Standing> {
        let Some(best) = self.entries.first().map(|s| s.penalty_points) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .take_while(|s| s.penalty_points == best)
            .collect()
    }

    /// 1-based rank; tied players share the better rank.
    #[must_use]
    pub fn rank_of(&self, player: PlayerId) -> Option<usize> {
        let points = self.entries.iter().find(|s| s.player == player)?.penalty_points;
        Some(1 + self.entries.iter().filter(|s| s.penalty_points < points).count())
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for s in &self.entries {
            writeln!(f, "{}: {} points", s.name, s.penalty_points)?;
        }
        Ok(())
    }
}
