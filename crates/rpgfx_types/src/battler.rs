//! Battler identity attached to a host sprite.

use serde::{Deserialize, Serialize};

/// Which battler a host sprite displays, if any.
///
/// Only enemies take part in boss routing; actors always use the regular
/// collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattlerRef {
	/// Party member, by actor id
	Actor {
		/// Actor database id
		id: u32,
	},
	/// Troop member, by enemy id
	Enemy {
		/// Enemy database id
		id: u32,
	},
}

impl BattlerRef {
	/// Returns the enemy id when the battler is an enemy.
	pub fn enemy_id(&self) -> Option<u32> {
		match self {
			Self::Enemy {
				id,
			} => Some(*id),
			Self::Actor {
				..
			} => None,
		}
	}
}
