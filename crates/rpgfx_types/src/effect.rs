//! Single-slot sprite effect kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transient whole-sprite effect.
///
/// A host runs at most one of these at a time; blinking is tracked separately
/// because it can overlap any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
	/// Fade in from fully transparent
	Appear,
	/// Fade out (escape)
	Disappear,
	/// White flash used when a battler is selected to act
	Whiten,
	/// Tinted fade out on defeat
	Collapse,
	/// Height-driven vertical wipe reserved for bosses
	BossCollapse,
}

impl EffectKind {
	/// Every effect kind, in declaration order.
	pub const ALL: [Self; 5] =
		[Self::Appear, Self::Disappear, Self::Whiten, Self::Collapse, Self::BossCollapse];

	/// Fixed duration in frames, or `None` when it depends on the sprite bitmap.
	pub fn fixed_duration(self) -> Option<u32> {
		match self {
			Self::Appear | Self::Whiten => Some(16),
			Self::Disappear => Some(32),
			Self::Collapse => Some(48),
			Self::BossCollapse => None,
		}
	}
}

impl fmt::Display for EffectKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Appear => "appear",
			Self::Disappear => "disappear",
			Self::Whiten => "whiten",
			Self::Collapse => "collapse",
			Self::BossCollapse => "boss collapse",
		};
		f.write_str(name)
	}
}
