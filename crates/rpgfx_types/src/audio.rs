//! Sound effect descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A sound effect request: file name, volume and pitch (both in percent).
///
/// An empty name means "no sound"; timings without audio carry one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundEffect {
	/// Asset name, without directory or extension
	pub name: String,
	/// Volume in percent (0-100)
	pub volume: u8,
	/// Pitch in percent (50-150)
	pub pitch: u8,
}

impl SoundEffect {
	/// Creates a new sound effect descriptor.
	pub fn new(name: impl Into<String>, volume: u8, pitch: u8) -> Self {
		Self {
			name: name.into(),
			volume,
			pitch,
		}
	}

	/// Creates a descriptor with the default volume (100) and pitch (100).
	pub fn named(name: impl Into<String>) -> Self {
		Self::new(name, 100, 100)
	}

	/// Returns `true` if the descriptor does not name any sound.
	pub fn is_silent(&self) -> bool {
		self.name.is_empty()
	}
}

impl Default for SoundEffect {
	fn default() -> Self {
		Self::new("", 100, 100)
	}
}

impl fmt::Display for SoundEffect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} (vol {}, pitch {})", self.name, self.volume, self.pitch)
	}
}
