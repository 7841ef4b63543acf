//! Timed sound and flash events attached to animation frames.

use serde::{Deserialize, Serialize};

use crate::{audio::SoundEffect, color::Color};

/// Which outcome of the triggering action a timing reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingCondition {
	/// Fires regardless of the outcome
	#[default]
	Always,
	/// Fires only when the action hit
	Hit,
	/// Fires only when the action missed
	Miss,
}

impl TimingCondition {
	/// Returns `true` if a timing with this condition fires for the given outcome.
	pub fn matches(self, hit: bool) -> bool {
		match self {
			Self::Always => true,
			Self::Hit => hit,
			Self::Miss => !hit,
		}
	}
}

/// What a timing flashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashScope {
	/// No flash
	#[default]
	None,
	/// Flash the host sprite with the timing color
	Target,
	/// Flash the bound viewport (skipped when the host has none)
	Screen,
	/// Hide the host sprite for the flash duration
	HideTarget,
}

/// A sound/flash trigger attached to one animation frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
	/// Frame index the timing fires on
	pub frame: usize,
	/// Outcome gate
	pub condition: TimingCondition,
	/// Sound to play; silent when the name is empty
	pub se: SoundEffect,
	/// Flash target
	pub flash_scope: FlashScope,
	/// Flash color
	pub flash_color: Color,
	/// Flash duration in animation frames
	pub flash_duration: u32,
}

impl Timing {
	/// Creates a timing that only plays a sound.
	pub fn sound(frame: usize, se: SoundEffect) -> Self {
		Self {
			frame,
			se,
			..Self::default()
		}
	}

	/// Creates a timing that only flashes.
	pub fn flash(frame: usize, scope: FlashScope, color: Color, duration: u32) -> Self {
		Self {
			frame,
			flash_scope: scope,
			flash_color: color,
			flash_duration: duration,
			..Self::default()
		}
	}

	/// Sets the outcome gate.
	pub fn with_condition(mut self, condition: TimingCondition) -> Self {
		self.condition = condition;
		self
	}

	/// Returns `true` if the timing fires on `frame` for the given outcome.
	pub fn fires_on(&self, frame: usize, hit: bool) -> bool {
		self.frame == frame && self.condition.matches(hit)
	}
}
