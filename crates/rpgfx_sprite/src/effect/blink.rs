//! Free-running selection blink.

use rpgfx_types::color::Color;

use crate::state::SpriteState;

/// Frames in one blink cycle
pub const BLINK_CYCLE: u32 = 32;

/// Cyclic white pulse, independent of the single-slot effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blink {
	count: Option<u32>,
}

impl Blink {
	/// Starts blinking from the top of the cycle. No-op if already blinking.
	pub fn on(&mut self) {
		if self.count.is_none() {
			self.count = Some(0);
		}
	}

	/// Stops blinking and clears the overlay. No-op if not blinking.
	pub fn off(&mut self, sprite: &mut SpriteState) {
		if self.count.take().is_some() {
			sprite.color = Color::transparent();
		}
	}

	/// Returns `true` while blinking.
	pub fn is_active(&self) -> bool {
		self.count.is_some()
	}

	/// Current step inside the cycle.
	pub fn step(&self) -> Option<u32> {
		self.count
	}

	/// Overlay alpha for a cycle step: ramps 96 -> 0 over the first half, then
	/// back up to 90.
	pub fn alpha(step: u32) -> i32 {
		let sign = if step < 16 {
			1
		} else {
			-1
		};
		(16 - step as i32) * sign * 6
	}

	/// Advances the cycle and writes the white overlay.
	pub fn tick(&mut self, sprite: &mut SpriteState) {
		let Some(count) = self.count.as_mut() else {
			return;
		};
		*count = (*count + 1) % BLINK_CYCLE;
		sprite.color = Color::white().with_alpha(Self::alpha(*count));
	}
}
