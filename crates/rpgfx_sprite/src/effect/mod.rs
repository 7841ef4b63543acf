//! Single-slot effect state machine.
//!
//! A host sprite runs at most one [`EffectKind`] at a time. Starting an effect
//! resets the sprite's visual baseline, then the effect's rule (looked up in the
//! [`EffectRegistry`]) rewrites the sprite once per frame while a countdown runs
//! from the rule's duration to zero. The slot is empty exactly when the
//! countdown is zero.
//!
//! Blinking ([`Blink`]) is tracked separately and may overlap any effect.

pub mod blink;
pub mod registry;
pub mod rules;

use rpgfx_types::{color::BlendType, color::Color, effect::EffectKind, error::SpriteError};

use crate::state::SpriteState;

pub use self::blink::Blink;
pub use self::registry::{EffectRegistry, EffectRule};

/// The effect currently occupying the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveEffect {
	/// Effect kind
	pub kind: EffectKind,
	/// Frames left
	pub remaining: u32,
	/// Duration fixed at start
	pub total: u32,
}

/// Countdown driver for the single effect slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectMachine {
	active: Option<ActiveEffect>,
}

impl EffectMachine {
	/// Creates an idle machine.
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts `kind`, replacing whatever was running.
	///
	/// Fails without touching the sprite or the current effect when `kind` has
	/// no rule or its duration cannot be computed (boss collapse without a
	/// bitmap).
	pub fn start(
		&mut self,
		kind: EffectKind,
		sprite: &mut SpriteState,
		registry: &EffectRegistry,
	) -> Result<(), SpriteError> {
		let rule = registry.rule(kind)?;
		let total = rule.duration(sprite)?;

		self.active = (total > 0).then_some(ActiveEffect {
			kind,
			remaining: total,
			total,
		});
		revert_to_normal(sprite);
		rule.on_start(sprite);
		log::debug!("start {} effect ({} frames)", kind, total);
		Ok(())
	}

	/// Runs one frame of the current effect.
	pub fn tick(&mut self, sprite: &mut SpriteState, registry: &EffectRegistry) {
		let Some(active) = self.active.as_mut() else {
			return;
		};

		active.remaining -= 1;
		match registry.rule(active.kind) {
			Ok(rule) => rule.apply(sprite, active.remaining, active.total),
			Err(err) => log::warn!("{}", err),
		}

		if active.remaining == 0 {
			log::trace!("{} effect finished", active.kind);
			self.active = None;
		}
	}

	/// Drops the current effect without restoring visuals.
	pub fn clear(&mut self) {
		self.active = None;
	}

	/// Current effect, if any.
	pub fn active(&self) -> Option<ActiveEffect> {
		self.active
	}

	/// Kind of the current effect.
	pub fn kind(&self) -> Option<EffectKind> {
		self.active.map(|active| active.kind)
	}

	/// Frames left; zero when idle.
	pub fn remaining(&self) -> u32 {
		self.active.map_or(0, |active| active.remaining)
	}

	/// Returns `true` while an effect occupies the slot.
	pub fn is_active(&self) -> bool {
		self.active.is_some()
	}
}

/// Restores the neutral look every effect starts from.
pub fn revert_to_normal(sprite: &mut SpriteState) {
	sprite.blend = BlendType::Normal;
	sprite.color = Color::transparent();
	sprite.set_opacity(255);
	sprite.src_rect.y = 0;
	if let Some(bitmap) = sprite.bitmap {
		sprite.ox = bitmap.width() / 2;
	}
}
