//! Effect extension table.
//!
//! Each [`EffectKind`] is driven by an [`EffectRule`]: how long it lasts for a
//! given sprite and what it writes to the sprite on every frame. The machine in
//! [`super::EffectMachine`] only counts frames; all visuals come from the rule
//! registered here, so alternate looks (the Ace-style collapse, the boss wipe)
//! are plugged in by registering rules rather than editing the machine.

use std::{collections::HashMap, fmt};

use rpgfx_types::{effect::EffectKind, error::SpriteError};

use crate::{settings::CollapseStyle, state::SpriteState};

use super::rules;

/// Duration and per-frame visuals of one effect kind.
pub trait EffectRule: fmt::Debug {
	/// Total duration in frames for `sprite`.
	fn duration(&self, sprite: &SpriteState) -> Result<u32, SpriteError>;

	/// Adjusts the freshly reset sprite when the effect starts.
	fn on_start(&self, _sprite: &mut SpriteState) {}

	/// Writes the visuals for the frame where `remaining` frames are left
	/// out of `total`.
	fn apply(&self, sprite: &mut SpriteState, remaining: u32, total: u32);
}

/// Mapping from effect kind to its rule.
#[derive(Debug, Default)]
pub struct EffectRegistry {
	rules: HashMap<EffectKind, Box<dyn EffectRule>>,
}

impl EffectRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appear, disappear, whiten and the red additive collapse.
	pub fn classic() -> Self {
		let mut registry = Self::new();
		registry.register(EffectKind::Appear, rules::Appear);
		registry.register(EffectKind::Disappear, rules::Disappear);
		registry.register(EffectKind::Whiten, rules::Whiten::classic());
		registry.register(EffectKind::Collapse, rules::Collapse::classic());
		registry
	}

	/// Classic rules plus the boss wipe.
	pub fn with_boss_collapse() -> Self {
		let mut registry = Self::classic();
		registry.register(EffectKind::BossCollapse, rules::BossCollapse);
		registry
	}

	/// Ace-style whiten/collapse colors plus the boss wipe.
	pub fn ace() -> Self {
		let mut registry = Self::with_boss_collapse();
		registry.register(EffectKind::Whiten, rules::Whiten::ace());
		registry.register(EffectKind::Collapse, rules::Collapse::ace());
		registry
	}

	/// Registry matching a configured collapse style.
	pub fn for_style(style: CollapseStyle) -> Self {
		match style {
			CollapseStyle::Classic => Self::with_boss_collapse(),
			CollapseStyle::Ace => Self::ace(),
		}
	}

	/// Installs `rule` for `kind`, returning the rule it replaced.
	pub fn register(
		&mut self,
		kind: EffectKind,
		rule: impl EffectRule + 'static,
	) -> Option<Box<dyn EffectRule>> {
		self.rules.insert(kind, Box::new(rule))
	}

	/// Removes the rule for `kind`.
	pub fn unregister(&mut self, kind: EffectKind) -> Option<Box<dyn EffectRule>> {
		self.rules.remove(&kind)
	}

	/// Rule for `kind`.
	pub fn rule(&self, kind: EffectKind) -> Result<&dyn EffectRule, SpriteError> {
		self.rules.get(&kind).map(Box::as_ref).ok_or(SpriteError::UnregisteredEffect {
			effect: kind,
		})
	}

	/// Returns `true` if `kind` can be started.
	pub fn contains(&self, kind: EffectKind) -> bool {
		self.rules.contains_key(&kind)
	}
}
