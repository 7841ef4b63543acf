//! The host sprite: a battler's on-screen sprite and all its transient effects.

use std::sync::Arc;

use rpgfx_types::{
	animation::Animation,
	audio::SoundEffect,
	battler::BattlerRef,
	damage::DamageValue,
	effect::EffectKind,
	error::SpriteError,
};

use crate::{
	animation::{AnimationTarget, LoopChannel, OneShotChannel},
	backend::BitmapHandle,
	damage::{DamageOverlay, DamagePopup},
	effect::{Blink, EffectMachine},
	scene::SceneContext,
	state::{SharedViewport, SpriteState},
};

/// A sprite that owns one effect slot, a blink, a damage popup and two
/// animation channels.
///
/// [`update`](Self::update) must run once per display frame, after
/// [`SceneContext::begin_frame`]. Hosts hold pool references while animating,
/// so they must be released with [`dispose`](Self::dispose) rather than
/// dropped.
#[derive(Debug)]
pub struct HostSprite {
	sprite: SpriteState,
	viewport: Option<SharedViewport>,
	battler: Option<BattlerRef>,
	effect: EffectMachine,
	blink: Blink,
	damage: DamageOverlay,
	animation: OneShotChannel,
	loop_animation: LoopChannel,
	disposed: bool,
}

impl HostSprite {
	/// Creates a host drawn in `viewport`.
	pub fn new(viewport: Option<SharedViewport>) -> Self {
		Self {
			sprite: SpriteState::new(),
			viewport,
			battler: None,
			effect: EffectMachine::new(),
			blink: Blink::default(),
			damage: DamageOverlay::new(),
			animation: OneShotChannel::new(),
			loop_animation: LoopChannel::new(),
			disposed: false,
		}
	}

	/// Attaches the battler this sprite displays.
	pub fn with_battler(mut self, battler: BattlerRef) -> Self {
		self.battler = Some(battler);
		self
	}

	/// Replaces the battler this sprite displays.
	pub fn set_battler(&mut self, battler: Option<BattlerRef>) {
		self.battler = battler;
	}

	/// Battler this sprite displays.
	pub fn battler(&self) -> Option<BattlerRef> {
		self.battler
	}

	/// Base sprite.
	pub fn sprite(&self) -> &SpriteState {
		&self.sprite
	}

	/// Base sprite, for positioning.
	pub fn sprite_mut(&mut self) -> &mut SpriteState {
		&mut self.sprite
	}

	/// Viewport the host is drawn in.
	pub fn viewport(&self) -> Option<&SharedViewport> {
		self.viewport.as_ref()
	}

	/// Binds the battler graphic.
	pub fn set_bitmap(&mut self, bitmap: Option<BitmapHandle>) {
		self.sprite.set_bitmap(bitmap);
	}

	/// Starts `kind` in the effect slot, replacing the current effect.
	pub fn start_effect(&mut self, kind: EffectKind, ctx: &SceneContext) -> Result<(), SpriteError> {
		self.ensure_alive()?;
		self.effect.start(kind, &mut self.sprite, &ctx.effects)
	}

	/// Fades in.
	pub fn appear(&mut self, ctx: &SceneContext) -> Result<(), SpriteError> {
		self.start_effect(EffectKind::Appear, ctx)
	}

	/// Fades out.
	pub fn escape(&mut self, ctx: &SceneContext) -> Result<(), SpriteError> {
		self.start_effect(EffectKind::Disappear, ctx)
	}

	/// Flashes white, marking the acting battler.
	pub fn whiten(&mut self, ctx: &SceneContext) -> Result<(), SpriteError> {
		self.start_effect(EffectKind::Whiten, ctx)
	}

	/// Starts the death effect.
	///
	/// Bosses get the vertical wipe, falling back to the regular collapse when
	/// no bitmap is bound. For enemies, the collapse sound requested on this
	/// frame (see [`SceneContext::request_collapse_sound`]) plays now: the boss
	/// sound for bosses, the enemy collapse sound otherwise.
	pub fn collapse(&mut self, ctx: &mut SceneContext) -> Result<(), SpriteError> {
		self.ensure_alive()?;
		let enemy_id = self.battler.and_then(|battler| battler.enemy_id());
		let boss = enemy_id.is_some_and(|id| ctx.settings.is_boss(id));

		if boss {
			match self.start_effect(EffectKind::BossCollapse, ctx) {
				Err(SpriteError::MissingBitmap {
					..
				}) => {
					log::warn!("boss collapse without a bitmap, using the regular collapse");
					self.start_effect(EffectKind::Collapse, ctx)?;
				}
				result => result?,
			}
		} else {
			self.start_effect(EffectKind::Collapse, ctx)?;
		}

		if enemy_id.is_some() && ctx.collapse_sound_requested() {
			let se = if boss && !ctx.settings.boss_se.is_empty() {
				SoundEffect::named(ctx.settings.boss_se.as_str())
			} else {
				ctx.enemy_collapse_se().clone()
			};
			ctx.play_se_now(&se);
		}
		Ok(())
	}

	/// Starts the selection blink. No-op if already blinking.
	pub fn blink_on(&mut self) {
		self.blink.on();
	}

	/// Stops the selection blink and clears its overlay.
	pub fn blink_off(&mut self) {
		self.blink.off(&mut self.sprite);
	}

	/// Returns `true` while blinking.
	pub fn is_blinking(&self) -> bool {
		self.blink.is_active()
	}

	/// Pops up `value` above the sprite, replacing any current popup.
	pub fn show_damage(
		&mut self,
		value: impl Into<DamageValue>,
		critical: bool,
		ctx: &SceneContext,
	) -> Result<(), SpriteError> {
		self.ensure_alive()?;
		self.damage.show(&self.sprite, value.into(), critical, &ctx.settings);
		Ok(())
	}

	/// Plays `animation` once; `None` stops the current one.
	///
	/// `hit` selects which conditional timings fire.
	pub fn play_animation(
		&mut self,
		animation: Option<Arc<Animation>>,
		hit: bool,
		ctx: &mut SceneContext,
	) -> Result<(), SpriteError> {
		self.ensure_alive()?;
		match animation {
			Some(animation) => {
				self.animation
					.play(animation, hit, &mut ctx.pool, ctx.clock.as_mut(), &mut ctx.claims)
			}
			None => {
				self.animation.dispose(&mut ctx.pool);
				Ok(())
			}
		}
	}

	/// Loops `animation`; `None` stops looping.
	///
	/// Passing the animation already looping keeps its position.
	pub fn play_loop_animation(
		&mut self,
		animation: Option<Arc<Animation>>,
		ctx: &mut SceneContext,
	) -> Result<(), SpriteError> {
		self.ensure_alive()?;
		match animation {
			Some(animation) => self.loop_animation.play(animation, &mut ctx.pool, ctx.clock.as_mut()),
			None => {
				self.loop_animation.dispose(&mut ctx.pool);
				Ok(())
			}
		}
	}

	/// Returns `true` while an effect, a damage popup or a one-shot animation
	/// is running. Blinking and looping do not count.
	pub fn is_effect_active(&self) -> bool {
		self.effect.is_active() || self.damage.is_active() || self.animation.is_active()
	}

	/// Runs one display frame.
	///
	/// Order: base flash, effect, blink, damage, one-shot animation, loop
	/// animation. Animations read the opacity the effect wrote this frame.
	pub fn update(&mut self, ctx: &mut SceneContext) {
		if self.disposed {
			return;
		}

		self.sprite.update_flash();
		self.effect.tick(&mut self.sprite, &ctx.effects);
		if self.blink.is_active() {
			self.blink.tick(&mut self.sprite);
		}
		self.damage.tick(&self.sprite);

		let gate_open = ctx.gate_open();
		let screen_center = ctx.settings.screen_center();
		let mut target = AnimationTarget {
			host: &mut self.sprite,
			viewport: self.viewport.as_ref(),
			audio: ctx.audio.as_mut(),
			screen_center,
		};
		self.animation.tick(gate_open, &mut ctx.pool, &mut target);
		self.loop_animation.tick(gate_open, &mut target);
	}

	/// Releases every child, then the base sprite. Further calls are no-ops.
	pub fn dispose(&mut self, ctx: &mut SceneContext) {
		if self.disposed {
			return;
		}
		self.effect.clear();
		self.blink.off(&mut self.sprite);
		self.damage.dispose();
		self.animation.dispose(&mut ctx.pool);
		self.loop_animation.dispose(&mut ctx.pool);
		self.sprite.dispose();
		self.disposed = true;
		log::debug!("host sprite disposed");
	}

	/// Returns `true` after [`dispose`](Self::dispose).
	pub fn is_disposed(&self) -> bool {
		self.disposed
	}

	/// Every sprite to draw, in compositing order: base, one-shot cells, loop
	/// cells, damage popup.
	pub fn render_list(&self) -> impl Iterator<Item = &SpriteState> {
		std::iter::once(&self.sprite)
			.chain(self.animation.cells())
			.chain(self.loop_animation.cells())
			.chain(self.damage.popup().map(DamagePopup::sprite))
	}

	/// Effect slot.
	pub fn effect(&self) -> &EffectMachine {
		&self.effect
	}

	/// Selection blink.
	pub fn blink(&self) -> &Blink {
		&self.blink
	}

	/// Damage popup slot.
	pub fn damage(&self) -> &DamageOverlay {
		&self.damage
	}

	/// One-shot animation channel.
	pub fn animation(&self) -> &OneShotChannel {
		&self.animation
	}

	/// Loop animation channel.
	pub fn loop_animation(&self) -> &LoopChannel {
		&self.loop_animation
	}

	fn ensure_alive(&self) -> Result<(), SpriteError> {
		if self.disposed {
			return Err(SpriteError::AlreadyDisposed {
				what: "host sprite",
			});
		}
		Ok(())
	}
}

impl Drop for HostSprite {
	fn drop(&mut self) {
		if self.animation.is_loaded() || self.loop_animation.animation().is_some() {
			log::warn!("host sprite dropped while holding animation graphics; call dispose first");
		}
	}
}
