//! Scene-wide services shared by every host sprite.

use rpgfx_types::audio::SoundEffect;

use crate::{
	animation::ScreenClaims,
	backend::{AnimationAssets, AudioBackend, FrameClock},
	collapse::CollapseSoundLedger,
	effect::EffectRegistry,
	pool::BitmapPool,
	settings::SpriteSettings,
};

/// Collaborators and shared state for one scene.
///
/// Call [`begin_frame`](Self::begin_frame) once per displayed frame before
/// updating any host.
pub struct SceneContext {
	pub(crate) pool: BitmapPool,
	pub(crate) clock: Box<dyn FrameClock>,
	pub(crate) audio: Box<dyn AudioBackend>,
	pub(crate) effects: EffectRegistry,
	pub(crate) settings: SpriteSettings,
	pub(crate) claims: ScreenClaims,
	pub(crate) ledger: CollapseSoundLedger,
	enemy_collapse_se: SoundEffect,
}

impl SceneContext {
	/// Creates a scene with the effect rules matching `settings.collapse_style`.
	pub fn new(
		settings: SpriteSettings,
		clock: impl FrameClock + 'static,
		audio: impl AudioBackend + 'static,
		assets: impl AnimationAssets + 'static,
	) -> Self {
		log::info!("sprite scene ({:?} collapse style)", settings.collapse_style);
		Self {
			pool: BitmapPool::new(assets),
			clock: Box::new(clock),
			audio: Box::new(audio),
			effects: EffectRegistry::for_style(settings.collapse_style),
			settings,
			claims: ScreenClaims::new(),
			ledger: CollapseSoundLedger::new(),
			enemy_collapse_se: SoundEffect::named("Collapse1"),
		}
	}

	/// Sets the sound that counts as the enemy collapse sound.
	pub fn with_enemy_collapse_se(mut self, se: SoundEffect) -> Self {
		self.enemy_collapse_se = se;
		self
	}

	/// Replaces the effect rules.
	pub fn with_effects(mut self, effects: EffectRegistry) -> Self {
		self.effects = effects;
		self
	}

	/// Starts a new display frame: screen animation claims are dropped.
	pub fn begin_frame(&mut self) {
		self.claims.clear();
	}

	/// Current global frame.
	pub fn frame_count(&self) -> u64 {
		self.clock.frame_count()
	}

	/// Animations advance only on even frames.
	pub fn gate_open(&self) -> bool {
		self.frame_count() % 2 == 0
	}

	/// Records that the enemy collapse sound was requested this frame.
	pub fn request_collapse_sound(&mut self) {
		let frame = self.frame_count();
		self.ledger.record(frame);
	}

	/// Returns `true` if the collapse sound was requested this frame.
	pub fn collapse_sound_requested(&self) -> bool {
		self.ledger.contains(self.frame_count())
	}

	/// Plays a sound, deferring the enemy collapse sound to the sprite.
	///
	/// The collapse sound only gets recorded; the host plays it when its
	/// collapse effect starts.
	pub fn play_se(&mut self, se: &SoundEffect) {
		if *se == self.enemy_collapse_se {
			log::debug!("defer collapse sound to frame {}", self.frame_count());
			self.request_collapse_sound();
		} else {
			self.audio.play_se(se);
		}
	}

	/// Plays a sound immediately.
	pub fn play_se_now(&mut self, se: &SoundEffect) {
		self.audio.play_se(se);
	}

	/// Sound treated as the enemy collapse sound.
	pub fn enemy_collapse_se(&self) -> &SoundEffect {
		&self.enemy_collapse_se
	}

	/// Bitmap pool.
	pub fn pool(&self) -> &BitmapPool {
		&self.pool
	}

	/// Sprite settings.
	pub fn settings(&self) -> &SpriteSettings {
		&self.settings
	}

	/// Effect rules.
	pub fn effects(&self) -> &EffectRegistry {
		&self.effects
	}

	/// Screen animations claimed this frame.
	pub fn claims(&self) -> &ScreenClaims {
		&self.claims
	}
}

impl std::fmt::Debug for SceneContext {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SceneContext")
			.field("pool", &self.pool)
			.field("frame", &self.clock.frame_count())
			.field("claims", &self.claims)
			.field("ledger", &self.ledger)
			.finish_non_exhaustive()
	}
}
