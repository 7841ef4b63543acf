//! Integration tests for the host sprite facade of `rpgfx-rs`

mod animation;
mod effects;
mod lifecycle;

use std::sync::Arc;

use rpgfx_rs::prelude::*;

/// A scene with in-memory collaborators and handles to inspect them.
pub struct Stage {
	pub ctx: SceneContext,
	pub clock: ManualClock,
	pub audio: RecordingAudio,
	pub assets: MemoryAssets,
}

impl Stage {
	pub fn new() -> Self {
		Self::with_settings(SpriteSettings::default())
	}

	pub fn with_settings(settings: SpriteSettings) -> Self {
		let clock = ManualClock::new();
		let audio = RecordingAudio::new();
		let assets = MemoryAssets::new()
			.with_graphic("Slash", 960, 384)
			.with_graphic("Sparks", 960, 192)
			.with_graphic("Aura", 960, 192);
		let ctx = SceneContext::new(settings, clock.clone(), audio.clone(), assets.clone());
		Self {
			ctx,
			clock,
			audio,
			assets,
		}
	}

	/// Runs one display frame for every host.
	pub fn frame(&mut self, hosts: &mut [&mut HostSprite]) {
		self.ctx.begin_frame();
		for host in hosts.iter_mut() {
			host.update(&mut self.ctx);
		}
		self.clock.advance();
	}

	pub fn frames(&mut self, count: usize, host: &mut HostSprite) {
		for _ in 0..count {
			self.frame(&mut [&mut *host]);
		}
	}
}

/// A 96x96 enemy standing at (320, 240), anchored at its feet.
pub fn enemy(id: u32, viewport: Option<SharedViewport>) -> HostSprite {
	let mut host = HostSprite::new(viewport).with_battler(BattlerRef::Enemy {
		id,
	});
	host.set_bitmap(Some(BitmapHandle::new(1000 + u64::from(id), 96, 96)));
	let sprite = host.sprite_mut();
	sprite.move_to(320, 240);
	sprite.ox = 48;
	sprite.oy = 96;
	host
}

/// `frames` frames of a single cell; frame `i` sits at `x = 10 * i`.
pub fn sweep(name: &str, graphic: &str, frames: i32) -> Arc<Animation> {
	let animation = (0..frames)
		.fold(Animation::builder(name, graphic), |builder, i| {
			builder.frame(AnimationFrame::from_cells(vec![CellRow::pattern_at(i, 10 * i, 0)]))
		})
		.build();
	Arc::new(animation)
}
