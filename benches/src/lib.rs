//! Benchmark fixtures for rpgfx-rs
//!
//! Builds scenes and animations sized like a busy battle: a full troop of
//! enemies, each running a one-shot animation, a loop animation and a damage
//! popup at the same time.

use std::sync::Arc;

use rpgfx_sprite::{
	backend::{BitmapHandle, ManualClock, MemoryAssets, RecordingAudio},
	host::HostSprite,
	scene::SceneContext,
	settings::SpriteSettings,
};
use rpgfx_types::{
	animation::{Animation, AnimationFrame, CellRow, FlashScope, Timing, constants::MAX_CELLS},
	audio::SoundEffect,
	battler::BattlerRef,
	color::Color,
};

/// Animation with `frames` frames, every one filling all 16 cells.
///
/// Patterns alternate between the primary and secondary graphic so both
/// lookup paths are exercised.
pub fn dense_animation(name: &str, frames: usize) -> Animation {
	let mut builder = Animation::builder(name, "Bench1").secondary("Bench2", 0);
	for frame in 0..frames {
		let cells = (0..MAX_CELLS)
			.map(|slot| {
				let sheet = if slot % 2 == 0 {
					0
				} else {
					100
				};
				let pattern = (frame + slot) as i32 % 20 + sheet;
				let mut cell = CellRow::pattern_at(pattern, slot as i32 * 8 - 64, frame as i32 * 2);
				cell.zoom = 80 + slot as i32 * 5;
				cell.opacity = 255 - slot as i32 * 8;
				cell
			})
			.collect();
		builder = builder.frame(AnimationFrame::from_cells(cells));
	}
	builder
		.timing(Timing::sound(1, SoundEffect::named("Slash1")))
		.timing(Timing::flash(2, FlashScope::Target, Color::white(), 3))
		.build()
}

/// Scene backed by in-memory collaborators, with the bench graphics registered.
pub fn scene() -> (SceneContext, ManualClock) {
	let clock = ManualClock::new();
	let assets = MemoryAssets::new().with_graphic("Bench1", 960, 768).with_graphic("Bench2", 960, 768);
	let ctx = SceneContext::new(SpriteSettings::default(), clock.clone(), RecordingAudio::new(), assets);
	(ctx, clock)
}

/// `count` enemies, each animating on both channels with a damage popup.
pub fn busy_troop(ctx: &mut SceneContext, count: u32) -> Vec<HostSprite> {
	let one_shot = Arc::new(dense_animation("Burst", 24));
	let looping = Arc::new(dense_animation("Aura", 8));

	(0..count)
		.map(|id| {
			let mut host = HostSprite::new(None).with_battler(BattlerRef::Enemy {
				id,
			});
			host.set_bitmap(Some(BitmapHandle::new(10_000 + u64::from(id), 128, 128)));
			host.sprite_mut().move_to(100 + id as i32 * 60, 240);
			if let Err(err) = host.play_animation(Some(Arc::clone(&one_shot)), true, ctx) {
				eprintln!("Warning: could not start animation: {err}");
			}
			if let Err(err) = host.play_loop_animation(Some(Arc::clone(&looping)), ctx) {
				eprintln!("Warning: could not start loop animation: {err}");
			}
			host.blink_on();
			if let Err(err) = host.show_damage(i64::from(id) * 37, id % 3 == 0, ctx) {
				eprintln!("Warning: could not show damage: {err}");
			}
			host
		})
		.collect()
}
