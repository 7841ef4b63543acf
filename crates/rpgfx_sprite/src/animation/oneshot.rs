//! One-shot animation channel.

use std::sync::Arc;

use rpgfx_types::{
	animation::{Animation, constants},
	error::SpriteError,
};

use crate::{
	backend::{BitmapHandle, FrameClock},
	pool::BitmapPool,
	state::SpriteState,
};

use super::{
	AnimationTarget, CellSprites, ScreenClaims, checkout_graphics, show_frame, warn_short_frame_table,
};

#[derive(Debug)]
struct OneShot {
	animation: Arc<Animation>,
	hit: bool,
	remaining: usize,
	graphics: Vec<BitmapHandle>,
	cells: CellSprites,
}

/// Plays an animation once, then releases it.
///
/// The countdown starts at `frame_max`; each gated tick decrements it and
/// renders frame `frame_max - remaining`. Timings gated on hit/miss compare
/// against the outcome given to [`play`](Self::play).
#[derive(Debug, Default)]
pub struct OneShotChannel {
	current: Option<OneShot>,
}

impl OneShotChannel {
	/// Creates an idle channel.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the current animation with `animation`.
	///
	/// On error the channel is left idle.
	pub fn play(
		&mut self,
		animation: Arc<Animation>,
		hit: bool,
		pool: &mut BitmapPool,
		clock: &mut dyn FrameClock,
		claims: &mut ScreenClaims,
	) -> Result<(), SpriteError> {
		self.dispose(pool);

		let graphics = checkout_graphics(&animation, pool, clock)?;
		let cells = if claims.claim(&animation) {
			CellSprites::new(constants::MAX_CELLS)
		} else {
			log::trace!("'{}' already on screen this frame", animation.name);
			CellSprites::empty()
		};

		log::debug!("play animation '{}' (hit: {})", animation.name, hit);
		warn_short_frame_table(&animation);
		self.current = Some(OneShot {
			remaining: animation.frame_max,
			animation,
			hit,
			graphics,
			cells,
		});
		Ok(())
	}

	/// Advances one animation frame when `gate_open`.
	pub fn tick(&mut self, gate_open: bool, pool: &mut BitmapPool, target: &mut AnimationTarget<'_>) {
		let Some(current) = self.current.as_mut() else {
			return;
		};
		if !gate_open {
			return;
		}

		current.remaining = current.remaining.saturating_sub(1);
		if current.remaining > 0 {
			let frame_index = current.animation.frame_max - current.remaining;
			show_frame(
				&current.animation,
				frame_index,
				&mut current.cells,
				&current.graphics,
				current.hit,
				target,
			);
		} else {
			self.dispose(pool);
		}
	}

	/// Releases the animation's graphics and cell sprites. No-op when idle.
	pub fn dispose(&mut self, pool: &mut BitmapPool) {
		if let Some(mut current) = self.current.take() {
			log::debug!("dispose animation '{}'", current.animation.name);
			pool.release_all(&mut current.graphics);
			current.cells.dispose();
		}
	}

	/// Animation being played.
	pub fn animation(&self) -> Option<&Arc<Animation>> {
		self.current.as_ref().map(|current| &current.animation)
	}

	/// Outcome the animation was started with.
	pub fn hit(&self) -> Option<bool> {
		self.current.as_ref().map(|current| current.hit)
	}

	/// Frames left; zero when idle.
	pub fn remaining(&self) -> usize {
		self.current.as_ref().map_or(0, |current| current.remaining)
	}

	/// Returns `true` while frames remain.
	pub fn is_active(&self) -> bool {
		self.remaining() > 0
	}

	/// Returns `true` while holding graphics (even with no frames left).
	pub fn is_loaded(&self) -> bool {
		self.current.is_some()
	}

	/// Cell sprites in slot order.
	pub fn cells(&self) -> &[SpriteState] {
		self.current.as_ref().map_or(&[], |current| current.cells.sprites())
	}

	/// Graphics held by the channel.
	pub fn graphics(&self) -> &[BitmapHandle] {
		self.current.as_ref().map_or(&[], |current| current.graphics.as_slice())
	}
}
