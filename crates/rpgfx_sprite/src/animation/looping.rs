//! Looping animation channel.

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

use super::{AnimationTarget, CellSprites, checkout_graphics, show_frame, warn_short_frame_table};

#[derive(Debug)]
struct Looping {
	animation: Arc<Animation>,
	index: usize,
	graphics: Vec<BitmapHandle>,
	cells: CellSprites,
}

/// Plays an animation forever, cycling through its frames.
///
/// Timings fire on every pass and always count as hits.
#[derive(Debug, Default)]
pub struct LoopChannel {
	current: Option<Looping>,
}

impl LoopChannel {
	/// Creates an idle channel.
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts looping `animation`.
	///
	/// Requesting the animation already looping (the same instance) keeps its
	/// position; anything else restarts from frame 0.
	pub fn play(
		&mut self,
		animation: Arc<Animation>,
		pool: &mut BitmapPool,
		clock: &mut dyn FrameClock,
	) -> Result<(), SpriteError> {
		if self.is_playing(&animation) {
			return Ok(());
		}
		self.dispose(pool);

		let graphics = checkout_graphics(&animation, pool, clock)?;
		log::debug!("loop animation '{}'", animation.name);
		warn_short_frame_table(&animation);
		self.current = Some(Looping {
			animation,
			index: 0,
			graphics,
			cells: CellSprites::new(constants::MAX_CELLS),
		});
		Ok(())
	}

	/// Renders the current frame and advances, when `gate_open`.
	pub fn tick(&mut self, gate_open: bool, target: &mut AnimationTarget<'_>) {
		let Some(current) = self.current.as_mut() else {
			return;
		};
		if !gate_open || current.animation.frame_max == 0 {
			return;
		}

		show_frame(
			&current.animation,
			current.index,
			&mut current.cells,
			&current.graphics,
			true,
			target,
		);
		current.index = (current.index + 1) % current.animation.frame_max;
	}

	/// Stops looping and releases graphics. No-op when idle.
	pub fn dispose(&mut self, pool: &mut BitmapPool) {
		if let Some(mut current) = self.current.take() {
			log::debug!("dispose loop animation '{}'", current.animation.name);
			pool.release_all(&mut current.graphics);
			current.cells.dispose();
		}
	}

	/// Returns `true` if this exact animation instance is looping.
	pub fn is_playing(&self, animation: &Arc<Animation>) -> bool {
		self.current.as_ref().is_some_and(|current| Arc::ptr_eq(&current.animation, animation))
	}

	/// Animation being looped.
	pub fn animation(&self) -> Option<&Arc<Animation>> {
		self.current.as_ref().map(|current| &current.animation)
	}

	/// Frame rendered on the next gated tick.
	pub fn index(&self) -> Option<usize> {
		self.current.as_ref().map(|current| current.index)
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
