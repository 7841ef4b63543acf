//! Animation player.
//!
//! A host carries two independent channels: a [`OneShotChannel`] for
//! battle animations and a [`LoopChannel`] for state animations. Both advance
//! only on even global frames and share the same per-frame work in
//! [`show_frame`]: place the cell sprites, then fire the frame's timings.

pub mod cells;
pub mod claims;
pub mod looping;
pub mod oneshot;

use rpgfx_types::animation::{Animation, AnimationPosition, FlashScope, Timing};
use rpgfx_types::error::SpriteError;

use crate::{
	backend::{AudioBackend, BitmapHandle, FrameClock},
	pool::BitmapPool,
	state::{SharedViewport, SpriteState},
};

pub use self::cells::CellSprites;
pub use self::claims::ScreenClaims;
pub use self::looping::LoopChannel;
pub use self::oneshot::OneShotChannel;

/// Everything a frame of animation touches besides its own cells.
pub struct AnimationTarget<'a> {
	/// The host sprite (origin source, flash target)
	pub host: &'a mut SpriteState,
	/// Viewport the host is drawn in, for screen anchoring and screen flashes
	pub viewport: Option<&'a SharedViewport>,
	/// Sound output
	pub audio: &'a mut dyn AudioBackend,
	/// Fallback center for screen animations without a viewport
	pub screen_center: (i32, i32),
}

impl std::fmt::Debug for AnimationTarget<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AnimationTarget")
			.field("host", &self.host)
			.field("viewport", &self.viewport)
			.field("screen_center", &self.screen_center)
			.finish_non_exhaustive()
	}
}

/// Screen point cell offsets are relative to.
///
/// Screen animations center on the viewport (or the screen). Other positions
/// start from the center of the host's drawn rectangle: `Head` moves up by
/// half the bitmap height, `Feet` down by the same amount. A host without a
/// bitmap counts as zero-sized.
pub fn animation_origin(
	animation: &Animation,
	host: &SpriteState,
	viewport: Option<&SharedViewport>,
	screen_center: (i32, i32),
) -> (i32, i32) {
	if animation.targets_screen() {
		return viewport.map_or(screen_center, |viewport| viewport.borrow().center());
	}

	let (width, height) = host.bitmap.map_or((0, 0), |bitmap| (bitmap.width(), bitmap.height()));
	let x = host.x - host.ox + width / 2;
	let y = host.y - host.oy + height / 2;
	match animation.position {
		AnimationPosition::Head => (x, y - height / 2),
		AnimationPosition::Feet => (x, y + height / 2),
		AnimationPosition::Center | AnimationPosition::Screen => (x, y),
	}
}

/// Plays a timing's sound and flash.
///
/// Flash durations are stored in animation frames and doubled into display
/// frames. A screen flash without a viewport is dropped.
pub fn process_timing(timing: &Timing, target: &mut AnimationTarget<'_>) {
	if !timing.se.is_silent() {
		target.audio.play_se(&timing.se);
	}

	let duration = timing.flash_duration * 2;
	match timing.flash_scope {
		FlashScope::None => {}
		FlashScope::Target => target.host.flash(Some(timing.flash_color), duration),
		FlashScope::Screen => {
			if let Some(viewport) = target.viewport {
				viewport.borrow_mut().flash(Some(timing.flash_color), duration);
			}
		}
		FlashScope::HideTarget => target.host.flash(None, duration),
	}
}

/// Renders frame `index` of `animation` into `cells` and fires its timings.
///
/// An index past the stored frames leaves the cells untouched and skips the
/// frame's timings.
pub fn show_frame(
	animation: &Animation,
	index: usize,
	cells: &mut CellSprites,
	graphics: &[BitmapHandle],
	hit: bool,
	target: &mut AnimationTarget<'_>,
) {
	match animation.frame(index) {
		Ok(frame) => {
			let origin = animation_origin(animation, target.host, target.viewport, target.screen_center);
			cells.apply(frame, origin, graphics, target.host.opacity());
		}
		Err(err) => {
			log::trace!("animation '{}': {}", animation.name, err);
			return;
		}
	}

	for timing in animation.timings_at(index, hit) {
		process_timing(timing, target);
	}
}

/// Warns once when `frame_max` runs past the stored frames.
pub(crate) fn warn_short_frame_table(animation: &Animation) {
	if animation.frame_max > animation.frames.len() {
		log::warn!(
			"animation '{}': frame_max {} exceeds {} stored frames, missing frames are skipped",
			animation.name,
			animation.frame_max,
			animation.frames.len()
		);
	}
}

/// Checks out every graphic `animation` uses, primary first.
///
/// On failure the graphics acquired so far are released. Loading restarts the
/// clock's frame timing so the decode time is not caught up with skipped
/// frames.
pub(crate) fn checkout_graphics(
	animation: &Animation,
	pool: &mut BitmapPool,
	clock: &mut dyn FrameClock,
) -> Result<Vec<BitmapHandle>, SpriteError> {
	let mut graphics = Vec::with_capacity(2);
	for graphic in animation.graphics() {
		match pool.checkout(graphic) {
			Ok(bitmap) => graphics.push(bitmap),
			Err(err) => {
				pool.release_all(&mut graphics);
				return Err(err);
			}
		}
	}
	clock.reset_frame_timing();
	Ok(graphics)
}
