//! Collaborator interfaces.
//!
//! The engine never touches a GPU, a mixer or the file system. It talks to the
//! host application through three narrow traits:
//!
//! - [`FrameClock`]: the global frame counter
//! - [`AudioBackend`]: fire-and-forget sound effects
//! - [`AnimationAssets`]: the animation graphic cache
//!
//! [`memory`] provides in-memory implementations used by tests, benches and the
//! playback demo.

pub mod memory;

use rpgfx_types::{
	animation::AnimationGraphic, audio::SoundEffect, error::SpriteError, geometry::Rect,
};

pub use self::memory::{ManualClock, MemoryAssets, RecordingAudio};

/// Global, monotonic frame counter.
pub trait FrameClock {
	/// Frames elapsed since start-up.
	fn frame_count(&self) -> u64;

	/// Tells the display loop that a slow operation (asset load) just happened,
	/// so it should not try to catch up on skipped frames.
	fn reset_frame_timing(&mut self);
}

/// Sound effect playback.
pub trait AudioBackend {
	/// Plays a sound effect once.
	fn play_se(&mut self, se: &SoundEffect);
}

/// Decoded animation graphics, keyed by name and hue.
pub trait AnimationAssets {
	/// Returns the bitmap for `graphic`, decoding it if needed.
	///
	/// Loading the same graphic twice while it is alive must return the same
	/// bitmap identity.
	fn load_animation(&mut self, graphic: &AnimationGraphic) -> Result<BitmapHandle, SpriteError>;

	/// Frees a bitmap. Called exactly once, when the last reference is released.
	fn dispose(&mut self, bitmap: &BitmapHandle);
}

/// Opaque reference to a decoded bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitmapHandle {
	id: u64,
	width: i32,
	height: i32,
}

impl BitmapHandle {
	/// Creates a handle for a bitmap of the given size.
	pub const fn new(id: u64, width: i32, height: i32) -> Self {
		Self {
			id,
			width,
			height,
		}
	}

	/// Bitmap identity.
	pub const fn id(&self) -> u64 {
		self.id
	}

	/// Width in pixels.
	pub const fn width(&self) -> i32 {
		self.width
	}

	/// Height in pixels.
	pub const fn height(&self) -> i32 {
		self.height
	}

	/// Full-bitmap rectangle.
	pub const fn rect(&self) -> Rect {
		Rect::sized(self.width, self.height)
	}
}
