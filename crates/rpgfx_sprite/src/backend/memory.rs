//! In-memory collaborators.
//!
//! Every type here is a cheap handle over shared state: clone one, hand the
//! clone to a [`SceneContext`](crate::scene::SceneContext) and keep the other
//! to drive or inspect it.

use std::{
	cell::{Cell, RefCell},
	collections::HashMap,
	rc::Rc,
};

use rpgfx_types::{animation::AnimationGraphic, audio::SoundEffect, error::SpriteError};

use super::{AnimationAssets, AudioBackend, BitmapHandle, FrameClock};

/// Frame clock advanced by hand.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
	frame: Rc<Cell<u64>>,
	resets: Rc<Cell<u32>>,
}

impl ManualClock {
	/// Creates a clock at frame 0.
	pub fn new() -> Self {
		Self::default()
	}

	/// Moves to the next frame.
	pub fn advance(&self) {
		self.frame.set(self.frame.get() + 1);
	}

	/// Jumps to an absolute frame.
	pub fn set_frame(&self, frame: u64) {
		self.frame.set(frame);
	}

	/// Number of timing resets requested so far.
	pub fn reset_count(&self) -> u32 {
		self.resets.get()
	}
}

impl FrameClock for ManualClock {
	fn frame_count(&self) -> u64 {
		self.frame.get()
	}

	fn reset_frame_timing(&mut self) {
		self.resets.set(self.resets.get() + 1);
	}
}

/// Audio backend that records every request instead of playing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
	played: Rc<RefCell<Vec<SoundEffect>>>,
}

impl RecordingAudio {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything played so far, oldest first.
	pub fn played(&self) -> Vec<SoundEffect> {
		self.played.borrow().clone()
	}

	/// Names of everything played so far.
	pub fn played_names(&self) -> Vec<String> {
		self.played.borrow().iter().map(|se| se.name.clone()).collect()
	}

	/// Forgets recorded requests.
	pub fn clear(&self) {
		self.played.borrow_mut().clear();
	}
}

impl AudioBackend for RecordingAudio {
	fn play_se(&mut self, se: &SoundEffect) {
		log::debug!("play se {}", se);
		self.played.borrow_mut().push(se.clone());
	}
}

#[derive(Debug, Default)]
struct AssetStore {
	sizes: HashMap<String, (i32, i32)>,
	live: HashMap<(String, i32), BitmapHandle>,
	loads: u32,
	disposed: Vec<u64>,
	next_id: u64,
}

/// Animation graphic cache backed by a table of known graphic sizes.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
	store: Rc<RefCell<AssetStore>>,
}

impl MemoryAssets {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a graphic and its pixel size.
	pub fn register(&self, name: impl Into<String>, width: i32, height: i32) {
		self.store.borrow_mut().sizes.insert(name.into(), (width, height));
	}

	/// Builder-style [`register`](Self::register).
	pub fn with_graphic(self, name: impl Into<String>, width: i32, height: i32) -> Self {
		self.register(name, width, height);
		self
	}

	/// Number of bitmaps currently decoded.
	pub fn live_count(&self) -> usize {
		self.store.borrow().live.len()
	}

	/// Number of decodes performed (cache misses).
	pub fn load_count(&self) -> u32 {
		self.store.borrow().loads
	}

	/// Ids of disposed bitmaps, in disposal order.
	pub fn disposed(&self) -> Vec<u64> {
		self.store.borrow().disposed.clone()
	}
}

impl AnimationAssets for MemoryAssets {
	fn load_animation(&mut self, graphic: &AnimationGraphic) -> Result<BitmapHandle, SpriteError> {
		let mut store = self.store.borrow_mut();
		let key = (graphic.name.clone(), graphic.hue);
		if let Some(bitmap) = store.live.get(&key) {
			return Ok(*bitmap);
		}

		let Some(&(width, height)) = store.sizes.get(&graphic.name) else {
			return Err(SpriteError::AssetNotFound {
				name: graphic.name.clone(),
				hue: graphic.hue,
			});
		};

		store.next_id += 1;
		store.loads += 1;
		let bitmap = BitmapHandle::new(store.next_id, width, height);
		store.live.insert(key, bitmap);
		Ok(bitmap)
	}

	fn dispose(&mut self, bitmap: &BitmapHandle) {
		let mut store = self.store.borrow_mut();
		store.live.retain(|_, live| live.id() != bitmap.id());
		store.disposed.push(bitmap.id());
	}
}
