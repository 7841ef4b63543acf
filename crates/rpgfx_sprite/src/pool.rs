//! Reference-counted animation bitmaps.
//!
//! Several animations (and several hosts playing the same animation) share one
//! decoded graphic. The pool counts outstanding checkouts per bitmap and hands
//! the bitmap back to the asset cache for disposal exactly when the count drops
//! to zero.

use std::collections::HashMap;

use rpgfx_types::{animation::AnimationGraphic, error::SpriteError};

use crate::backend::{AnimationAssets, BitmapHandle};

#[derive(Debug)]
struct PoolEntry {
	bitmap: BitmapHandle,
	refs: usize,
}

/// Shared-resource pool for animation bitmaps.
///
/// Owned by the scene and only touched from the update thread, so plain counts
/// are enough.
pub struct BitmapPool {
	assets: Box<dyn AnimationAssets>,
	entries: HashMap<u64, PoolEntry>,
}

impl BitmapPool {
	/// Creates a pool over an asset cache.
	pub fn new(assets: impl AnimationAssets + 'static) -> Self {
		Self {
			assets: Box::new(assets),
			entries: HashMap::new(),
		}
	}

	/// Loads (or reuses) a graphic and takes one reference to it.
	pub fn checkout(&mut self, graphic: &AnimationGraphic) -> Result<BitmapHandle, SpriteError> {
		let bitmap = self.assets.load_animation(graphic)?;
		let entry = self.entries.entry(bitmap.id()).or_insert(PoolEntry {
			bitmap,
			refs: 0,
		});
		entry.refs += 1;
		log::trace!("checkout '{}' -> #{} (refs {})", graphic.name, bitmap.id(), entry.refs);
		Ok(bitmap)
	}

	/// Drops one reference; disposes the bitmap when none remain.
	///
	/// Returns `true` if this call disposed the bitmap.
	pub fn release(&mut self, bitmap: &BitmapHandle) -> Result<bool, SpriteError> {
		let Some(entry) = self.entries.get_mut(&bitmap.id()) else {
			return Err(SpriteError::UnknownBitmap {
				id: bitmap.id(),
			});
		};

		entry.refs -= 1;
		if entry.refs > 0 {
			return Ok(false);
		}

		if let Some(entry) = self.entries.remove(&bitmap.id()) {
			log::debug!("dispose animation bitmap #{}", entry.bitmap.id());
			self.assets.dispose(&entry.bitmap);
		}
		Ok(true)
	}

	/// Releases every bitmap in `bitmaps`, logging (not propagating) failures.
	pub fn release_all(&mut self, bitmaps: &mut Vec<BitmapHandle>) {
		for bitmap in bitmaps.drain(..) {
			if let Err(err) = self.release(&bitmap) {
				log::warn!("{}", err);
			}
		}
	}

	/// Outstanding references to a bitmap.
	pub fn ref_count(&self, bitmap: &BitmapHandle) -> usize {
		self.entries.get(&bitmap.id()).map_or(0, |entry| entry.refs)
	}

	/// Number of bitmaps currently referenced.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when no bitmap is referenced.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl std::fmt::Debug for BitmapPool {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BitmapPool").field("entries", &self.entries).finish_non_exhaustive()
	}
}
