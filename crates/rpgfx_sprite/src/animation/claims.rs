//! Per-frame dedupe of screen-anchored animations.
//!
//! A screen animation looks the same whichever host plays it, so when several
//! hosts request the same one in a single frame only the first renders cells.
//! The set lives for one global frame; the scene clears it in
//! [`SceneContext::begin_frame`](crate::scene::SceneContext::begin_frame).

use std::sync::Arc;

use rpgfx_types::animation::Animation;

/// Screen animations already given cell sprites this frame.
#[derive(Debug, Default)]
pub struct ScreenClaims {
	claimed: Vec<Arc<Animation>>,
}

impl ScreenClaims {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` if the caller should create cell sprites for `animation`.
	///
	/// Host-anchored animations are always granted.
	pub fn claim(&mut self, animation: &Arc<Animation>) -> bool {
		if !animation.targets_screen() {
			return true;
		}
		if self.claimed.iter().any(|claimed| Arc::ptr_eq(claimed, animation)) {
			return false;
		}
		self.claimed.push(Arc::clone(animation));
		true
	}

	/// Forgets every claim.
	pub fn clear(&mut self) {
		self.claimed.clear();
	}

	/// Number of claimed animations.
	pub fn len(&self) -> usize {
		self.claimed.len()
	}

	/// Returns `true` when nothing was claimed.
	pub fn is_empty(&self) -> bool {
		self.claimed.is_empty()
	}
}
