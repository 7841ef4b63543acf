//! Error types for the sprite engine.

use thiserror::Error;

use crate::effect::EffectKind;

/// Errors reported by sprite engine operations.
///
/// None of these are fatal: the frame loop logs them and keeps running.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpriteError {
	/// An effect that needs the sprite bitmap was requested with no bitmap bound
	#[error("Cannot start {effect} effect: no bitmap is bound to the sprite")]
	MissingBitmap {
		/// Effect that was requested
		effect: EffectKind,
	},

	/// No rule is registered for the requested effect
	#[error("No rule registered for the {effect} effect")]
	UnregisteredEffect {
		/// Effect that was requested
		effect: EffectKind,
	},

	/// A sprite or bitmap was used after it had been disposed
	#[error("{what} has already been disposed")]
	AlreadyDisposed {
		/// Description of the disposed resource
		what: &'static str,
	},

	/// A bitmap was released that the pool never checked out
	#[error("Bitmap #{id} is not tracked by the pool")]
	UnknownBitmap {
		/// Bitmap identity
		id: u64,
	},

	/// A frame index outside the animation's frame table
	#[error("Frame index {index} out of range (animation has {available} frames)")]
	InvalidFrameIndex {
		/// Requested frame index
		index: usize,
		/// Number of frames actually stored
		available: usize,
	},

	/// The asset cache could not resolve an animation graphic
	#[error("Animation graphic '{name}' (hue {hue}) not found")]
	AssetNotFound {
		/// Graphic name
		name: String,
		/// Hue rotation
		hue: i32,
	},
}
