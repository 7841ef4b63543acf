//! Animation asset types.
//!
//! An [`Animation`] is read-only data produced by the game database: an ordered
//! list of frames, each holding a cell table, plus timing events that fire sounds
//! and flashes on specific frames.
//!
//! # Cell sheet
//!
//! Graphics are cut into a fixed grid of 192x192 cells, five per row:
//!
//! ```text
//! pattern p (0..100)   -> primary graphic,   rect (p % 5 * 192, p / 5 * 192, 192, 192)
//! pattern p (100..200) -> secondary graphic, rect computed from p - 100
//! pattern p < 0        -> cell hidden
//! ```
//!
//! # Examples
//!
//! ```
//! use rpgfx_types::animation::{Animation, AnimationFrame, AnimationPosition, CellRow};
//!
//! let anim = Animation::builder("Slash", "003-Attack01")
//!     .position(AnimationPosition::Center)
//!     .frame(AnimationFrame::from_cells(vec![CellRow::pattern_at(0, 0, 0)]))
//!     .frame(AnimationFrame::from_cells(vec![CellRow::pattern_at(1, 8, 0)]))
//!     .build();
//!
//! assert_eq!(anim.frame_max, 2);
//! assert!(anim.frame(1).is_ok());
//! assert!(anim.frame(2).is_err());
//! ```

pub mod constants;
pub mod frame;
pub mod timing;


use serde::{Deserialize, Serialize};

use crate::error::SpriteError;

pub use self::frame::{AnimationFrame, CellRow, GraphicSlot};
pub use self::timing::{FlashScope, Timing, TimingCondition};

/// Where an animation is anchored relative to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPosition {
	/// Top edge of the host bitmap
	Head,
	/// Centre of the host bitmap
	#[default]
	Center,
	/// Bottom edge of the host bitmap
	Feet,
	/// Centre of the viewport (or display), independent of the host
	Screen,
}

/// Name and hue of an animation graphic, the asset-cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationGraphic {
	/// Graphic name
	pub name: String,
	/// Hue rotation in degrees
	#[serde(default)]
	pub hue: i32,
}

impl AnimationGraphic {
	/// Creates a graphic key.
	pub fn new(name: impl Into<String>, hue: i32) -> Self {
		Self {
			name: name.into(),
			hue,
		}
	}
}

/// A complete animation asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
	/// Database id
	#[serde(default)]
	pub id: u32,
	/// Display name
	#[serde(default)]
	pub name: String,
	/// Graphic for patterns 0..100
	pub graphic: AnimationGraphic,
	/// Graphic for patterns 100..200
	#[serde(default)]
	pub secondary_graphic: Option<AnimationGraphic>,
	/// Anchor relative to the host
	#[serde(default)]
	pub position: AnimationPosition,
	/// Number of frames the animation plays
	pub frame_max: usize,
	/// Frame cell tables
	#[serde(default)]
	pub frames: Vec<AnimationFrame>,
	/// Sound and flash events
	#[serde(default)]
	pub timings: Vec<Timing>,
}

impl Animation {
	/// Starts building an animation with the given name and primary graphic.
	pub fn builder(name: impl Into<String>, graphic: impl Into<String>) -> AnimationBuilder {
		AnimationBuilder::new(name.into(), graphic.into())
	}

	/// Frame `index`, or [`SpriteError::InvalidFrameIndex`] when the table is shorter.
	pub fn frame(&self, index: usize) -> Result<&AnimationFrame, SpriteError> {
		self.frames.get(index).ok_or(SpriteError::InvalidFrameIndex {
			index,
			available: self.frames.len(),
		})
	}

	/// Timings that fire on `frame` for the given outcome, in declaration order.
	pub fn timings_at(&self, frame: usize, hit: bool) -> impl Iterator<Item = &Timing> {
		self.timings.iter().filter(move |timing| timing.fires_on(frame, hit))
	}

	/// Graphics to check out when the animation starts, primary first.
	pub fn graphics(&self) -> impl Iterator<Item = &AnimationGraphic> {
		std::iter::once(&self.graphic).chain(self.secondary_graphic.iter())
	}

	/// Returns `true` for screen-anchored animations.
	pub fn targets_screen(&self) -> bool {
		self.position == AnimationPosition::Screen
	}
}

/// Builder for [`Animation`], mostly used by tests and demos.
#[derive(Debug, Clone)]
pub struct AnimationBuilder {
	animation: Animation,
	frame_max: Option<usize>,
}

impl AnimationBuilder {
	fn new(name: String, graphic: String) -> Self {
		Self {
			animation: Animation {
				id: 0,
				name,
				graphic: AnimationGraphic::new(graphic, 0),
				secondary_graphic: None,
				position: AnimationPosition::default(),
				frame_max: 0,
				frames: Vec::new(),
				timings: Vec::new(),
			},
			frame_max: None,
		}
	}

	/// Sets the database id.
	pub fn id(mut self, id: u32) -> Self {
		self.animation.id = id;
		self
	}

	/// Sets the primary graphic hue.
	pub fn hue(mut self, hue: i32) -> Self {
		self.animation.graphic.hue = hue;
		self
	}

	/// Sets the secondary graphic.
	pub fn secondary(mut self, name: impl Into<String>, hue: i32) -> Self {
		self.animation.secondary_graphic = Some(AnimationGraphic::new(name, hue));
		self
	}

	/// Sets the anchor.
	pub fn position(mut self, position: AnimationPosition) -> Self {
		self.animation.position = position;
		self
	}

	/// Appends a frame.
	pub fn frame(mut self, frame: AnimationFrame) -> Self {
		self.animation.frames.push(frame);
		self
	}

	/// Appends a timing.
	pub fn timing(mut self, timing: Timing) -> Self {
		self.animation.timings.push(timing);
		self
	}

	/// Overrides the frame count (defaults to the number of frames added).
	pub fn frame_max(mut self, frame_max: usize) -> Self {
		self.frame_max = Some(frame_max);
		self
	}

	/// Finishes the animation.
	pub fn build(mut self) -> Animation {
		self.animation.frame_max = self.frame_max.unwrap_or(self.animation.frames.len());
		self.animation
	}
}
