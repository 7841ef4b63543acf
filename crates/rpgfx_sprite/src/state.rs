//! Render-facing sprite and viewport state.
//!
//! The engine writes plain values here every frame; the rendering backend reads
//! them back (see [`HostSprite::render_list`](crate::host::HostSprite::render_list))
//! and draws. Nothing in this module knows how pixels are produced.

use std::{cell::RefCell, rc::Rc};

use rpgfx_types::{
	color::{BlendType, Color, clamp_channel},
	geometry::Rect,
};

use crate::backend::BitmapHandle;

/// A pending flash request.
///
/// `color: None` hides the sprite for the duration instead of tinting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
	/// Flash tint, `None` to hide
	pub color: Option<Color>,
	/// Frames left
	pub remaining: u32,
}

impl Flash {
	/// Creates a flash lasting `duration` frames.
	pub fn new(color: Option<Color>, duration: u32) -> Self {
		Self {
			color,
			remaining: duration,
		}
	}

	/// Counts one frame down; returns `false` once the flash is over.
	fn tick(&mut self) -> bool {
		self.remaining = self.remaining.saturating_sub(1);
		self.remaining > 0
	}
}

/// Mutable state of one on-screen sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteState {
	/// Bound bitmap
	pub bitmap: Option<BitmapHandle>,
	/// Visibility
	pub visible: bool,
	/// Screen x
	pub x: i32,
	/// Screen y
	pub y: i32,
	/// Z-order
	pub z: i32,
	/// Origin x inside the bitmap
	pub ox: i32,
	/// Origin y inside the bitmap
	pub oy: i32,
	/// Horizontal scale
	pub zoom_x: f32,
	/// Vertical scale
	pub zoom_y: f32,
	/// Rotation in degrees
	pub angle: f32,
	/// Horizontal mirror
	pub mirror: bool,
	/// Blend mode
	pub blend: BlendType,
	/// Color overlay
	pub color: Color,
	/// Source rectangle inside the bitmap
	pub src_rect: Rect,
	/// Active flash, if any
	pub flash: Option<Flash>,
	opacity: u8,
	disposed: bool,
}

impl Default for SpriteState {
	fn default() -> Self {
		Self {
			bitmap: None,
			visible: true,
			x: 0,
			y: 0,
			z: 0,
			ox: 0,
			oy: 0,
			zoom_x: 1.0,
			zoom_y: 1.0,
			angle: 0.0,
			mirror: false,
			blend: BlendType::Normal,
			color: Color::transparent(),
			src_rect: Rect::default(),
			flash: None,
			opacity: 255,
			disposed: false,
		}
	}
}

impl SpriteState {
	/// Creates a visible sprite with no bitmap.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a hidden sprite, the initial state of animation cells.
	pub fn hidden() -> Self {
		Self {
			visible: false,
			..Self::default()
		}
	}

	/// Binds a bitmap and resets the source rectangle to cover it.
	pub fn set_bitmap(&mut self, bitmap: Option<BitmapHandle>) {
		self.src_rect = bitmap.map(|b| b.rect()).unwrap_or_default();
		self.bitmap = bitmap;
	}

	/// Opacity (0-255).
	pub fn opacity(&self) -> u8 {
		self.opacity
	}

	/// Sets opacity, clamping into `0..=255`.
	pub fn set_opacity(&mut self, opacity: i32) {
		self.opacity = clamp_channel(opacity);
	}

	/// Sets the overlay from signed components, clamping each channel.
	pub fn set_color(&mut self, r: i32, g: i32, b: i32, a: i32) {
		self.color = Color::clamped(r, g, b, a);
	}

	/// Sets position.
	pub fn move_to(&mut self, x: i32, y: i32) {
		self.x = x;
		self.y = y;
	}

	/// Starts a flash; a `None` color hides the sprite for the duration.
	pub fn flash(&mut self, color: Option<Color>, duration: u32) {
		self.flash = (duration > 0).then(|| Flash::new(color, duration));
	}

	/// Advances the active flash by one frame.
	pub fn update_flash(&mut self) {
		if let Some(flash) = self.flash.as_mut()
			&& !flash.tick()
		{
			self.flash = None;
		}
	}

	/// Returns `true` while a hiding flash is active.
	pub fn is_flash_hidden(&self) -> bool {
		matches!(self.flash, Some(Flash { color: None, .. }))
	}

	/// Releases the sprite; further calls are no-ops.
	pub fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		self.bitmap = None;
		self.visible = false;
		self.flash = None;
		self.disposed = true;
	}

	/// Returns `true` after [`dispose`](Self::dispose).
	pub fn is_disposed(&self) -> bool {
		self.disposed
	}
}

/// Logical screen region sprites are clipped to, with its own flash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
	/// Bounds on screen
	pub rect: Rect,
	/// Active flash, if any
	pub flash: Option<Flash>,
}

/// Viewports are shared by every sprite drawn inside them.
pub type SharedViewport = Rc<RefCell<Viewport>>;

impl Viewport {
	/// Creates a viewport.
	pub fn new(rect: Rect) -> Self {
		Self {
			rect,
			flash: None,
		}
	}

	/// Wraps the viewport for sharing between sprites.
	pub fn shared(rect: Rect) -> SharedViewport {
		Rc::new(RefCell::new(Self::new(rect)))
	}

	/// Centre of the viewport, relative to its own top-left corner.
	pub fn center(&self) -> (i32, i32) {
		self.rect.half_extents()
	}

	/// Starts a flash; a `None` color hides the contents for the duration.
	pub fn flash(&mut self, color: Option<Color>, duration: u32) {
		self.flash = (duration > 0).then(|| Flash::new(color, duration));
	}

	/// Advances the active flash by one frame.
	pub fn update(&mut self) {
		if let Some(flash) = self.flash.as_mut()
			&& !flash.tick()
		{
			self.flash = None;
		}
	}
}
