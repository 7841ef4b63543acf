//! Floating damage popup.
//!
//! A popup is a child sprite carrying a 160x48 text bitmap drawn once at
//! creation. For 40 frames it hops up, settles and fades, then disposes
//! itself. A host shows at most one popup; a new one replaces the old.

use rpgfx_types::{color::Color, damage::DamageValue, geometry::Rect};

use crate::{
	settings::{FontSpec, SpriteSettings},
	state::SpriteState,
};

/// Popup bitmap width
pub const DAMAGE_BITMAP_WIDTH: i32 = 160;

/// Popup bitmap height
pub const DAMAGE_BITMAP_HEIGHT: i32 = 48;

/// Popup lifetime in frames
pub const DAMAGE_DURATION: u32 = 40;

/// Popup z-order, above animations
pub const DAMAGE_Z: i32 = 3000;

const DAMAGE_TEXT_RECT: Rect = Rect::new(0, 12, DAMAGE_BITMAP_WIDTH, 36);
const CRITICAL_TEXT_RECT: Rect = Rect::new(0, 0, DAMAGE_BITMAP_WIDTH, 20);
const OUTLINE_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// One centred text draw call recorded on a [`TextBitmap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStroke {
	/// Layout box; text is centred horizontally inside it
	pub rect: Rect,
	/// Text
	pub text: String,
	/// Font
	pub font: FontSpec,
	/// Fill color
	pub color: Color,
}

/// Display-list bitmap: the renderer rasterises the recorded strokes in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBitmap {
	width: i32,
	height: i32,
	strokes: Vec<TextStroke>,
	disposed: bool,
}

impl TextBitmap {
	/// Creates an empty bitmap.
	pub fn new(width: i32, height: i32) -> Self {
		Self {
			width,
			height,
			strokes: Vec::new(),
			disposed: false,
		}
	}

	/// Width in pixels.
	pub fn width(&self) -> i32 {
		self.width
	}

	/// Height in pixels.
	pub fn height(&self) -> i32 {
		self.height
	}

	/// Recorded draw calls, back to front.
	pub fn strokes(&self) -> &[TextStroke] {
		&self.strokes
	}

	/// Draws centred text.
	pub fn draw_text(&mut self, rect: Rect, text: &str, font: &FontSpec, color: Color) {
		if self.disposed {
			return;
		}
		self.strokes.push(TextStroke {
			rect,
			text: text.to_string(),
			font: font.clone(),
			color,
		});
	}

	/// Draws text with a 1px black outline: four black copies offset
	/// diagonally, then the text itself on top.
	pub fn draw_outlined_text(&mut self, rect: Rect, text: &str, font: &FontSpec, color: Color) {
		for (dx, dy) in OUTLINE_OFFSETS {
			self.draw_text(rect.offset(dx, dy), text, font, Color::black());
		}
		self.draw_text(rect, text, font, color);
	}

	/// Frees the bitmap; further calls are no-ops.
	pub fn dispose(&mut self) {
		self.strokes.clear();
		self.disposed = true;
	}

	/// Returns `true` after [`dispose`](Self::dispose).
	pub fn is_disposed(&self) -> bool {
		self.disposed
	}
}

/// Color of the damage text.
///
/// The miss check compares text before any numeric check, then recovery,
/// then critical, then normal.
pub fn damage_color(value: &DamageValue, critical: bool, settings: &SpriteSettings) -> Color {
	if matches!(value, DamageValue::Text(text) if *text == settings.miss_text) {
		return settings.miss_color;
	}
	if value.is_recovery() {
		return settings.recovery_color;
	}
	if critical {
		return settings.critical_color;
	}
	settings.normal_color
}

/// Per-frame vertical step for the frame `elapsed` frames into the popup.
pub fn jump_offset(elapsed: u32) -> i32 {
	match elapsed {
		1..=2 => -4,
		3..=4 => -2,
		5..=6 => 2,
		7..=12 => 4,
		_ => 0,
	}
}

/// A live popup.
#[derive(Debug, Clone, PartialEq)]
pub struct DamagePopup {
	value: DamageValue,
	sprite: SpriteState,
	bitmap: TextBitmap,
	remaining: u32,
	y_plus: i32,
}

impl DamagePopup {
	fn new(host: &SpriteState, value: DamageValue, critical: bool, settings: &SpriteSettings) -> Self {
		let value = if value.is_miss() {
			DamageValue::Text(settings.miss_text.clone())
		} else {
			value
		};

		let mut bitmap = TextBitmap::new(DAMAGE_BITMAP_WIDTH, DAMAGE_BITMAP_HEIGHT);
		let color = damage_color(&value, critical, settings);
		bitmap.draw_outlined_text(
			DAMAGE_TEXT_RECT,
			&value.display_text(),
			&settings.damage_font,
			color,
		);
		if critical {
			bitmap.draw_outlined_text(
				CRITICAL_TEXT_RECT,
				&settings.critical_text,
				&settings.critical_font,
				settings.critical_color,
			);
		}

		let mut sprite = SpriteState::new();
		sprite.src_rect = Rect::sized(DAMAGE_BITMAP_WIDTH, DAMAGE_BITMAP_HEIGHT);
		sprite.ox = DAMAGE_BITMAP_WIDTH / 2;
		sprite.oy = 20;
		sprite.x = host.x;
		sprite.y = base_y(host);
		sprite.z = DAMAGE_Z;

		Self {
			value,
			sprite,
			bitmap,
			remaining: DAMAGE_DURATION,
			y_plus: 0,
		}
	}

	/// Value shown (after miss-text substitution).
	pub fn value(&self) -> &DamageValue {
		&self.value
	}

	/// Popup sprite state.
	pub fn sprite(&self) -> &SpriteState {
		&self.sprite
	}

	/// Popup bitmap.
	pub fn bitmap(&self) -> &TextBitmap {
		&self.bitmap
	}

	/// Frames left.
	pub fn remaining(&self) -> u32 {
		self.remaining
	}

	/// Accumulated jump displacement.
	pub fn y_plus(&self) -> i32 {
		self.y_plus
	}

	fn dispose(&mut self) {
		self.bitmap.dispose();
		self.sprite.dispose();
	}
}

fn base_y(host: &SpriteState) -> i32 {
	host.y - host.oy / 2
}

/// The host's damage popup slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DamageOverlay {
	popup: Option<DamagePopup>,
}

impl DamageOverlay {
	/// Creates an empty slot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces any popup with a new one for `value`.
	pub fn show(
		&mut self,
		host: &SpriteState,
		value: DamageValue,
		critical: bool,
		settings: &SpriteSettings,
	) {
		self.dispose();
		log::debug!("show damage {} (critical: {})", value, critical);
		self.popup = Some(DamagePopup::new(host, value, critical, settings));
	}

	/// Advances the popup one frame.
	pub fn tick(&mut self, host: &SpriteState) {
		let Some(popup) = self.popup.as_mut() else {
			return;
		};

		popup.remaining -= 1;
		popup.y_plus += jump_offset(DAMAGE_DURATION - popup.remaining);
		popup.sprite.y = base_y(host) + popup.y_plus;
		popup.sprite.set_opacity(256 - (12 - popup.remaining as i32) * 32);

		if popup.remaining == 0 {
			self.dispose();
		}
	}

	/// Removes the popup. No-op when empty.
	pub fn dispose(&mut self) {
		if let Some(mut popup) = self.popup.take() {
			popup.dispose();
		}
	}

	/// Current popup.
	pub fn popup(&self) -> Option<&DamagePopup> {
		self.popup.as_ref()
	}

	/// Returns `true` while a popup is showing.
	pub fn is_active(&self) -> bool {
		self.popup.is_some()
	}

	/// Frames left; zero when empty.
	pub fn remaining(&self) -> u32 {
		self.popup.as_ref().map_or(0, |popup| popup.remaining)
	}
}
