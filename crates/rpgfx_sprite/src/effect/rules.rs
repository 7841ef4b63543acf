//! Built-in effect rules.
//!
//! `d` below is the number of frames left after the current frame's decrement.

use rpgfx_types::{
	color::{BlendType, Color},
	effect::EffectKind,
	error::SpriteError,
};

use crate::state::SpriteState;

use super::registry::EffectRule;

fn fixed(kind: EffectKind) -> u32 {
	kind.fixed_duration().unwrap_or_default()
}

/// Fade in: opacity = (16 - d) * 16.
#[derive(Debug, Clone, Copy, Default)]
pub struct Appear;

impl EffectRule for Appear {
	fn duration(&self, _sprite: &SpriteState) -> Result<u32, SpriteError> {
		Ok(fixed(EffectKind::Appear))
	}

	fn on_start(&self, sprite: &mut SpriteState) {
		sprite.set_opacity(0);
	}

	fn apply(&self, sprite: &mut SpriteState, remaining: u32, _total: u32) {
		sprite.set_opacity((16 - remaining as i32) * 16);
	}
}

/// Fade out: opacity = 256 - (32 - d) * 10.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disappear;

impl EffectRule for Disappear {
	fn duration(&self, _sprite: &SpriteState) -> Result<u32, SpriteError> {
		Ok(fixed(EffectKind::Disappear))
	}

	fn apply(&self, sprite: &mut SpriteState, remaining: u32, _total: u32) {
		sprite.set_opacity(256 - (32 - remaining as i32) * 10);
	}
}

/// White flash: overlay alpha = 128 - (16 - d) * 10.
#[derive(Debug, Clone, Copy)]
pub struct Whiten {
	color: Color,
}

impl Whiten {
	/// White overlay.
	pub fn classic() -> Self {
		Self {
			color: Color::white(),
		}
	}

	/// Same curve; the base overlay starts transparent.
	pub fn ace() -> Self {
		Self {
			color: Color::new(255, 255, 255, 0),
		}
	}
}

impl EffectRule for Whiten {
	fn duration(&self, _sprite: &SpriteState) -> Result<u32, SpriteError> {
		Ok(fixed(EffectKind::Whiten))
	}

	fn apply(&self, sprite: &mut SpriteState, remaining: u32, _total: u32) {
		sprite.color = self.color.with_alpha(128 - (16 - remaining as i32) * 10);
	}
}

/// Tinted additive fade: opacity = 256 - (48 - d) * 6.
#[derive(Debug, Clone, Copy)]
pub struct Collapse {
	color: Color,
	reset_at_end: bool,
}

impl Collapse {
	/// Red tint, restored to normal blending on the last frame.
	pub fn classic() -> Self {
		Self {
			color: Color::new(255, 64, 64, 255),
			reset_at_end: true,
		}
	}

	/// Pale red, half-strength tint, kept after the last frame.
	pub fn ace() -> Self {
		Self {
			color: Color::new(255, 128, 128, 128),
			reset_at_end: false,
		}
	}
}

impl EffectRule for Collapse {
	fn duration(&self, _sprite: &SpriteState) -> Result<u32, SpriteError> {
		Ok(fixed(EffectKind::Collapse))
	}

	fn apply(&self, sprite: &mut SpriteState, remaining: u32, _total: u32) {
		sprite.blend = BlendType::Add;
		sprite.color = self.color;
		sprite.set_opacity(256 - (48 - remaining as i32) * 6);
		if remaining == 0 && self.reset_at_end {
			sprite.blend = BlendType::Normal;
			sprite.color = Color::transparent();
		}
	}
}

/// Vertical wipe lasting one frame per bitmap row.
///
/// alpha = d * 120 / H, the sprite shakes horizontally by 4 px every other
/// frame and the source rectangle slides up one row per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct BossCollapse;

impl BossCollapse {
	/// Overlay/opacity alpha for `remaining` frames left out of `height`.
	pub fn alpha(remaining: u32, height: u32) -> i32 {
		if height == 0 {
			return 0;
		}
		(remaining * 120 / height) as i32
	}
}

impl EffectRule for BossCollapse {
	fn duration(&self, sprite: &SpriteState) -> Result<u32, SpriteError> {
		match sprite.bitmap {
			Some(bitmap) if bitmap.height() > 0 => Ok(bitmap.height() as u32),
			_ => Err(SpriteError::MissingBitmap {
				effect: EffectKind::BossCollapse,
			}),
		}
	}

	fn apply(&self, sprite: &mut SpriteState, remaining: u32, total: u32) {
		let alpha = Self::alpha(remaining, total);
		if let Some(bitmap) = sprite.bitmap {
			sprite.ox = bitmap.width() / 2 + (remaining % 2) as i32 * 4 - 2;
		}
		sprite.blend = BlendType::Add;
		sprite.set_color(255, 255, 255, 255 - alpha);
		sprite.set_opacity(alpha);
		sprite.src_rect.y -= 1;
	}
}
