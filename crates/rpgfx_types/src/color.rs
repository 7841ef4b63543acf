//! Color overlay and blend mode types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color, used for sprite color overlays, flashes and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	#[serde(default = "opaque")]
	pub a: u8,
}

fn opaque() -> u8 {
	255
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Creates a transparent black color, the "no overlay" value.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}

	/// Opaque white.
	pub const fn white() -> Self {
		Self::rgb(255, 255, 255)
	}

	/// Opaque black.
	pub const fn black() -> Self {
		Self::rgb(0, 0, 0)
	}

	/// Creates a color from signed components, clamping each into `0..=255`.
	///
	/// Effect formulas routinely overshoot (an alpha of `-32`, an opacity of `256`);
	/// the value that reaches the renderer is always clamped.
	pub fn clamped(r: i32, g: i32, b: i32, a: i32) -> Self {
		Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b), clamp_channel(a))
	}

	/// Returns the same color with a different (clamped) alpha.
	pub fn with_alpha(self, alpha: i32) -> Self {
		Self {
			a: clamp_channel(alpha),
			..self
		}
	}

	/// Returns `true` when the overlay has no visible contribution.
	pub const fn is_transparent(&self) -> bool {
		self.a == 0
	}
}

/// Clamps a signed channel value into `0..=255`.
pub fn clamp_channel(value: i32) -> u8 {
	value.clamp(0, 255) as u8
}

impl Default for Color {
	fn default() -> Self {
		Self::transparent()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Sprite blend mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlendType {
	/// Normal alpha blending
	#[default]
	Normal = 0,
	/// Additive blending
	Add = 1,
	/// Subtractive blending
	Subtract = 2,
}

impl BlendType {
	/// Converts the numeric value stored in animation cell tables.
	///
	/// Unknown values fall back to [`BlendType::Normal`].
	pub fn from_u8(value: u8) -> Self {
		match value {
			1 => Self::Add,
			2 => Self::Subtract,
			_ => Self::Normal,
		}
	}

	/// Converts `BlendType` to u8
	pub fn to_u8(self) -> u8 {
		self as u8
	}
}

impl fmt::Display for BlendType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Normal => write!(f, "Normal"),
			Self::Add => write!(f, "Add"),
			Self::Subtract => write!(f, "Subtract"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_color_rgb() {
		let color = Color::rgb(255, 128, 64);
		assert_eq!(color.a, 255);
		assert_eq!(color.r, 255);
	}

	#[test]
	fn test_color_clamped() {
		let color = Color::clamped(300, -5, 128, 256);
		assert_eq!(color, Color::new(255, 0, 128, 255));
	}

	#[test]
	fn test_with_alpha() {
		let color = Color::white().with_alpha(-32);
		assert_eq!(color, Color::new(255, 255, 255, 0));
		assert!(color.is_transparent());
	}

	#[test]
	fn test_color_default_alpha_when_deserializing() {
		let color: Color = serde_json::from_str(r#"{"r":176,"g":255,"b":144}"#).unwrap();
		assert_eq!(color, Color::rgb(176, 255, 144));
	}

	#[test]
	fn test_blend_from_u8() {
		assert_eq!(BlendType::from_u8(0), BlendType::Normal);
		assert_eq!(BlendType::from_u8(1), BlendType::Add);
		assert_eq!(BlendType::from_u8(2), BlendType::Subtract);
		assert_eq!(BlendType::from_u8(9), BlendType::Normal);
		assert_eq!(BlendType::Add.to_u8(), 1);
	}
}
