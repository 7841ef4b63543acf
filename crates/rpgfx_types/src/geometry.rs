//! Integer rectangles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Axis-aligned integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
	/// Left edge
	pub x: i32,
	/// Top edge
	pub y: i32,
	/// Width in pixels
	pub width: i32,
	/// Height in pixels
	pub height: i32,
}

impl Rect {
	/// Creates a new rectangle.
	pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Rectangle anchored at the origin.
	pub const fn sized(width: i32, height: i32) -> Self {
		Self::new(0, 0, width, height)
	}

	/// Returns the rectangle moved by `(dx, dy)`.
	pub const fn offset(self, dx: i32, dy: i32) -> Self {
		Self::new(self.x + dx, self.y + dy, self.width, self.height)
	}

	/// Half of the width and height, rounded down.
	pub const fn half_extents(&self) -> (i32, i32) {
		(self.width / 2, self.height / 2)
	}
}

impl fmt::Display for Rect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}, {}x{}]", self.x, self.y, self.width, self.height)
	}
}
