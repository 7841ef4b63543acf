//! Frame cell tables.
//!
//! Each animation frame is a table of up to [`MAX_CELLS`](super::constants::MAX_CELLS)
//! rows. Row `i` drives cell sprite `i`; missing rows and negative patterns hide
//! that sprite for the frame.

use serde::{Deserialize, Serialize};

use crate::{color::BlendType, geometry::Rect};

use super::constants;

/// Which of the two animation graphics a pattern is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicSlot {
	/// Patterns 0..100
	Primary,
	/// Patterns 100.. (second strip)
	Secondary,
}

impl GraphicSlot {
	/// Index into the channel's list of checked-out graphics.
	pub fn index(self) -> usize {
		match self {
			Self::Primary => 0,
			Self::Secondary => 1,
		}
	}
}

/// One row of a frame's cell table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CellRow {
	/// Sheet pattern; negative hides the cell
	pub pattern: i32,
	/// Horizontal offset from the animation origin
	pub x: i32,
	/// Vertical offset from the animation origin
	pub y: i32,
	/// Scale in percent
	pub zoom: i32,
	/// Rotation in degrees
	pub angle: i32,
	/// Horizontal mirror
	pub mirror: bool,
	/// Opacity (0-255) before host opacity is applied
	pub opacity: i32,
	/// Blend mode
	pub blend: BlendType,
}

impl Default for CellRow {
	fn default() -> Self {
		Self {
			pattern: -1,
			x: 0,
			y: 0,
			zoom: 100,
			angle: 0,
			mirror: false,
			opacity: 255,
			blend: BlendType::Normal,
		}
	}
}

impl CellRow {
	/// Convenience constructor for a plain cell at an offset.
	pub fn pattern_at(pattern: i32, x: i32, y: i32) -> Self {
		Self {
			pattern,
			x,
			y,
			..Self::default()
		}
	}

	/// Returns `true` when the row hides its sprite.
	pub fn is_hidden(&self) -> bool {
		self.pattern < 0
	}

	/// Graphic the pattern is cut from, `None` for hidden rows.
	pub fn graphic_slot(&self) -> Option<GraphicSlot> {
		if self.is_hidden() {
			None
		} else if self.pattern < constants::SECONDARY_PATTERN_BASE {
			Some(GraphicSlot::Primary)
		} else {
			Some(GraphicSlot::Secondary)
		}
	}

	/// Source rectangle inside the graphic selected by [`graphic_slot`](Self::graphic_slot).
	pub fn source_rect(&self) -> Rect {
		let local = self.pattern.max(0) % constants::SECONDARY_PATTERN_BASE;
		Rect::new(
			local % constants::SHEET_COLUMNS * constants::CELL_SIZE,
			local / constants::SHEET_COLUMNS * constants::CELL_SIZE,
			constants::CELL_SIZE,
			constants::CELL_SIZE,
		)
	}

	/// Scale factor (`zoom / 100`).
	pub fn scale(&self) -> f32 {
		self.zoom as f32 / 100.0
	}
}

/// A single animation frame: the cell table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationFrame {
	/// Rows, one per cell sprite
	#[serde(default)]
	pub cells: Vec<CellRow>,
}

impl AnimationFrame {
	/// Creates a frame from its cell rows.
	pub fn from_cells(cells: Vec<CellRow>) -> Self {
		Self {
			cells,
		}
	}

	/// Row for cell slot `index`, if the table has one.
	pub fn cell(&self, index: usize) -> Option<&CellRow> {
		self.cells.get(index)
	}

	/// Number of rows in the table.
	pub fn cell_count(&self) -> usize {
		self.cells.len()
	}
}
