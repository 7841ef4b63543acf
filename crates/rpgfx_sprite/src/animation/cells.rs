//! Cell sprites of one animation channel.

use rpgfx_types::animation::{AnimationFrame, CellRow, constants};

use crate::{backend::BitmapHandle, state::SpriteState};

/// Up to [`MAX_CELLS`](constants::MAX_CELLS) sprites, one per cell-table row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellSprites {
	sprites: Vec<SpriteState>,
}

impl CellSprites {
	/// Creates `count` hidden cell sprites.
	pub fn new(count: usize) -> Self {
		Self {
			sprites: vec![SpriteState::hidden(); count],
		}
	}

	/// A channel that renders nothing.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Cell sprites in slot order.
	pub fn sprites(&self) -> &[SpriteState] {
		&self.sprites
	}

	/// Number of cell sprites.
	pub fn len(&self) -> usize {
		self.sprites.len()
	}

	/// Returns `true` when the channel has no cell sprites.
	pub fn is_empty(&self) -> bool {
		self.sprites.is_empty()
	}

	/// Positions every cell sprite from `frame`'s cell table.
	///
	/// `graphics[0]` backs patterns below 100, `graphics[1]` the rest. Slots
	/// without a row, with a negative pattern, or whose graphic is missing are
	/// hidden.
	pub fn apply(
		&mut self,
		frame: &AnimationFrame,
		origin: (i32, i32),
		graphics: &[BitmapHandle],
		host_opacity: u8,
	) {
		for (slot, sprite) in self.sprites.iter_mut().enumerate() {
			let resolved = frame.cell(slot).and_then(|row| {
				let bitmap = graphics.get(row.graphic_slot()?.index())?;
				Some((row, *bitmap))
			});
			match resolved {
				Some((row, bitmap)) => place_cell(sprite, row, bitmap, origin, host_opacity),
				None => sprite.visible = false,
			}
		}
	}

	/// Frees every cell sprite.
	pub fn dispose(&mut self) {
		for sprite in &mut self.sprites {
			sprite.dispose();
		}
		self.sprites.clear();
	}
}

fn place_cell(
	sprite: &mut SpriteState,
	row: &CellRow,
	bitmap: BitmapHandle,
	origin: (i32, i32),
	host_opacity: u8,
) {
	sprite.bitmap = Some(bitmap);
	sprite.visible = true;
	sprite.src_rect = row.source_rect();
	sprite.x = origin.0 + row.x;
	sprite.y = origin.1 + row.y;
	sprite.z = constants::CELL_Z;
	sprite.ox = constants::CELL_PIVOT;
	sprite.oy = constants::CELL_PIVOT;
	sprite.zoom_x = row.scale();
	sprite.zoom_y = row.scale();
	sprite.angle = row.angle as f32;
	sprite.mirror = row.mirror;
	sprite.set_opacity(row.opacity * i32::from(host_opacity) / 255);
	sprite.blend = row.blend;
}
