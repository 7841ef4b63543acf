//! Animation cell-sheet constants.

/// Width and height of one cell in the animation sheet (pixels)
pub const CELL_SIZE: i32 = 192;

/// Number of cell columns in an animation sheet
pub const SHEET_COLUMNS: i32 = 5;

/// Patterns at or above this value index the secondary graphic
pub const SECONDARY_PATTERN_BASE: i32 = 100;

/// Number of parallel cell sprites per animation channel
pub const MAX_CELLS: usize = 16;

/// Z-order of every animation cell sprite
pub const CELL_Z: i32 = 2000;

/// Cell pivot, the centre of a cell
pub const CELL_PIVOT: i32 = CELL_SIZE / 2;
