//! This crate provides the plain data types shared by the `rpgfx-rs` sprite engine.
//!
//! # Contents
//!
//! - **Color / `BlendType`**: color overlays and blend modes written to sprite states
//! - **Rect**: source sub-rectangles and viewport bounds
//! - **`SoundEffect`**: sound descriptors handed to the audio backend
//! - **Animation**: the read-only animation asset (frames, cell rows, timings)
//! - **`DamageValue` / `EffectKind` / `BattlerRef`**: requests coming from the battle layer
//! - **`SpriteError`**: the unified error type
//!
//! # Examples
//!
//! ```
//! use rpgfx_types::prelude::*;
//!
//! let frame = AnimationFrame::from_cells(vec![CellRow::pattern_at(104, 0, 0)]);
//! let cell = frame.cell(0).unwrap();
//! assert_eq!(cell.graphic_slot(), Some(GraphicSlot::Secondary));
//! assert_eq!(cell.source_rect(), Rect::new(4 * 192, 0, 192, 192));
//! ```

pub mod animation;
pub mod audio;
pub mod battler;
pub mod color;
pub mod damage;
pub mod effect;
pub mod error;
pub mod geometry;

/// `use rpgfx_types::prelude::*;` to import commonly used items.
pub mod prelude;
