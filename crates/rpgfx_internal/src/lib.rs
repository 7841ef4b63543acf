//! This module is separated into its own crate to keep the public facade of `rpgfx-rs` in one place, and should not be used directly.

/// `use rpgfx_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use rpgfx_sprite;
pub use rpgfx_types;

// Re-export the types most callers need at crate root
pub use rpgfx_sprite::{host::HostSprite, scene::SceneContext, settings::SpriteSettings};
pub use rpgfx_types::error::SpriteError;
