//! This crate is the per-frame sprite effects engine of `rpgfx-rs`.
//!
//! # Contents
//!
//! - **`HostSprite`**: a battler sprite with one effect slot, a blink, a damage popup and two
//!   animation channels, updated once per display frame
//! - **`SceneContext`**: the collaborators and shared state every host of a scene uses
//! - **`BitmapPool`**: reference-counted animation graphics
//! - **`EffectRegistry`**: effect kinds mapped to their per-frame rules
//! - **`SpriteSettings`**: presentation settings loaded from TOML
//! - **backend**: collaborator traits and in-memory doubles
//!
//! # Examples
//!
//! ```
//! use rpgfx_sprite::prelude::*;
//!
//! let clock = ManualClock::new();
//! let assets = MemoryAssets::new().with_graphic("Slash", 960, 384);
//! let mut ctx = SceneContext::new(SpriteSettings::default(), clock.clone(), RecordingAudio::new(), assets);
//!
//! let mut host = HostSprite::new(None);
//! host.collapse(&mut ctx).unwrap();
//! for _ in 0..48 {
//! 	ctx.begin_frame();
//! 	host.update(&mut ctx);
//! 	clock.advance();
//! }
//! assert!(!host.is_effect_active());
//! host.dispose(&mut ctx);
//! ```

pub mod animation;
pub mod backend;
pub mod collapse;
pub mod damage;
pub mod effect;
pub mod host;
pub mod pool;
pub mod scene;
pub mod settings;
pub mod state;

/// `use rpgfx_sprite::prelude::*;` to import commonly used items.
pub mod prelude;
