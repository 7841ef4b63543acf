//! Prelude module for `rpgfx_internal`.
//!
//! # Examples
//!
//! ```rust
//! use rpgfx_internal::prelude::*;
//!
//! let settings = SpriteSettings::default();
//! let mut ctx = SceneContext::new(settings, ManualClock::new(), RecordingAudio::new(), MemoryAssets::new());
//!
//! let mut host = HostSprite::new(Some(Viewport::shared(Rect::new(0, 0, 640, 480))));
//! host.show_damage(-120, false, &ctx).unwrap();
//! assert!(host.is_effect_active());
//! host.dispose(&mut ctx);
//! ```

// Re-export everything from the engine prelude (which includes the data types)
#[doc(inline)]
pub use rpgfx_sprite::prelude::*;

#[doc(inline)]
pub use rpgfx_sprite;

#[doc(inline)]
pub use rpgfx_types;
