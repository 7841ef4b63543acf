//! Prelude module for `rpgfx_types`.
//!
//! # Examples
//!
//! ```
//! use rpgfx_types::prelude::*;
//!
//! let se = SoundEffect::new("001-System01", 80, 100);
//! assert!(!se.is_silent());
//! assert_eq!(Color::transparent(), Color::default());
//! ```

#[doc(inline)]
pub use crate::animation::{
	Animation, AnimationFrame, AnimationGraphic, AnimationPosition, CellRow, FlashScope,
	GraphicSlot, Timing, TimingCondition,
};

#[doc(inline)]
pub use crate::audio::SoundEffect;

#[doc(inline)]
pub use crate::battler::BattlerRef;

#[doc(inline)]
pub use crate::color::{BlendType, Color};

#[doc(inline)]
pub use crate::damage::DamageValue;

#[doc(inline)]
pub use crate::effect::EffectKind;

#[doc(inline)]
pub use crate::error::SpriteError;

#[doc(inline)]
pub use crate::geometry::Rect;
