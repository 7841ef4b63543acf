//! Prelude module for `rpgfx_sprite`.
//!
//! Also re-exports the `rpgfx_types` prelude, so one glob import covers both
//! the engine and its data types.

#[doc(inline)]
pub use rpgfx_types::prelude::*;

#[doc(inline)]
pub use crate::animation::{LoopChannel, OneShotChannel, ScreenClaims};

#[doc(inline)]
pub use crate::backend::{
	AnimationAssets, AudioBackend, BitmapHandle, FrameClock, ManualClock, MemoryAssets,
	RecordingAudio,
};

#[doc(inline)]
pub use crate::collapse::CollapseSoundLedger;

#[doc(inline)]
pub use crate::damage::DamageOverlay;

#[doc(inline)]
pub use crate::effect::{Blink, EffectMachine, EffectRegistry, EffectRule};

#[doc(inline)]
pub use crate::host::HostSprite;

#[doc(inline)]
pub use crate::pool::BitmapPool;

#[doc(inline)]
pub use crate::scene::SceneContext;

#[doc(inline)]
pub use crate::settings::{CollapseStyle, FontSpec, SettingsError, SpriteSettings};

#[doc(inline)]
pub use crate::state::{SharedViewport, SpriteState, Viewport};
