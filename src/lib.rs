#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `rpgfx-rs` is a frame-driven sprite effects engine for turn-based RPG battles: effect
//! transitions, damage popups and cell-based animations with timed sounds and flashes.
//!
pub use rpgfx_internal::*;
