//! Presentation settings.
//!
//! Everything the battle layer may want to restyle without touching code:
//! damage fonts and colors, the miss/critical labels, the boss list and the
//! collapse look. Settings are read from TOML through the `config` crate; any
//! key left out keeps its default.
//!
//! ```toml
//! miss_text = "Dodge"
//! boss_ids = [17, 32]
//! collapse_style = "ace"
//!
//! [critical_color]
//! r = 255
//! g = 200
//! b = 0
//! ```

use std::path::Path;

use config::{Config, File, FileFormat};
use rpgfx_types::{color::Color, damage::MISS_TOKEN};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The document could not be read or did not match the schema
	#[error(transparent)]
	Config(#[from] config::ConfigError),
}

/// Font used for damage text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
	/// Font family
	pub name: String,
	/// Size in points
	pub size: u32,
}

impl FontSpec {
	/// Creates a font description.
	pub fn new(name: impl Into<String>, size: u32) -> Self {
		Self {
			name: name.into(),
			size,
		}
	}
}

/// Which look the whiten and collapse effects use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollapseStyle {
	/// Red additive collapse, reset on the last frame
	#[default]
	Classic,
	/// Pale half-strength collapse that keeps its tint
	Ace,
}

/// Engine-wide presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSettings {
	/// Font for damage numbers
	pub damage_font: FontSpec,
	/// Font for the critical label
	pub critical_font: FontSpec,
	/// Text shown in place of the literal miss token
	pub miss_text: String,
	/// Label drawn above critical hits
	pub critical_text: String,
	/// Normal damage color
	pub normal_color: Color,
	/// Recovery (negative damage) color
	pub recovery_color: Color,
	/// Miss color
	pub miss_color: Color,
	/// Critical hit color
	pub critical_color: Color,
	/// Enemy ids that collapse with the boss wipe
	pub boss_ids: Vec<u32>,
	/// Sound played on boss collapse; empty uses the enemy collapse sound
	pub boss_se: String,
	/// Whiten/collapse look
	pub collapse_style: CollapseStyle,
	/// Display width, used to centre screen animations without a viewport
	pub screen_width: i32,
	/// Display height
	pub screen_height: i32,
}

impl Default for SpriteSettings {
	fn default() -> Self {
		Self {
			damage_font: FontSpec::new("Arial Black", 32),
			critical_font: FontSpec::new("Arial Black", 20),
			miss_text: MISS_TOKEN.to_string(),
			critical_text: "CRITICAL".to_string(),
			normal_color: Color::rgb(255, 255, 255),
			recovery_color: Color::rgb(176, 255, 144),
			miss_color: Color::rgb(255, 255, 255),
			critical_color: Color::rgb(255, 255, 64),
			boss_ids: Vec::new(),
			boss_se: "051-Explosion04".to_string(),
			collapse_style: CollapseStyle::Classic,
			screen_width: 640,
			screen_height: 480,
		}
	}
}

impl SpriteSettings {
	/// Loads settings from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let config = Config::builder().add_source(File::from(path.as_ref())).build()?;
		Ok(config.try_deserialize()?)
	}

	/// Parses settings from an in-memory TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		let config =
			Config::builder().add_source(File::from_str(source, FileFormat::Toml)).build()?;
		Ok(config.try_deserialize()?)
	}

	/// Returns `true` if the enemy collapses with the boss wipe.
	pub fn is_boss(&self, enemy_id: u32) -> bool {
		self.boss_ids.contains(&enemy_id)
	}

	/// Display centre.
	pub fn screen_center(&self) -> (i32, i32) {
		(self.screen_width / 2, self.screen_height / 2)
	}
}
