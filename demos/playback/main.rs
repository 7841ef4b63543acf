//! Animation playback demo.
//!
//! Plays an animation (loaded from JSON, or a built-in sample) on a single
//! enemy sprite, optionally together with an effect and a damage popup, and
//! prints what the sprite looks like on every frame.
//!
//! ```text
//! cargo run --example playback -- --effect collapse --damage 120 --critical
//! cargo run --example playback -- --animation fire.json --frames 60 --json
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
	sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rpgfx_rs::{
	prelude::*,
	rpgfx_sprite::damage::DamagePopup,
	rpgfx_types::animation::constants,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "playback")]
#[command(author = "rpgfx-rs project")]
#[command(version)]
#[command(about = "Play a battle animation on a sprite and trace every frame", long_about = None)]
struct Cli {
	/// Animation JSON file; a built-in sample is used when omitted
	#[arg(short, long, value_name = "FILE")]
	animation: Option<PathBuf>,

	/// Settings TOML file
	#[arg(short, long, value_name = "FILE")]
	settings: Option<PathBuf>,

	/// Number of display frames to run
	#[arg(short, long, value_name = "COUNT", default_value_t = 60)]
	frames: u64,

	/// Effect started together with the animation
	#[arg(short, long, value_enum, default_value_t = EffectArg::None)]
	effect: EffectArg,

	/// Play the animation as a loop instead of once
	#[arg(long = "loop", default_value_t = false)]
	looping: bool,

	/// Play the animation as a miss (miss-only timings fire)
	#[arg(long, default_value_t = false)]
	miss: bool,

	/// Damage value to pop up (negative for recovery)
	#[arg(short, long, value_name = "VALUE", allow_hyphen_values = true)]
	damage: Option<i64>,

	/// Mark the damage as critical
	#[arg(long, default_value_t = false)]
	critical: bool,

	/// Treat the sprite as a boss enemy
	#[arg(long, default_value_t = false)]
	boss: bool,

	/// Print the trace as JSON lines
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EffectArg {
	None,
	Appear,
	Escape,
	Whiten,
	Collapse,
}

const ENEMY_ID: u32 = 1;

#[derive(Serialize)]
struct TraceRow {
	frame: u64,
	effect: Option<String>,
	effect_remaining: u32,
	opacity: u8,
	color_alpha: u8,
	cells: usize,
	damage_y: Option<i32>,
	damage_opacity: Option<u8>,
	flash: Option<u32>,
	sounds: Vec<String>,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let cli = Cli::parse();

	let mut settings = match &cli.settings {
		Some(path) => SpriteSettings::load(path).with_context(|| format!("Failed to load {}", path.display()))?,
		None => SpriteSettings::default(),
	};
	if cli.boss {
		settings.boss_ids.push(ENEMY_ID);
	}

	let animation = Arc::new(match &cli.animation {
		Some(path) => load_animation(path)?,
		None => sample_animation(),
	});
	log::info!("{} frames, {} timings", animation.frame_max, animation.timings.len());

	let clock = ManualClock::new();
	let audio = RecordingAudio::new();
	let assets = MemoryAssets::new();
	for graphic in animation.graphics() {
		assets.register(graphic.name.clone(), 960, 768);
	}
	let mut ctx = SceneContext::new(settings, clock.clone(), audio.clone(), assets);

	let viewport = Viewport::shared(Rect::new(0, 0, 640, 480));
	let mut host = HostSprite::new(Some(viewport.clone())).with_battler(BattlerRef::Enemy {
		id: ENEMY_ID,
	});
	host.set_bitmap(Some(BitmapHandle::new(0, 96, 96)));
	let sprite = host.sprite_mut();
	sprite.move_to(320, 300);
	sprite.ox = 48;
	sprite.oy = 96;

	if cli.looping {
		host.play_loop_animation(Some(Arc::clone(&animation)), &mut ctx)?;
	} else {
		host.play_animation(Some(Arc::clone(&animation)), !cli.miss, &mut ctx)?;
	}
	match cli.effect {
		EffectArg::None => {}
		EffectArg::Appear => host.appear(&ctx)?,
		EffectArg::Escape => host.escape(&ctx)?,
		EffectArg::Whiten => host.whiten(&ctx)?,
		EffectArg::Collapse => {
			ctx.request_collapse_sound();
			host.collapse(&mut ctx)?;
		}
	}
	if let Some(damage) = cli.damage {
		let value = if cli.miss {
			DamageValue::miss()
		} else {
			DamageValue::from(damage)
		};
		host.show_damage(value, cli.critical, &ctx)?;
	}

	for frame in 0..cli.frames {
		ctx.begin_frame();
		audio.clear();
		host.update(&mut ctx);
		viewport.borrow_mut().update();

		let row = trace(frame, &host, audio.played_names());
		if cli.json {
			println!("{}", serde_json::to_string(&row)?);
		} else {
			print_row(&row);
		}
		clock.advance();
	}

	host.dispose(&mut ctx);
	log::info!("pool empty after dispose: {}", ctx.pool().is_empty());
	Ok(())
}

fn load_animation(path: &Path) -> Result<Animation> {
	let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
	serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// A short slash: one cell sweeping right, a hit sound and a red target flash.
fn sample_animation() -> Animation {
	let mut builder = Animation::builder("Slash", "Attack1").id(1);
	for i in 0..8 {
		let mut cell = CellRow::pattern_at(i, -40 + i * 10, -10 + i * 2);
		cell.opacity = 255 - i * 20;
		builder = builder.frame(AnimationFrame::from_cells(vec![cell]));
	}
	builder
		.timing(Timing::sound(1, SoundEffect::new("Slash1", 80, 100)))
		.timing(Timing::sound(3, SoundEffect::named("Damage1")).with_condition(TimingCondition::Hit))
		.timing(Timing::sound(3, SoundEffect::named("Evasion")).with_condition(TimingCondition::Miss))
		.timing(
			Timing::flash(3, FlashScope::Target, Color::new(255, 64, 64, 160), 4)
				.with_condition(TimingCondition::Hit),
		)
		.build()
}

fn trace(frame: u64, host: &HostSprite, sounds: Vec<String>) -> TraceRow {
	let sprite = host.sprite();
	let popup = host.damage().popup().map(DamagePopup::sprite);
	TraceRow {
		frame,
		effect: host.effect().kind().map(|kind| kind.to_string()),
		effect_remaining: host.effect().remaining(),
		opacity: sprite.opacity(),
		color_alpha: sprite.color.a,
		cells: host.render_list().skip(1).filter(|cell| cell.visible && cell.z == constants::CELL_Z).count(),
		damage_y: popup.map(|popup| popup.y),
		damage_opacity: popup.map(SpriteState::opacity),
		flash: sprite.flash.map(|flash| flash.remaining),
		sounds,
	}
}

fn print_row(row: &TraceRow) {
	let effect = match &row.effect {
		Some(effect) => format!("{effect}({})", row.effect_remaining),
		None => "-".to_string(),
	};
	let damage = match (row.damage_y, row.damage_opacity) {
		(Some(y), Some(opacity)) => format!("y={y} a={opacity}"),
		_ => "-".to_string(),
	};
	println!(
		"{:>4} | {:<16} | opacity {:>3} | tint {:>3} | cells {:>2} | damage {:<12} | flash {:>2} | {}",
		row.frame,
		effect,
		row.opacity,
		row.color_alpha,
		row.cells,
		damage,
		row.flash.unwrap_or(0),
		row.sounds.join(", "),
	);
}
