use std::sync::Arc;

use rpgfx_rs::prelude::*;

use crate::{Stage, enemy, sweep};

#[test]
fn test_pool_shared_across_hosts() {
	let mut stage = Stage::new();
	let mut short = enemy(1, None);
	let mut long = enemy(2, None);
	short.play_animation(Some(sweep("Cut", "Slash", 2)), true, &mut stage.ctx).unwrap();
	long.play_animation(Some(sweep("Cleave", "Slash", 6)), true, &mut stage.ctx).unwrap();

	let bitmap = short.animation().graphics()[0];
	assert_eq!(long.animation().graphics()[0], bitmap);
	assert_eq!(stage.ctx.pool().ref_count(&bitmap), 2);
	assert_eq!(stage.assets.load_count(), 1);

	for _ in 0..3 {
		stage.frame(&mut [&mut short, &mut long]);
	}
	assert!(!short.animation().is_loaded());
	assert_eq!(stage.ctx.pool().ref_count(&bitmap), 1);
	assert!(stage.assets.disposed().is_empty());

	long.dispose(&mut stage.ctx);
	assert!(stage.ctx.pool().is_empty());
	assert_eq!(stage.assets.disposed(), vec![bitmap.id()]);
	short.dispose(&mut stage.ctx);
}

#[test_log::test]
fn test_dispose_releases_children() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	host.play_animation(Some(sweep("Cut", "Slash", 4)), true, &mut stage.ctx).unwrap();
	host.play_loop_animation(Some(sweep("Aura", "Aura", 4)), &mut stage.ctx).unwrap();
	host.show_damage(12, true, &stage.ctx).unwrap();
	host.whiten(&stage.ctx).unwrap();
	host.blink_on();
	stage.frame(&mut [&mut host]);

	host.dispose(&mut stage.ctx);

	assert!(host.is_disposed());
	assert!(stage.ctx.pool().is_empty());
	assert_eq!(stage.assets.live_count(), 0);
	assert!(!host.is_effect_active());
	assert!(!host.is_blinking());
	assert!(host.damage().popup().is_none());
	assert_eq!(host.render_list().count(), 1);
	assert!(host.sprite().is_disposed());

	host.dispose(&mut stage.ctx);
	host.update(&mut stage.ctx);
	assert_eq!(
		host.play_animation(Some(sweep("Cut", "Slash", 4)), true, &mut stage.ctx),
		Err(SpriteError::AlreadyDisposed {
			what: "host sprite",
		})
	);
	assert!(stage.ctx.pool().is_empty());
}

#[test_log::test]
fn test_missing_graphic_is_reported() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	let broken = Animation::builder("Broken", "Nowhere").frame(AnimationFrame::default()).build();

	let result = host.play_animation(Some(Arc::new(broken)), true, &mut stage.ctx);

	assert_eq!(
		result,
		Err(SpriteError::AssetNotFound {
			name: "Nowhere".to_string(),
			hue: 0,
		})
	);
	assert!(!host.animation().is_loaded());
	stage.frame(&mut [&mut host]);
	host.play_animation(Some(sweep("Cut", "Slash", 2)), true, &mut stage.ctx).unwrap();
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_deferred_collapse_sound() {
	let mut stage = Stage::new();
	let mut first = enemy(1, None);
	let mut second = enemy(2, None);
	let mut late = enemy(3, None);

	stage.ctx.play_se(&SoundEffect::named("Collapse1"));
	assert!(stage.audio.played().is_empty());
	first.collapse(&mut stage.ctx).unwrap();
	second.collapse(&mut stage.ctx).unwrap();
	assert_eq!(stage.audio.played_names(), vec!["Collapse1", "Collapse1"]);

	stage.frame(&mut [&mut first, &mut second]);
	late.collapse(&mut stage.ctx).unwrap();
	assert_eq!(stage.audio.played().len(), 2);
}

#[test]
fn test_ace_style_from_settings() {
	let settings = SpriteSettings::from_toml_str(
		r#"
		collapse_style = "ace"
		boss_ids = [3]
		"#,
	)
	.unwrap();
	assert!(settings.is_boss(3));
	let mut stage = Stage::with_settings(settings);
	let mut host = enemy(1, None);
	host.collapse(&mut stage.ctx).unwrap();

	stage.frames(48, &mut host);

	assert!(!host.is_effect_active());
	assert_eq!(host.sprite().color, Color::new(255, 128, 128, 128));
	assert_eq!(host.sprite().blend, BlendType::Add);
	assert_eq!(host.sprite().opacity(), 0);
}
