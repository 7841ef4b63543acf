use rpgfx_rs::prelude::*;

use crate::{Stage, enemy};

#[test]
fn test_collapse_end_to_end() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	host.collapse(&mut stage.ctx).unwrap();

	let mut opacities = Vec::new();
	for _ in 0..48 {
		stage.frame(&mut [&mut host]);
		opacities.push(i32::from(host.sprite().opacity()));
	}

	let expected: Vec<i32> = (0..48).rev().map(|d| (256 - (48 - d) * 6).clamp(0, 255)).collect();
	assert_eq!(opacities, expected);
	assert_eq!(host.effect().kind(), None);
	assert!(!host.is_effect_active());
	assert_eq!(host.sprite().color, Color::transparent());
	assert_eq!(host.sprite().blend, BlendType::Normal);
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_effect_durations() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);

	for (kind, frames) in [
		(EffectKind::Appear, 16),
		(EffectKind::Disappear, 32),
		(EffectKind::Whiten, 16),
		(EffectKind::Collapse, 48),
		(EffectKind::BossCollapse, 96),
	] {
		host.start_effect(kind, &stage.ctx).unwrap();
		let mut remaining = vec![host.effect().remaining()];
		while host.effect().is_active() {
			stage.frame(&mut [&mut host]);
			remaining.push(host.effect().remaining());
		}
		let expected: Vec<u32> = (0..=frames).rev().collect();
		assert_eq!(remaining, expected, "{kind}");
	}
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_appear_starts_invisible() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	host.sprite_mut().set_opacity(200);

	host.appear(&stage.ctx).unwrap();
	assert_eq!(host.sprite().opacity(), 0);

	stage.frame(&mut [&mut host]);
	assert_eq!(host.sprite().opacity(), 16);

	stage.frames(15, &mut host);
	assert_eq!(host.sprite().opacity(), 255);
	assert!(!host.is_effect_active());
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_new_effect_resets_baseline() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	host.collapse(&mut stage.ctx).unwrap();
	stage.frames(10, &mut host);
	host.sprite_mut().ox = 0;

	host.whiten(&stage.ctx).unwrap();

	let sprite = host.sprite();
	assert_eq!(sprite.blend, BlendType::Normal);
	assert_eq!(sprite.color, Color::transparent());
	assert_eq!(sprite.opacity(), 255);
	assert_eq!(sprite.ox, 48);
	assert_eq!(host.effect().kind(), Some(EffectKind::Whiten));
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_boss_collapse_wipes_bitmap() {
	let settings = SpriteSettings {
		boss_ids: vec![9],
		..SpriteSettings::default()
	};
	let mut stage = Stage::with_settings(settings);
	let mut boss = enemy(9, None);
	boss.collapse(&mut stage.ctx).unwrap();

	stage.frame(&mut [&mut boss]);
	let sprite = boss.sprite();
	assert_eq!(sprite.blend, BlendType::Add);
	assert_eq!(sprite.src_rect.y, -1);
	assert_eq!(sprite.opacity(), (95 * 120 / 96) as u8);
	assert_eq!(sprite.color.a, 255 - (95 * 120 / 96) as u8);

	let mut previous = i32::from(boss.sprite().opacity());
	while boss.effect().is_active() {
		stage.frame(&mut [&mut boss]);
		let opacity = i32::from(boss.sprite().opacity());
		assert!(opacity <= previous);
		previous = opacity;
	}
	assert_eq!(previous, 0);
	assert_eq!(boss.sprite().src_rect.y, -96);
	boss.dispose(&mut stage.ctx);
}

#[test]
fn test_blink_runs_alongside_effects() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	host.blink_on();
	host.blink_on();
	host.escape(&stage.ctx).unwrap();

	stage.frames(32, &mut host);
	assert!(host.is_blinking());
	assert!(!host.is_effect_active());
	assert_eq!(host.blink().step(), Some(0));
	assert_eq!(host.sprite().color, Color::white().with_alpha(96));

	host.blink_off();
	assert!(!host.is_blinking());
	assert_eq!(host.sprite().color, Color::transparent());
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_damage_popup_lifecycle() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	host.show_damage(-120, false, &stage.ctx).unwrap();

	let popup = host.damage().popup().unwrap();
	let stroke = popup.bitmap().strokes().last().unwrap();
	assert_eq!(stroke.text, "120");
	assert_eq!(stroke.color, stage.ctx.settings().recovery_color);
	assert_eq!((popup.sprite().x, popup.sprite().y, popup.sprite().z), (320, 192, 3000));
	assert!(host.is_effect_active());

	stage.frames(39, &mut host);
	assert_eq!(host.damage().remaining(), 1);
	stage.frame(&mut [&mut host]);
	assert!(host.damage().popup().is_none());
	assert!(!host.is_effect_active());
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_critical_miss_and_replacement() {
	let stage = Stage::new();
	let mut host = enemy(1, None);

	host.show_damage(DamageValue::miss(), true, &stage.ctx).unwrap();
	let miss = host.damage().popup().unwrap().bitmap().strokes().to_vec();
	assert!(miss.iter().any(|stroke| stroke.text == "CRITICAL"));
	let text = miss.iter().find(|stroke| stroke.text == "Miss").unwrap();
	assert_eq!(text.color, Color::black());
	assert_eq!(miss[4].color, stage.ctx.settings().miss_color);

	host.show_damage(42, false, &stage.ctx).unwrap();
	let popup = host.damage().popup().unwrap();
	assert_eq!(popup.value(), &DamageValue::Amount(42));
	assert_eq!(popup.bitmap().strokes().len(), 5);
	assert_eq!(host.damage().remaining(), 40);
}
