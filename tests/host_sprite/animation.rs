use std::sync::Arc;

use rpgfx_rs::prelude::*;

use crate::{Stage, enemy, sweep};

fn strike() -> Arc<Animation> {
	let animation = Animation::builder("Strike", "Slash")
		.frame(AnimationFrame::default())
		.frame(AnimationFrame::default())
		.frame(AnimationFrame::default())
		.frame(AnimationFrame::default())
		.timing(Timing::sound(1, SoundEffect::named("Damage1")).with_condition(TimingCondition::Hit))
		.timing(Timing::sound(1, SoundEffect::named("Evasion")).with_condition(TimingCondition::Miss))
		.timing(Timing::sound(1, SoundEffect::named("Swing")))
		.build();
	Arc::new(animation)
}

#[test]
fn test_timings_follow_outcome() {
	let mut stage = Stage::new();
	let mut hit = enemy(1, None);
	let mut miss = enemy(2, None);
	let animation = strike();
	hit.play_animation(Some(Arc::clone(&animation)), true, &mut stage.ctx).unwrap();
	miss.play_animation(Some(animation), false, &mut stage.ctx).unwrap();

	stage.frame(&mut [&mut hit, &mut miss]);

	assert_eq!(stage.audio.played_names(), vec!["Damage1", "Swing", "Evasion", "Swing"]);
	hit.dispose(&mut stage.ctx);
	miss.dispose(&mut stage.ctx);
}

#[test]
fn test_one_shot_runs_at_half_rate() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	host.play_animation(Some(strike()), true, &mut stage.ctx).unwrap();
	assert_eq!(stage.clock.reset_count(), 1);

	stage.frame(&mut [&mut host]);
	assert_eq!(host.animation().remaining(), 3);
	stage.frame(&mut [&mut host]);
	assert_eq!(host.animation().remaining(), 3);

	stage.frames(4, &mut host);
	assert_eq!(host.animation().remaining(), 1);
	assert!(host.is_effect_active());

	stage.frame(&mut [&mut host]);
	assert!(!host.animation().is_loaded());
	assert!(!host.is_effect_active());
	assert!(stage.ctx.pool().is_empty());
	// timings of frame 1 only; frame 0 is never shown
	assert_eq!(stage.audio.played_names(), vec!["Damage1", "Swing"]);
}

#[test]
fn test_cells_follow_host_opacity() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	host.appear(&stage.ctx).unwrap();
	host.play_animation(Some(sweep("Sweep", "Slash", 3)), true, &mut stage.ctx).unwrap();

	stage.frame(&mut [&mut host]);

	let cell = &host.animation().cells()[0];
	assert!(cell.visible);
	assert_eq!(host.sprite().opacity(), 16);
	assert_eq!(cell.opacity(), 16);
	assert_eq!((cell.x, cell.y), (330, 192));
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_secondary_graphic_cells() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	let animation = Animation::builder("Burst", "Slash")
		.secondary("Sparks", 0)
		.frame(AnimationFrame::default())
		.frame(AnimationFrame::from_cells(vec![
			CellRow::pattern_at(-1, 0, 0),
			CellRow::pattern_at(104, 0, 0),
		]))
		.build();
	host.play_animation(Some(Arc::new(animation)), true, &mut stage.ctx).unwrap();

	stage.frame(&mut [&mut host]);

	let graphics = host.animation().graphics().to_vec();
	let cells = host.animation().cells();
	assert_eq!(graphics.len(), 2);
	assert!(!cells[0].visible);
	assert!(cells[1].visible);
	assert_eq!(cells[1].bitmap, Some(graphics[1]));
	assert_eq!(cells[1].src_rect, Rect::new(768, 0, 192, 192));
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_loop_request_is_idempotent() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	let aura = sweep("Aura", "Aura", 4);
	host.play_loop_animation(Some(Arc::clone(&aura)), &mut stage.ctx).unwrap();

	stage.frames(4, &mut host);
	assert_eq!(host.loop_animation().index(), Some(2));

	host.play_loop_animation(Some(Arc::clone(&aura)), &mut stage.ctx).unwrap();
	assert_eq!(host.loop_animation().index(), Some(2));
	assert_eq!(stage.assets.load_count(), 1);
	assert!(!host.is_effect_active());

	host.play_loop_animation(Some(sweep("Aura", "Aura", 4)), &mut stage.ctx).unwrap();
	assert_eq!(host.loop_animation().index(), Some(0));

	host.play_loop_animation(None, &mut stage.ctx).unwrap();
	assert!(host.loop_animation().animation().is_none());
	assert!(stage.ctx.pool().is_empty());
}

#[test]
fn test_screen_animation_renders_once_per_frame() {
	let mut stage = Stage::new();
	let viewport = Viewport::shared(Rect::new(0, 0, 640, 480));
	let mut first = enemy(1, Some(viewport.clone()));
	let mut second = enemy(2, Some(viewport.clone()));
	let mut late = enemy(3, Some(viewport));
	let quake = Animation::builder("Quake", "Slash")
		.position(AnimationPosition::Screen)
		.frame(AnimationFrame::default())
		.frame(AnimationFrame::from_cells(vec![CellRow::pattern_at(0, 10, 0)]))
		.frame(AnimationFrame::default())
		.timing(Timing::sound(1, SoundEffect::named("Earth")))
		.build();
	let quake = Arc::new(quake);

	first.play_animation(Some(Arc::clone(&quake)), true, &mut stage.ctx).unwrap();
	second.play_animation(Some(Arc::clone(&quake)), true, &mut stage.ctx).unwrap();
	assert_eq!(stage.ctx.claims().len(), 1);
	assert_eq!(first.render_list().count(), 17);
	assert_eq!(second.render_list().count(), 1);

	stage.frame(&mut [&mut first, &mut second]);
	let cell = &first.animation().cells()[0];
	assert_eq!((cell.x, cell.y), (330, 240));
	assert_eq!(stage.audio.played_names(), vec!["Earth", "Earth"]);

	late.play_animation(Some(quake), true, &mut stage.ctx).unwrap();
	assert_eq!(late.render_list().count(), 17);

	first.dispose(&mut stage.ctx);
	second.dispose(&mut stage.ctx);
	late.dispose(&mut stage.ctx);
	assert!(stage.ctx.pool().is_empty());
}

#[test]
fn test_render_list_order() {
	let mut stage = Stage::new();
	let mut host = enemy(1, None);
	host.play_animation(Some(sweep("Sweep", "Slash", 3)), true, &mut stage.ctx).unwrap();
	host.play_loop_animation(Some(sweep("Aura", "Aura", 2)), &mut stage.ctx).unwrap();
	host.show_damage(7, false, &stage.ctx).unwrap();

	stage.frame(&mut [&mut host]);

	let one_shot = host.animation().graphics()[0];
	let looping = host.loop_animation().graphics()[0];
	let list: Vec<&SpriteState> = host.render_list().collect();
	assert_eq!(list.len(), 34);
	assert_eq!(list[0], host.sprite());
	assert_eq!(list[1].bitmap, Some(one_shot));
	assert_eq!(list[17].bitmap, Some(looping));
	assert_eq!(list[33].z, 3000);
	host.dispose(&mut stage.ctx);
}

#[test]
fn test_timing_flashes() {
	let mut stage = Stage::new();
	let viewport = Viewport::shared(Rect::new(0, 0, 640, 480));
	let mut host = enemy(1, Some(viewport.clone()));
	let flash = Animation::builder("Flash", "Slash")
		.frame(AnimationFrame::default())
		.frame(AnimationFrame::default())
		.frame(AnimationFrame::default())
		.timing(Timing::flash(1, FlashScope::Screen, Color::white(), 5))
		.timing(Timing::flash(1, FlashScope::Target, Color::rgb(255, 0, 0), 3))
		.timing(Timing::flash(2, FlashScope::HideTarget, Color::white(), 2))
		.build();
	host.play_animation(Some(Arc::new(flash)), true, &mut stage.ctx).unwrap();

	stage.frame(&mut [&mut host]);
	assert_eq!(viewport.borrow().flash.map(|flash| flash.remaining), Some(10));
	assert_eq!(host.sprite().flash.map(|flash| flash.remaining), Some(6));
	assert!(!host.sprite().is_flash_hidden());

	stage.frames(2, &mut host);
	assert!(host.sprite().is_flash_hidden());
	host.dispose(&mut stage.ctx);
}
