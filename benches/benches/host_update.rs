//! Benchmark suite for the per-frame host update
//!
//! Measures how long one display frame takes for a single host and for a
//! whole troop with every channel busy.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::{hint::black_box, sync::Arc};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rpgfx_benches::{busy_troop, dense_animation, scene};
use rpgfx_sprite::{animation::CellSprites, backend::BitmapHandle, host::HostSprite};
use rpgfx_types::animation::constants::MAX_CELLS;

/// One gated frame of cell resolution, without timings or the host around it
fn bench_cell_resolution(c: &mut Criterion) {
	let animation = dense_animation("Cells", 1);
	let frame = &animation.frames[0];
	let graphics = [BitmapHandle::new(1, 960, 768), BitmapHandle::new(2, 960, 768)];
	let mut cells = CellSprites::new(MAX_CELLS);

	let mut group = c.benchmark_group("cells");
	group.throughput(Throughput::Elements(MAX_CELLS as u64));
	group.bench_function("apply_frame", |b| {
		b.iter(|| {
			cells.apply(black_box(frame), black_box((320, 240)), &graphics, black_box(200));
		});
	});
	group.finish();
}

/// A single host running both animation channels through a whole one-shot
fn bench_single_host(c: &mut Criterion) {
	let mut group = c.benchmark_group("host");
	let animation = Arc::new(dense_animation("Burst", 24));

	group.bench_function("play_through", |b| {
		b.iter(|| {
			let (mut ctx, clock) = scene();
			let mut host = HostSprite::new(None);
			if host.play_animation(Some(Arc::clone(&animation)), true, &mut ctx).is_err() {
				return;
			}
			while host.is_effect_active() {
				ctx.begin_frame();
				host.update(&mut ctx);
				clock.advance();
			}
			host.dispose(&mut ctx);
			black_box(ctx.pool().len());
		});
	});
	group.finish();
}

/// One display frame for a troop of increasingly many busy enemies
fn bench_troop_frame(c: &mut Criterion) {
	let mut group = c.benchmark_group("troop_frame");

	for count in [1u32, 4, 8] {
		let (mut ctx, clock) = scene();
		let mut troop = busy_troop(&mut ctx, count);

		group.throughput(Throughput::Elements(u64::from(count)));
		group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
			b.iter(|| {
				ctx.begin_frame();
				for host in &mut troop {
					host.update(&mut ctx);
				}
				clock.advance();
				black_box(troop.iter().map(|host| host.render_list().count()).sum::<usize>())
			});
		});

		for host in &mut troop {
			host.dispose(&mut ctx);
		}
	}

	group.finish();
}

criterion_group!(benches, bench_cell_resolution, bench_single_host, bench_troop_frame);

criterion_main!(benches);
