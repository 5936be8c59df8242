use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vivify_motion_core::{catalog, resolve_timing, sample_preset, Modifiers, PresetName, Repeat};

fn bench_resolve(c: &mut Criterion) {
    let modifiers = Modifiers {
        fast: true,
        ..Default::default()
    };
    c.bench_function("resolve_timing", |b| {
        b.iter(|| {
            resolve_timing(
                black_box(1.0),
                black_box(0.0),
                Repeat::Count(0),
                modifiers,
                false,
                None,
            )
        })
    });
}

fn bench_sample(c: &mut Criterion) {
    let preset = catalog().get(PresetName::BounceInDown);
    c.bench_function("sample_preset_mid", |b| {
        b.iter(|| sample_preset(black_box(preset), black_box(0.5)))
    });
}

criterion_group!(benches, bench_resolve, bench_sample);
criterion_main!(benches);
