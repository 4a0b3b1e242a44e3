use std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::{Array2, Array3};
use stimfix::{
    fix_stim_artifact_epochs, fix_stim_artifact_raw, CorrectionMode, Epochs, Event, EventTable, Raw,
    StimConfig,
};

const SFREQ: f64 = 1000.0;

fn signal(n_ch: usize, n_t: usize) -> Array2<f64> {
    Array2::from_shape_fn((n_ch, n_t), |(c, t)| ((c * 31 + t) as f64 * 0.01).sin())
}

fn bench_raw(c: &mut Criterion) {
    // 64 ch × 10 min, one stimulus per second.
    let base = Raw::new(signal(64, 600_000), SFREQ, 0).unwrap();
    let events = EventTable::new((1..600).map(|s| Event::new(s * 1000, 0, 1)).collect());

    for mode in [CorrectionMode::Linear, CorrectionMode::Window] {
        let cfg = StimConfig::new(-0.005, 0.01, mode);
        c.bench_function(&format!("raw 64×600k, 599 onsets, {mode}"), |b| {
            b.iter_batched_ref(
                || base.clone(),
                |raw| black_box(fix_stim_artifact_raw(raw, &events, 1, &cfg).unwrap()),
                criterion::BatchSize::LargeInput,
            )
        });
    }
}

fn bench_epochs(c: &mut Criterion) {
    let base = Epochs::new(Array3::from_elem((200, 64, 701), 1.0), SFREQ, -0.2).unwrap();
    let cfg = StimConfig::new(-0.005, 0.01, CorrectionMode::Linear);
    c.bench_function("epochs 200×64×701, linear", |b| {
        b.iter_batched_ref(
            || base.clone(),
            |ep| black_box(fix_stim_artifact_epochs(ep, &cfg).unwrap()),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_raw, bench_epochs);
criterion_main!(benches);
