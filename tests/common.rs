/// Shared synthetic-data helpers for the integration tests.
///
/// Signals are deterministic: a few sinusoids per channel plus LCG noise,
/// with a large biphasic spike at every stimulus onset.
use ndarray::{s, Array2, Array3};

pub const SFREQ: f64 = 600.0;
#[allow(unused)]
pub const FIRST_SAMP: i64 = 25_800;

#[allow(unused)]
/// `[n_ch, n_t]` background signal.
pub fn background(n_ch: usize, n_t: usize) -> Array2<f64> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut noise = move || {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) as f64 / (1u64 << 31) as f64) - 0.5
    };
    Array2::from_shape_fn((n_ch, n_t), |(c, t)| {
        let time = t as f64 / SFREQ;
        let f = 3.0 + c as f64 * 1.7;
        20.0 * (2.0 * std::f64::consts::PI * f * time).sin()
            + 5.0 * (2.0 * std::f64::consts::PI * 11.0 * time + c as f64).cos()
            + noise()
    })
}

#[allow(unused)]
/// Add a ±500 spike pair spanning `width` samples after each local onset.
pub fn add_artifacts(data: &mut Array2<f64>, onsets: &[usize], width: usize) {
    for &onset in onsets {
        for k in 0..width.min(data.ncols() - onset) {
            let amp = if k < width / 2 { 500.0 } else { -500.0 };
            data.column_mut(onset + k).mapv_inplace(|v| v + amp);
        }
    }
}

#[allow(unused)]
/// `[N, 3]` events array with every row carrying `code`.
pub fn events_array(samples: &[i64], code: i64) -> Array2<i64> {
    let mut arr = Array2::zeros((samples.len(), 3));
    for (i, &s) in samples.iter().enumerate() {
        arr[[i, 0]] = s;
        arr[[i, 2]] = code;
    }
    arr
}

#[allow(unused)]
/// Cut `[E, C, T]` epochs spanning `[tmin, tmax]` around local onsets.
pub fn cut_epochs(data: &Array2<f64>, onsets: &[usize], tmin: f64, tmax: f64) -> Array3<f64> {
    let start_off = (SFREQ * tmin).ceil() as i64;
    let n_t = ((tmax - tmin) * SFREQ).round() as usize + 1;
    let mut out = Array3::zeros((onsets.len(), data.nrows(), n_t));
    for (e, &onset) in onsets.iter().enumerate() {
        let start = (onset as i64 + start_off) as usize;
        out.slice_mut(s![e, .., ..])
            .assign(&data.slice(s![.., start..start + n_t]));
    }
    out
}

#[allow(unused)]
/// First difference of `x` with its mean removed.
pub fn detrended_diff(x: &[f64]) -> Vec<f64> {
    let d: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let mean = d.iter().sum::<f64>() / d.len() as f64;
    d.into_iter().map(|v| v - mean).collect()
}

#[allow(unused)]
/// Maximum absolute difference between two arrays.
pub fn max_abs_diff(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).fold(0.0_f64, f64::max)
}
