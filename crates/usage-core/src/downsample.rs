// File: crates/usage-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets reduction of a slice for the context overview.

use crate::sample::Sample;

#[inline]
fn xy(s: &Sample) -> (f64, f64) {
    (s.timestamp.and_utc().timestamp_millis() as f64, s.general_supply)
}

/// Reduce `samples` to at most `threshold` points over (timestamp, general
/// supply), keeping the first and last sample and the visual peaks between.
pub fn lttb(samples: &[Sample], threshold: usize) -> Vec<Sample> {
    let n = samples.len();
    if threshold >= n || n <= 2 {
        return samples.to_vec();
    }
    match threshold {
        0 => return Vec::new(),
        1 => return vec![samples[0]],
        2 => return vec![samples[0], samples[n - 1]],
        _ => {}
    }

    // Interior points split into `threshold - 2` buckets of fractional width.
    let buckets = threshold - 2;
    let width = (n - 2) as f64 / buckets as f64;
    let bound = |b: usize| -> usize { ((1.0 + b as f64 * width).floor() as usize).min(n - 1) };

    let mut out = Vec::with_capacity(threshold);
    out.push(samples[0]);
    let mut anchor = xy(&samples[0]);

    for b in 0..buckets {
        let (lo, hi) = (bound(b), bound(b + 1).max(bound(b) + 1));
        // Average of the following bucket; the last bucket looks at the final point.
        let (nlo, nhi) = if b + 1 < buckets { (hi, bound(b + 2).max(hi + 1)) } else { (n - 1, n) };
        let next = &samples[nlo..nhi];
        let (sx, sy) = next.iter().map(xy).fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
        let avg = (sx / next.len() as f64, sy / next.len() as f64);

        let (ax, ay) = anchor;
        let pick = samples[lo..hi]
            .iter()
            .map(|s| {
                let (x, y) = xy(s);
                let area = ((ax - avg.0) * (y - ay) - (ax - x) * (avg.1 - ay)).abs();
                (s, area)
            })
            .fold(None::<(&Sample, f64)>, |best, (s, a)| match best {
                Some((_, ba)) if ba >= a => best,
                _ => Some((s, a)),
            });
        if let Some((s, _)) = pick {
            out.push(*s);
            anchor = xy(s);
        }
    }

    out.push(samples[n - 1]);
    out
}
