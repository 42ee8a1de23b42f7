// src/animation/phase.rs
//
// Sub-phase partition arithmetic.
// One 0..1 progress value is split into n staggered windows so that n
// shape elements animate in sequence as progress sweeps the unit range.
// Window i of n is clamped to [i/n, (i+1)/n] and rescaled back to 0..1.

use std::f32::consts::PI;

pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Progress past the start of window i, floored at zero.
pub fn max_scale(progress: f32, i: usize, n: usize) -> f32 {
    (progress - i as f32 * inverse(n)).max(0.0)
}

/// Progress of window i rescaled to 0..1.
pub fn divide_scale(progress: f32, i: usize, n: usize) -> f32 {
    max_scale(progress, i, n).min(inverse(n)) * n as f32
}

/// Half sine sweep: 0 at both ends of the unit range, 1 at the middle.
pub fn sinify(t: f32) -> f32 {
    (t * PI).sin()
}
