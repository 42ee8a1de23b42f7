// src/draw/square_draw.rs
//
// Draws one path-square state: a centered square outline that grows with
// the first sub-phase, and a diagonal path through it revealed one
// segment per remaining sub-phase. The whole shape is swept by a half
// sine, so a settled node leaves a clean background.

use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

use super::DrawParams;
use crate::animation::{divide_scale, sinify};

pub fn draw_path_square(draw: &Draw, progress: f32, size: f32, parts: usize, params: &DrawParams) {
    let sf = sinify(progress);

    let side = size * divide_scale(sf, 0, parts);
    if side > 0.0 {
        draw.rect()
            .x_y(0.0, 0.0)
            .w_h(side, side)
            .no_fill()
            .stroke(params.color)
            .stroke_weight(params.stroke_weight);
    }

    for (start, end) in path_segments(sf, size, parts) {
        draw.line()
            .points(start, end)
            .color(params.color)
            .stroke_weight(params.stroke_weight)
            .caps(LineCap::Round);
    }
}

/// The visible pieces of the diagonal path for the given sine-swept
/// progress. Segment j (1-based sub-phase) covers 1/(parts-1) of the
/// corner-to-corner diagonal.
fn path_segments(sf: f32, size: f32, parts: usize) -> Vec<(Point2, Point2)> {
    let mut segments = Vec::new();
    if parts < 2 {
        return segments;
    }
    let count = parts - 1;

    for j in 0..count {
        let phase = divide_scale(sf, j + 1, parts);
        if phase <= 0.0 {
            continue;
        }
        let t0 = j as f32 / count as f32;
        let t1 = t0 + phase / count as f32;
        segments.push((diagonal_point(t0, size), diagonal_point(t1, size)));
    }
    segments
}

fn diagonal_point(t: f32, size: f32) -> Point2 {
    pt2(-size / 2.0 + size * t, -size / 2.0 + size * t)
}
