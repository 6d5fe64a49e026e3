//! Palettes computed from formulas rather than tables.

use std::f64::consts::PI;

/// Cyclic palette for phase data.
///
/// Colours are the barycentric coordinates of a point running round the
/// unit circle inscribed in an RGB triangle, so the palette wraps without a
/// seam.
pub fn phasemap(m: usize) -> Vec<[f64; 3]> {
    let sqrt3 = 3.0_f64.sqrt();
    let red = (-2.0, 0.0);
    let green = (1.0, -sqrt3);
    let blue = (1.0, sqrt3);
    // |Im((red - green) * conj(red - blue))|
    let norm = 6.0 * sqrt3;

    (0..m)
        .map(|k| {
            let theta = 2.0 * PI * k as f64 / m as f64;
            let circ = (theta.cos(), theta.sin());
            let to = |v: (f64, f64)| (v.0 - circ.0, v.1 - circ.1);
            let (rc, gc, bc) = (to(red), to(green), to(blue));
            [cross(gc, bc), cross(bc, rc), cross(rc, gc)]
                .map(|area| (1.5 * area.abs() / norm).clamp(0.0, 1.0))
        })
        .collect()
}

/// `Im(a * conj(b))` for complex numbers given as `(re, im)`
fn cross(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.1 * b.0 - a.0 * b.1
}

/// Zebra palette with `bands` broad bands over `n` entries.
///
/// Hue decays exponentially while saturation follows a sawtooth and value
/// a cosine, both between `floor` and 1. A floor of 0 gives black bands.
/// See Hooker et al. (1995), IEEE TGRS 33, 1306-1312.
pub fn zebra(bands: usize, n: usize, floor: f64) -> Vec<[f64; 3]> {
    let period = n as f64 / bands as f64;
    (0..n)
        .map(|x| {
            let x = x as f64;
            let hue = (-3.0 * x / n as f64).exp();
            let sat = floor + (1.0 - floor) * (0.5 * (1.0 + sawtooth(2.0 * PI * x / period)));
            let val = floor + (1.0 - floor) * 0.5 * (1.0 + (2.0 * PI * x / (period / 2.0)).cos());
            hsv_to_rgb(hue, sat, val)
        })
        .collect()
}

/// Rising ramp from -1 to 1 with period 2π
fn sawtooth(t: f64) -> f64 {
    -1.0 + 2.0 * t.rem_euclid(2.0 * PI) / (2.0 * PI)
}

/// HSV to RGB, all components in `[0, 1]`
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    if s == 0.0 {
        return [v, v, v];
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// NOAA CoastWatch AVHRR palette, piecewise linear through fixed knots
pub fn avhrr(m: usize) -> Vec<[f64; 3]> {
    const XR: [f64; 7] = [0.0, 0.2, 0.4, 0.5, 0.6, 0.8, 1.0];
    const RR: [f64; 7] = [0.5, 1.0, 1.0, 0.5, 0.5, 0.0, 0.5];
    const XG: [f64; 4] = [0.0, 0.4, 0.6, 1.0];
    const GG: [f64; 4] = [0.0, 1.0, 1.0, 0.0];
    const XB: [f64; 7] = [0.0, 0.2, 0.4, 0.5, 0.6, 0.8, 1.0];
    const BB: [f64; 7] = [0.0, 0.0, 0.5, 0.5, 1.0, 1.0, 0.5];

    let denom = m.saturating_sub(1).max(1) as f64;
    (0..m)
        .map(|k| {
            let x = k as f64 / denom;
            [ramp(x, &XR, &RR), ramp(x, &XG, &GG), ramp(x, &XB, &BB)]
        })
        .collect()
}

/// Grey ramp from black to white for signed data
pub fn ctopo_pos_neg(m: usize) -> Vec<[f64; 3]> {
    let denom = m.saturating_sub(1).max(1) as f64;
    (0..m)
        .map(|k| {
            let v = k as f64 / denom;
            [v, v, v]
        })
        .collect()
}

/// Piecewise-linear value at `x` through `(knots, values)`, held constant
/// outside the knots
fn ramp(x: f64, knots: &[f64], values: &[f64]) -> f64 {
    let upper = knots.partition_point(|&k| k <= x);
    match upper {
        0 => values[0],
        u if u >= knots.len() => values[values.len() - 1],
        u => {
            let (x0, x1) = (knots[u - 1], knots[u]);
            let t = (x - x0) / (x1 - x0);
            values[u - 1] * (1.0 - t) + values[u] * t
        }
    }
}
