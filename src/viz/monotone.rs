// Monotone cubic interpolation for line charts
//
// Terminal line charts connect points with straight segments. To draw the
// smooth "monotone" curve browsers render, we densify the series with cubic
// Hermite segments whose tangents follow Steffen's method: the curve passes
// through every point and never overshoots between two neighbours, so a
// segment between equal values stays flat.

/// Interpolate `points` (sorted by strictly increasing x) with
/// `samples_per_segment` evaluations per segment.
///
/// The output starts with the first point, ends with the last, and contains
/// every input point. Fewer than two points are returned unchanged.
pub fn monotone_x(points: &[(f64, f64)], samples_per_segment: usize) -> Vec<(f64, f64)> {
    if points.len() < 2 || samples_per_segment == 0 {
        return points.to_vec();
    }

    let tangents = tangents(points);
    let mut out = Vec::with_capacity((points.len() - 1) * samples_per_segment + 1);
    out.push(points[0]);

    for (i, pair) in points.windows(2).enumerate() {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        let h = x1 - x0;
        let (t0, t1) = (tangents[i], tangents[i + 1]);

        for step in 1..samples_per_segment {
            let u = step as f64 / samples_per_segment as f64;
            out.push((x0 + u * h, hermite(u, h, y0, y1, t0, t1)));
        }
        // Exact knot, no rounding drift
        out.push((x1, y1));
    }

    out
}

/// Per-point tangents: interior points from neighbouring secants, end
/// points from the adjacent secant and interior tangent.
fn tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let secant = |i: usize| {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        (y1 - y0) / (x1 - x0)
    };

    if n == 2 {
        let s = secant(0);
        return vec![s, s];
    }

    let mut t = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = points[i].0 - points[i - 1].0;
        let h1 = points[i + 1].0 - points[i].0;
        let s0 = secant(i - 1);
        let s1 = secant(i);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        t[i] = if slope.is_finite() { slope } else { 0.0 };
    }

    t[0] = end_tangent(secant(0), t[1]);
    t[n - 1] = end_tangent(secant(n - 2), t[n - 2]);
    t
}

fn end_tangent(secant: f64, inner: f64) -> f64 {
    let t = (3.0 * secant - inner) / 2.0;
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Cubic Hermite basis evaluated at `u` in [0, 1] over an interval of width `h`
fn hermite(u: f64, h: f64, y0: f64, y1: f64, t0: f64, t1: f64) -> f64 {
    let u2 = u * u;
    let u3 = u2 * u;
    let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let h10 = u3 - 2.0 * u2 + u;
    let h01 = -2.0 * u3 + 3.0 * u2;
    let h11 = u3 - u2;
    h00 * y0 + h10 * h * t0 + h01 * y1 + h11 * h * t1
}
