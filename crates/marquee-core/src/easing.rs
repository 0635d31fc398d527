// File: crates/marquee-core/src/easing.rs
// Summary: Unit cubic Bézier easing solver (Newton with bisection fallback).

/// Newton iterations before falling back to bisection.
const MAX_NEWTON_ITERATIONS: usize = 8;
/// Derivative magnitude below which Newton steps are unreliable.
const DERIVATIVE_EPSILON: f64 = 1e-6;
/// Accepted distance from the target x.
const SOLVE_EPSILON: f64 = 1e-7;

/// A cubic Bézier from (0,0) to (1,1) with interior control points
/// (x1, y1) and (x2, y2), used as a time-remapping function.
///
/// Control points may lie outside the unit square (overshoot curves);
/// the solver stays bounded and total either way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
    start_gradient: f64,
    end_gradient: f64,
}

impl CubicBezier {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        // Horner coefficients for B(t) = ((a t + b) t + c) t.
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;

        // Endpoint tangents used to extrapolate outside [0, 1]. An all-zero
        // or all-one curve degenerates to the identity line, so its
        // gradients must come out as 1.
        let start_gradient = if x1 > 0.0 {
            y1 / x1
        } else if y1 == 0.0 && x2 > 0.0 {
            y2 / x2
        } else if y1 == 0.0 && y2 == 0.0 {
            1.0
        } else {
            0.0
        };
        let end_gradient = if x2 < 1.0 {
            (y2 - 1.0) / (x2 - 1.0)
        } else if y2 == 1.0 && x1 < 1.0 {
            (y1 - 1.0) / (x1 - 1.0)
        } else if y2 == 1.0 && y1 == 1.0 {
            1.0
        } else {
            0.0
        };

        Self { ax, bx, cx, ay, by, cy, start_gradient, end_gradient }
    }

    /// x component of the curve at parameter `t`. Total over all reals;
    /// values outside [0, 1] extrapolate the polynomial.
    #[inline]
    pub fn sample_curve_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    /// y component of the curve at parameter `t`.
    #[inline]
    pub fn sample_curve_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    /// dx/dt at parameter `t`.
    #[inline]
    pub fn sample_curve_derivative_x(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Find `t` with `sample_curve_x(t) == x`. `x` is clamped to [0, 1];
    /// values further out belong to the extrapolation in `solve`.
    ///
    /// Newton from `t = x` first; if the tangent flattens out or Newton
    /// fails to converge within its cap, a bounded bisection over [0, 1]
    /// finishes the job. Always returns a finite value, never panics.
    pub fn solve_curve_x(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);

        let mut t2 = x;
        for _ in 0..MAX_NEWTON_ITERATIONS {
            let x2 = self.sample_curve_x(t2) - x;
            if x2.abs() < SOLVE_EPSILON {
                return t2;
            }
            let d2 = self.sample_curve_derivative_x(t2);
            if d2.abs() < DERIVATIVE_EPSILON {
                break;
            }
            t2 -= x2 / d2;
        }

        // Bisection. x(t) is monotone in t over [0, 1] for any curve whose
        // x control points stay in [0, 1]; for overshoot curves this still
        // converges to a root within the interval.
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        t2 = x.clamp(t0, t1);
        while t0 < t1 {
            let x2 = self.sample_curve_x(t2);
            if (x2 - x).abs() < SOLVE_EPSILON {
                return t2;
            }
            if x > x2 {
                t0 = t2;
            } else {
                t1 = t2;
            }
            t2 = (t1 - t0) * 0.5 + t0;
        }
        t2
    }

    /// Eased progress for the linear fraction `x`. The primary entry point.
    ///
    /// `x` outside [0, 1] extrapolates linearly along the endpoint tangent,
    /// so degenerate control points still produce the identity line.
    pub fn solve(&self, x: f64) -> f64 {
        if x < 0.0 {
            return self.start_gradient * x;
        }
        if x > 1.0 {
            return 1.0 + self.end_gradient * (x - 1.0);
        }
        self.sample_curve_y(self.solve_curve_x(x))
    }
}
