//! Bounded internal-rate-of-return solver.
//!
//! Replaces the financial-library root-find of the original model with an
//! in-repo bracketed bisection: a coarse scan over a fixed rate grid locates
//! a sign change of NPV(r), then bisection narrows it under a hard iteration
//! cap. Anything that prevents convergence yields `None`, a normal value.

/// Lower edge of the searched rate range; below -1 the discount factor is
/// undefined.
const RATE_MIN: f64 = -0.99;
/// Upper edge of the searched rate range.
const RATE_MAX: f64 = 10.0;
/// Grid points in the coarse bracket scan.
const SCAN_STEPS: usize = 220;
/// Hard cap on bisection iterations.
const MAX_BISECTIONS: u32 = 100;
/// NPV magnitude treated as a root.
const NPV_EPSILON: f64 = 1e-9;
/// Bracket width below which the midpoint is accepted.
const RATE_TOLERANCE: f64 = 1e-10;

/// Net present value of `cash_flows` at discount rate `rate`, year-end
/// convention with year 0 undiscounted.
fn npv_at(rate: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(year, flow)| flow / (1.0 + rate).powi(year as i32))
        .sum()
}

/// Solves for the rate at which NPV of `cash_flows` is zero.
///
/// Returns `None` for degenerate flow vectors (fewer than two periods, or
/// all flows on one side of zero), when no sign change exists in
/// `(-0.99, 10.0]`, or when bisection fails to converge within its cap.
pub fn irr(cash_flows: &[f64]) -> Option<f64> {
    if cash_flows.len() < 2 {
        return None;
    }
    let has_negative = cash_flows.iter().any(|&f| f < 0.0);
    let has_positive = cash_flows.iter().any(|&f| f > 0.0);
    if !has_negative || !has_positive {
        return None;
    }

    let mut lo = RATE_MIN;
    let mut lo_npv = npv_at(lo, cash_flows);
    let step = (RATE_MAX - RATE_MIN) / SCAN_STEPS as f64;

    for i in 1..=SCAN_STEPS {
        let hi = RATE_MIN + step * i as f64;
        let hi_npv = npv_at(hi, cash_flows);
        if lo_npv.abs() < NPV_EPSILON {
            return Some(lo);
        }
        if lo_npv * hi_npv < 0.0 {
            return bisect(lo, hi, cash_flows);
        }
        lo = hi;
        lo_npv = hi_npv;
    }

    if lo_npv.abs() < NPV_EPSILON {
        return Some(lo);
    }
    None
}

fn bisect(mut lo: f64, mut hi: f64, cash_flows: &[f64]) -> Option<f64> {
    let mut lo_npv = npv_at(lo, cash_flows);
    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lo + hi);
        let mid_npv = npv_at(mid, cash_flows);
        if mid_npv.abs() < NPV_EPSILON || (hi - lo) < RATE_TOLERANCE {
            return Some(mid);
        }
        if lo_npv * mid_npv < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            lo_npv = mid_npv;
        }
    }
    let mid = 0.5 * (lo + hi);
    if (hi - lo) < RATE_TOLERANCE {
        Some(mid)
    } else {
        None
    }
}
