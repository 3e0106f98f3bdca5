//! One dimension of the street lattice.
//!
//! # Construction
//!
//! Values are computed by index, `from + i * step`, and rounded to
//! [`AXIS_DECIMALS`] places.  Computing by index rather than accumulating
//! `current += step` keeps the rounding error of member `i` independent of
//! `i`, so long axes do not drift.
//!
//! # Nearest-member lookup
//!
//! Lookup is a linear scan that replaces the running best only on a strict
//! improvement.  When `value` sits exactly halfway between two members the
//! earlier (smaller) one wins.  Axes are a few dozen members long for a city,
//! so the scan is cheaper than keeping a second index structure around.

use crate::{GridError, GridResult};

/// Decimal places every axis member is rounded to.
pub const AXIS_DECIMALS: i32 = 5;

/// Upper bound on members per axis; rejects configurations whose step is
/// tiny relative to the region.
pub const MAX_AXIS_LEN: usize = 1 << 20;

const SCALE: f64 = 100_000.0; // 10^AXIS_DECIMALS

/// Round `x` to [`AXIS_DECIMALS`] decimal places.
#[inline]
pub fn round_coord(x: f64) -> f64 {
    (x * SCALE).round() / SCALE
}

/// An ordered, strictly increasing, non-empty sequence of coordinates spaced
/// `step` apart within `[from, to]`.  Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    values: Vec<f64>,
    step:   f64,
}

impl Axis {
    /// Build the axis `from, from + step, …` up to and including the last
    /// value `<= to`.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidAxis`] if an input is not finite, `from > to`,
    /// `step` is not positive or is below the rounding resolution, or the
    /// axis would exceed [`MAX_AXIS_LEN`] members.
    pub fn build(from: f64, to: f64, step: f64) -> GridResult<Axis> {
        let invalid = |reason| GridError::InvalidAxis { from, to, step, reason };

        if !(from.is_finite() && to.is_finite() && step.is_finite()) {
            return Err(invalid("inputs must be finite"));
        }
        if from > to {
            return Err(invalid("start is past end"));
        }
        if step < 1.0 / SCALE {
            return Err(invalid("step is below the 5-decimal resolution"));
        }
        if (to - from) / step >= MAX_AXIS_LEN as f64 {
            return Err(invalid("too many members"));
        }

        let mut values = Vec::with_capacity(((to - from) / step) as usize + 1);
        for i in 0usize.. {
            let v = round_coord(from + i as f64 * step);
            // Rounded before the comparison, so an end that lies on the grid is kept.
            if v > to {
                break;
            }
            values.push(v);
        }
        if values.is_empty() {
            // Only reachable when rounding pushes `from` itself past `to`.
            return Err(invalid("no member falls inside the range"));
        }

        Ok(Axis { values, step })
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a built axis; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    #[inline]
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Member at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[inline]
    pub fn at(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Index of the member nearest to `value` (first one on ties).
    ///
    /// A NaN `value` compares false against everything and yields index 0.
    pub fn nearest_index(&self, value: f64) -> usize {
        let mut best = 0;
        let mut best_dist = (self.values[0] - value).abs();
        for (i, &candidate) in self.values.iter().enumerate().skip(1) {
            let dist = (candidate - value).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }

    /// The member nearest to `value` (first one on ties).
    #[inline]
    pub fn nearest_value(&self, value: f64) -> f64 {
        self.values[self.nearest_index(value)]
    }

    /// `true` if `value` is exactly one of the members.
    pub fn contains(&self, value: f64) -> bool {
        self.values.binary_search_by(|v| v.total_cmp(&value)).is_ok()
    }
}
