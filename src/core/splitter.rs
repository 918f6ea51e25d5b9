use crate::{
    error::{PrepError, Result},
    types::{PerRole, RoleRange, SplitBounds},
};

use std::ops::Range;

/// Cumulative fractions this close to 1.0 cover the whole sequence.
const FULL_EPS: f64 = 1e-9;
/// Offsets this close to an integer snap to it before flooring.
const SNAP_EPS: f64 = 1e-6;

/// Resolved sample-index ranges for one sequence length.
pub type RegionRanges = PerRole<Range<usize>>;

/// Borrowed train/test/val slices of one sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Regions<'a> {
    pub train: &'a [f32],
    pub test: &'a [f32],
    pub val: &'a [f32],
}

impl Regions<'_> {
    pub fn total_len(&self) -> usize {
        self.train.len() + self.test.len() + self.val.len()
    }
}

/// Checks fractional weights: finite, non-negative, summing to at most 1.0.
pub fn validate_fractions(train: f64, test: f64, val: f64) -> Result<()> {
    for (name, w) in [("train", train), ("test", test), ("val", val)] {
        if !w.is_finite() || w < 0.0 {
            return Err(PrepError::InvalidBounds(format!(
                "{name} weight must be a non-negative number, got {w}"
            )));
        }
    }
    let sum = train + test + val;
    if sum > 1.0 + FULL_EPS {
        return Err(PrepError::InvalidBounds(format!(
            "weights sum to {sum}, which exceeds 1.0"
        )));
    }
    Ok(())
}

/// Resolve `bounds` against a sequence of `len` samples.
pub fn resolve(bounds: &SplitBounds, len: usize) -> Result<RegionRanges> {
    match bounds {
        SplitBounds::Fractional { train, test, val } => {
            validate_fractions(*train, *test, *val)?;
            let b1 = floor_offset(*train, len);
            let b2 = floor_offset(train + test, len).max(b1);
            let b3 = floor_offset(train + test + val, len).max(b2);
            Ok(PerRole {
                train: 0..b1,
                test: b1..b2,
                val: b2..b3,
            })
        }
        SplitBounds::Absolute { train, test, val } => Ok(PerRole {
            train: resolve_range("train", train, len)?,
            test: resolve_range("test", test, len)?,
            val: resolve_range("val", val, len)?,
        }),
    }
}

/// Split `samples` into train/test/val slices. Nothing is copied.
pub fn split<'a>(samples: &'a [f32], bounds: &SplitBounds) -> Result<Regions<'a>> {
    let r = resolve(bounds, samples.len())?;
    Ok(regions(samples, &r))
}

/// Slice `samples` with ranges already resolved for its length.
///
/// Panics if a range lies outside `samples`.
pub fn regions<'a>(samples: &'a [f32], ranges: &RegionRanges) -> Regions<'a> {
    Regions {
        train: &samples[ranges.train.clone()],
        test: &samples[ranges.test.clone()],
        val: &samples[ranges.val.clone()],
    }
}

fn floor_offset(fraction: f64, len: usize) -> usize {
    if fraction >= 1.0 - FULL_EPS {
        return len;
    }
    let x = fraction * len as f64;
    let snapped = x.round();
    let off = if (x - snapped).abs() < SNAP_EPS {
        snapped
    } else {
        x.floor()
    };
    (off.max(0.0) as usize).min(len)
}

fn resolve_range(role: &str, range: &RoleRange, len: usize) -> Result<Range<usize>> {
    let clamp = |v: i64| -> usize { v.clamp(0, len as i64) as usize };

    let start = range.start.map(clamp).unwrap_or(0);
    let end = match range.end {
        None | Some(0) => len,
        Some(e) => clamp(e),
    };

    if start > end {
        return Err(PrepError::InvalidBounds(format!(
            "{role} range starts at {start} but ends at {end} (sequence length {len})"
        )));
    }
    Ok(start..end)
}
