use crate::{
    error::{PrepError, Result},
    types::Pair,
};
use log::{debug, warn};

/// A pair whose input and target were cut to a common length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Truncation {
    pub pair: usize,
    pub input_len: usize,
    pub target_len: usize,
    pub aligned_len: usize,
}

/// Pairs ready for splitting: one rate, equal lengths within each pair.
#[derive(Clone, Debug)]
pub struct Alignment {
    pub pairs: Vec<Pair>,
    pub sample_rate: u32,
    pub truncations: Vec<Truncation>,
}

/// Check rates and bring every pair to a common length.
///
/// The first pair's rate becomes the rate of the whole run. Length mismatches
/// are recovered by dropping trailing samples and logged as warnings.
pub fn align_pairs(pairs: Vec<Pair>) -> Result<Alignment> {
    let Some(first) = pairs.first() else {
        return Err(PrepError::Usage("no audio pairs supplied".into()));
    };
    let sample_rate = first.input.sample_rate;

    let mut aligned = Vec::with_capacity(pairs.len());
    let mut truncations = Vec::new();

    for (idx, mut pair) in pairs.into_iter().enumerate() {
        let (in_rate, tg_rate) = (pair.input.sample_rate, pair.target.sample_rate);
        if in_rate != tg_rate {
            return Err(PrepError::PairRateMismatch {
                pair: idx,
                input: in_rate,
                target: tg_rate,
            });
        }
        if in_rate != sample_rate {
            return Err(PrepError::RateMismatch {
                pair: idx,
                expected: sample_rate,
                found: in_rate,
            });
        }

        let (input_len, target_len) = (pair.input.len(), pair.target.len());
        if input_len != target_len {
            let aligned_len = input_len.min(target_len);
            warn!(
                "Length of pair {idx} does not match (input {input_len}, target {target_len}), setting both to {aligned_len} samples"
            );
            pair.input.samples.truncate(aligned_len);
            pair.target.samples.truncate(aligned_len);
            truncations.push(Truncation {
                pair: idx,
                input_len,
                target_len,
                aligned_len,
            });
        } else {
            debug!("pair {idx}: {input_len} samples at {in_rate} Hz");
        }

        aligned.push(pair);
    }

    Ok(Alignment {
        pairs: aligned,
        sample_rate,
        truncations,
    })
}
