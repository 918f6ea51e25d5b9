use crate::{
    core::{
        align::Alignment,
        splitter::{self, RegionRanges, Regions},
    },
    error::Result,
    types::{Dataset, PerRole, Role, RoleData, SplitBounds},
};
use log::debug;

/// Running per-role concatenation of regions, in the order pairs are pushed.
#[derive(Debug, Default)]
pub struct Accumulator {
    roles: PerRole<RoleData>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size every buffer so that `plan` can be appended without reallocating.
    pub fn with_plan(plan: &[RegionRanges]) -> Self {
        let mut acc = Self::new();
        for role in Role::ALL {
            let total: usize = plan.iter().map(|r| r.get(role).len()).sum();
            let data = acc.roles.get_mut(role);
            data.input.reserve_exact(total);
            data.target.reserve_exact(total);
        }
        acc
    }

    /// Append one pair's input and target regions.
    pub fn push(&mut self, input: &Regions<'_>, target: &Regions<'_>) {
        for (role, inp, tgt) in [
            (Role::Train, input.train, target.train),
            (Role::Test, input.test, target.test),
            (Role::Val, input.val, target.val),
        ] {
            let data = self.roles.get_mut(role);
            data.input.extend_from_slice(inp);
            data.target.extend_from_slice(tgt);
        }
    }

    pub fn len(&self, role: Role) -> usize {
        self.roles.get(role).input.len()
    }

    pub fn finish(self, sample_rate: u32) -> Dataset {
        Dataset::new(sample_rate, self.roles)
    }
}

/// Split every aligned pair with `bounds` and concatenate the regions per role.
///
/// All pairs are resolved before any sample is copied, so invalid bounds fail
/// the run without building anything.
pub fn build_dataset(alignment: Alignment, bounds: &SplitBounds) -> Result<Dataset> {
    let Alignment {
        pairs, sample_rate, ..
    } = alignment;

    let plan = pairs
        .iter()
        .map(|p| splitter::resolve(bounds, p.input.len()))
        .collect::<Result<Vec<_>>>()?;

    let mut acc = Accumulator::with_plan(&plan);

    for (idx, (pair, ranges)) in pairs.into_iter().zip(&plan).enumerate() {
        let input = splitter::regions(&pair.input.samples, ranges);
        let target = splitter::regions(&pair.target.samples, ranges);
        debug!(
            "pair {idx}: train {} test {} val {} samples",
            input.train.len(),
            input.test.len(),
            input.val.len()
        );
        acc.push(&input, &target);
    }

    Ok(acc.finish(sample_rate))
}
