use serde::Deserialize;
use std::fmt;

/// Mono audio normalized to [-1.0, 1.0], tagged with its sample rate.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSequence {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl SampleSequence {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// One input recording and the target recording it should be mapped to.
#[derive(Clone, Debug)]
pub struct Pair {
    pub input: SampleSequence,
    pub target: SampleSequence,
}

impl Pair {
    pub fn new(input: SampleSequence, target: SampleSequence) -> Self {
        Self { input, target }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Train,
    Test,
    Val,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Train, Role::Test, Role::Val];

    pub fn dir_name(self) -> &'static str {
        match self {
            Role::Train => "train",
            Role::Test => "test",
            Role::Val => "val",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.dir_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Input,
    Target,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Input, Channel::Target];

    pub fn suffix(self) -> &'static str {
        match self {
            Channel::Input => "input",
            Channel::Target => "target",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.suffix())
    }
}

/// Optional sample-index range for one role. Unset values mean "full sequence".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RoleRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl RoleRange {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    pub fn full() -> Self {
        Self::default()
    }
}

/// How every pair is divided into train/test/val regions.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitBounds {
    /// Weights applied to the sequence length; must be non-negative and sum to at most 1.0.
    Fractional { train: f64, test: f64, val: f64 },
    /// Explicit sample ranges, resolved against each pair's length. Roles may overlap.
    Absolute {
        train: RoleRange,
        test: RoleRange,
        val: RoleRange,
    },
}

impl Default for SplitBounds {
    fn default() -> Self {
        SplitBounds::Fractional {
            train: 0.70,
            test: 0.15,
            val: 0.15,
        }
    }
}

/// Paired train/test/val values, indexed by [`Role`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerRole<T> {
    pub train: T,
    pub test: T,
    pub val: T,
}

impl<T> PerRole<T> {
    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Train => &self.train,
            Role::Test => &self.test,
            Role::Val => &self.val,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Train => &mut self.train,
            Role::Test => &mut self.test,
            Role::Val => &mut self.val,
        }
    }
}

/// Input and target buffers for one dataset role.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoleData {
    pub input: Vec<f32>,
    pub target: Vec<f32>,
}

impl RoleData {
    pub fn channel(&self, channel: Channel) -> &[f32] {
        match channel {
            Channel::Input => &self.input,
            Channel::Target => &self.target,
        }
    }
}

/// The six finished sequences plus the rate they share. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    sample_rate: u32,
    roles: PerRole<RoleData>,
}

impl Dataset {
    pub(crate) fn new(sample_rate: u32, roles: PerRole<RoleData>) -> Self {
        Self { sample_rate, roles }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn role(&self, role: Role) -> &RoleData {
        self.roles.get(role)
    }

    pub fn samples(&self, role: Role, channel: Channel) -> &[f32] {
        self.roles.get(role).channel(channel)
    }
}
