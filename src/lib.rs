//! # wav-dataset-prep
//!
//! Turns paired input/target recordings into train, test and validation
//! datasets: every pair is aligned, cut into three regions, and the regions
//! are concatenated per role across all pairs.

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod paths;
pub mod pipeline;
pub mod types;

pub use crate::{
    config::{load_config, PrepConfig},
    core::{
        accumulator::{build_dataset, Accumulator},
        align::{align_pairs, Alignment, Truncation},
        audio::{read_audio, write_audio},
        splitter::{resolve, split, Regions},
    },
    error::{PrepError, Result},
    io::progress::{set_prep_progress_callback, PrepProgress},
    pipeline::{
        pair_paths, prepare_dataset, prepare_in_memory, write_dataset, PrepOptions, PrepReport,
    },
    types::{
        Channel, Dataset, Pair, PerRole, Role, RoleData, RoleRange, SampleSequence, SplitBounds,
    },
};
