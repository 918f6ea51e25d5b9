use crate::types::{Channel, Role};
use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

/// Events emitted while a dataset is being prepared.
#[derive(Clone, Debug, PartialEq)]
pub enum PrepProgress {
    Stage(&'static str),
    PairRead {
        done: usize,
        total: usize,
        input: PathBuf,
        target: PathBuf,
    },
    Truncated {
        pair: usize,
        input: PathBuf,
        target: PathBuf,
        aligned_len: usize,
    },
    Writing {
        role: Role,
        channel: Channel,
        path: PathBuf,
        sample_rate: u32,
        len: usize,
    },
    Finished,
}

type ProgressCb = Box<dyn Fn(PrepProgress) + Send + 'static>;

static PREP_PROGRESS_CB: OnceLock<Mutex<Option<ProgressCb>>> = OnceLock::new();

/// Install the process-wide progress callback, replacing any previous one.
pub fn set_prep_progress_callback(cb: impl Fn(PrepProgress) + Send + 'static) {
    let slot = PREP_PROGRESS_CB.get_or_init(|| Mutex::new(None));
    if let Ok(mut g) = slot.lock() {
        *g = Some(Box::new(cb));
    }
}

pub fn emit_prep_progress(event: PrepProgress) {
    if let Some(m) = PREP_PROGRESS_CB.get() {
        if let Ok(g) = m.lock() {
            if let Some(cb) = &*g {
                cb(event);
            }
        }
    }
}
