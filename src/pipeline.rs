use crate::{
    config::load_config,
    core::{
        accumulator::build_dataset,
        align::{align_pairs, Alignment},
        audio::{read_audio, write_audio},
    },
    error::{PrepError, Result},
    io::progress::{emit_prep_progress, PrepProgress},
    paths::{default_output_dir, DatasetFiles},
    types::{Dataset, Pair, PerRole, Role, SplitBounds},
};

use log::{info, warn};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::tempdir;

#[derive(Clone, Debug)]
pub struct PrepOptions {
    /// Alternating input/target paths.
    pub files: Vec<PathBuf>,
    pub config_name: String,
    pub config_location: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PrepOptions {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            config_name: "RNN-aidadsp-1".into(),
            config_location: PathBuf::from("Configs"),
            output_dir: default_output_dir(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PrepReport {
    pub sample_rate: u32,
    pub files: DatasetFiles,
    /// Samples written per role (input and target have the same length).
    pub lengths: PerRole<usize>,
    pub truncated_pairs: usize,
}

/// Group `files` into (input, target) pairs. Fails on an empty or odd-length list.
pub fn pair_paths(files: &[PathBuf]) -> Result<Vec<(PathBuf, PathBuf)>> {
    if files.is_empty() {
        return Err(PrepError::Usage("no input files given".into()));
    }
    if files.len() % 2 != 0 {
        return Err(PrepError::Usage(format!(
            "files must be given as input/target pairs, got {} paths",
            files.len()
        )));
    }
    Ok(files
        .chunks_exact(2)
        .map(|c| (c[0].clone(), c[1].clone()))
        .collect())
}

/// Read, align, split and write a whole dataset. Nothing is written on failure.
pub fn prepare_dataset(opts: &PrepOptions) -> Result<PrepReport> {
    let paths = pair_paths(&opts.files)?;

    emit_prep_progress(PrepProgress::Stage("load_config"));
    let config = load_config(&opts.config_name, &opts.config_location)?;

    emit_prep_progress(PrepProgress::Stage("read_audio"));
    let pairs = read_pairs(&paths)?;

    emit_prep_progress(PrepProgress::Stage("align"));
    let alignment = align_pairs(pairs)?;
    let truncated_pairs = alignment.truncations.len();
    for t in &alignment.truncations {
        let (input, target) = &paths[t.pair];
        warn!(
            "Length for audio files {} and {} does not match, setting both to {} samples",
            input.display(),
            target.display(),
            t.aligned_len
        );
        emit_prep_progress(PrepProgress::Truncated {
            pair: t.pair,
            input: input.clone(),
            target: target.clone(),
            aligned_len: t.aligned_len,
        });
    }

    emit_prep_progress(PrepProgress::Stage("split"));
    let dataset = build_dataset(alignment, &config.split_bounds)?;

    emit_prep_progress(PrepProgress::Stage("write_dataset"));
    let files = write_dataset(&dataset, &opts.output_dir, &config.file_name)?;

    emit_prep_progress(PrepProgress::Finished);

    let len = |role: Role| dataset.role(role).input.len();
    Ok(PrepReport {
        sample_rate: dataset.sample_rate(),
        files,
        lengths: PerRole {
            train: len(Role::Train),
            test: len(Role::Test),
            val: len(Role::Val),
        },
        truncated_pairs,
    })
}

/// Align and split already-decoded pairs without touching the filesystem.
pub fn prepare_in_memory(pairs: Vec<Pair>, bounds: &SplitBounds) -> Result<Dataset> {
    let alignment: Alignment = align_pairs(pairs)?;
    build_dataset(alignment, bounds)
}

fn read_pairs(paths: &[(PathBuf, PathBuf)]) -> Result<Vec<Pair>> {
    let total = paths.len();
    let mut pairs = Vec::with_capacity(total);

    for (i, (in_path, tg_path)) in paths.iter().enumerate() {
        info!("Input file name: {}", in_path.display());
        let input = read_audio(in_path)?;
        info!("Target file name: {}", tg_path.display());
        let target = read_audio(tg_path)?;

        emit_prep_progress(PrepProgress::PairRead {
            done: i + 1,
            total,
            input: in_path.clone(),
            target: tg_path.clone(),
        });
        pairs.push(Pair::new(input, target));
    }
    Ok(pairs)
}

/// Write the six dataset files under `root`.
///
/// Files are staged in a temporary directory and only copied into `root`
/// once all of them were encoded. If copying fails, every file and directory
/// this call created under `root` is removed again.
pub fn write_dataset(dataset: &Dataset, root: &Path, file_name: &str) -> Result<DatasetFiles> {
    let staging = tempdir().map_err(|e| PrepError::io(&std::env::temp_dir(), e))?;
    let staged = DatasetFiles::new(staging.path(), file_name);
    let files = DatasetFiles::new(root, file_name);

    for (role, channel, path) in staged.iter() {
        create_parent(path)?;
        let samples = dataset.samples(role, channel);
        info!(
            "Writing {} with rate: {} length: {}",
            files.path(role, channel).display(),
            dataset.sample_rate(),
            samples.len()
        );
        write_audio(path, dataset.sample_rate(), samples)?;
    }

    let mut publish = Publish::default();
    if let Err(e) = publish.copy_all(&staged, &files) {
        publish.rollback();
        return Err(e);
    }

    for (role, channel, dst) in files.iter() {
        emit_prep_progress(PrepProgress::Writing {
            role,
            channel,
            path: dst.to_path_buf(),
            sample_rate: dataset.sample_rate(),
            len: dataset.samples(role, channel).len(),
        });
    }

    Ok(files)
}

/// What one `write_dataset` call put under the output root.
#[derive(Default)]
struct Publish {
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl Publish {
    fn copy_all(&mut self, staged: &DatasetFiles, files: &DatasetFiles) -> Result<()> {
        // Every destination directory must exist before the first copy.
        for (_, _, dst) in files.iter() {
            if let Some(dir) = dst.parent() {
                self.create_dir_all(dir)?;
            }
        }

        for (role, channel, dst) in files.iter() {
            let src = staged.path(role, channel);
            fs::copy(src, dst).map_err(|e| PrepError::io(dst, e))?;
            self.files.push(dst.to_path_buf());
        }
        Ok(())
    }

    fn create_dir_all(&mut self, dir: &Path) -> Result<()> {
        let mut missing = Vec::new();
        let mut cur = Some(dir);
        while let Some(d) = cur {
            if d.as_os_str().is_empty() || d.exists() {
                break;
            }
            missing.push(d.to_path_buf());
            cur = d.parent();
        }

        for d in missing.into_iter().rev() {
            fs::create_dir(&d).map_err(|e| PrepError::io(&d, e))?;
            self.dirs.push(d);
        }
        // Fails when a non-directory already sits at `dir`.
        fs::create_dir_all(dir).map_err(|e| PrepError::io(dir, e))
    }

    fn rollback(self) {
        for f in self.files.iter().rev() {
            if let Err(e) = fs::remove_file(f) {
                warn!("could not remove {}: {e}", f.display());
            }
        }
        for d in self.dirs.iter().rev() {
            let _ = fs::remove_dir(d);
        }
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| PrepError::io(dir, e))?;
    }
    Ok(())
}
