use crate::types::{Channel, PerRole, Role};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Root the dataset is written under when no directory is given.
pub fn default_output_dir() -> PathBuf {
    env::var("PREP_WAV_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("Data"))
}

/// `<role>/<file_name>-<channel>.wav`, relative to the output root.
pub fn relative_output_path(role: Role, channel: Channel, file_name: &str) -> PathBuf {
    Path::new(role.dir_name()).join(format!("{file_name}-{}.wav", channel.suffix()))
}

/// Locations of the six written files.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetFiles {
    pub roles: PerRole<PairPaths>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PairPaths {
    pub input: PathBuf,
    pub target: PathBuf,
}

impl DatasetFiles {
    pub fn new(root: &Path, file_name: &str) -> Self {
        let pair = |role: Role| PairPaths {
            input: root.join(relative_output_path(role, Channel::Input, file_name)),
            target: root.join(relative_output_path(role, Channel::Target, file_name)),
        };
        Self {
            roles: PerRole {
                train: pair(Role::Train),
                test: pair(Role::Test),
                val: pair(Role::Val),
            },
        }
    }

    pub fn path(&self, role: Role, channel: Channel) -> &Path {
        let p = self.roles.get(role);
        match channel {
            Channel::Input => &p.input,
            Channel::Target => &p.target,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, Channel, &Path)> + '_ {
        Role::ALL.into_iter().flat_map(move |role| {
            Channel::ALL
                .into_iter()
                .map(move |ch| (role, ch, self.path(role, ch)))
        })
    }
}
