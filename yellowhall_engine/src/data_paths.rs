//! Locating the runtime data directory (`world.ron`, `help_commands.toml`).

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::info;

/// Environment variable that overrides data directory discovery.
pub const DATA_DIR_ENV: &str = "YELLOWHALL_DATA";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(|| {
    let root = detect_data_root(env::var_os(DATA_DIR_ENV).map(PathBuf::from));
    info!("using data directory '{}'", root.display());
    root
});

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
///
/// An explicit override wins outright, even if it doesn't exist yet, so a typo
/// shows up as a clear "file not found" instead of silently loading other data.
fn detect_data_root(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }

    let mut candidates = vec![PathBuf::from("yellowhall_engine/data"), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("yellowhall_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("yellowhall_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("yellowhall_engine/data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_used_verbatim() {
        let dir = PathBuf::from("/nowhere/yellowhall");
        assert_eq!(detect_data_root(Some(dir.clone())), dir);
    }

    #[test]
    fn falls_back_to_a_data_directory() {
        assert!(detect_data_root(None).ends_with("data"));
    }
}
