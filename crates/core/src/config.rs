//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading the working directory or
//! process-wide environment variables during request handling, where either could change
//! underneath a running server.

use crate::constants::DEFAULT_FILE_RESOURCE_PATH;
use crate::{FileError, FileResult};
use std::path::{Component, Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    file_path: PathBuf,
    file_name: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig` by resolving `relative_path` against `working_dir`.
    ///
    /// # Errors
    /// Returns `FileError::InvalidInput` if:
    /// - `working_dir` is not absolute,
    /// - `relative_path` is empty, or
    /// - the resolved path has no final file name segment (for example it collapses to `/`).
    pub fn new(working_dir: &Path, relative_path: &str) -> FileResult<Self> {
        if !working_dir.is_absolute() {
            return Err(FileError::InvalidInput(format!(
                "working directory must be absolute: {}",
                working_dir.display()
            )));
        }

        if relative_path.trim().is_empty() {
            return Err(FileError::InvalidInput(
                "file resource path cannot be empty".into(),
            ));
        }

        let file_path = resolve_file_path(working_dir, relative_path);
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                FileError::InvalidInput(format!(
                    "file resource path does not name a file: {relative_path}"
                ))
            })?;

        Ok(Self {
            file_path,
            file_name,
        })
    }

    /// Create a new `CoreConfig` relative to the process's current working directory.
    ///
    /// Intended to be called exactly once at startup.
    pub fn from_current_dir(relative_path: &str) -> FileResult<Self> {
        let working_dir = std::env::current_dir().map_err(FileError::WorkingDir)?;
        Self::new(&working_dir, relative_path)
    }

    /// Absolute, normalised path of the managed file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Final segment of the resolved path.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Directory that must exist before the file can be written.
    pub fn parent_dir(&self) -> Option<&Path> {
        self.file_path.parent()
    }
}

/// Join `relative_path` onto `working_dir` and normalise the result.
///
/// Root and prefix components of `relative_path` are ignored, so an absolute value is still
/// placed under `working_dir` (`/tmp/demo.txt` resolves to `<working_dir>/tmp/demo.txt`).
pub fn resolve_file_path(working_dir: &Path, relative_path: &str) -> PathBuf {
    let relative: PathBuf = Path::new(relative_path)
        .components()
        .filter(|c| {
            matches!(
                c,
                Component::Normal(_) | Component::CurDir | Component::ParentDir
            )
        })
        .collect();
    normalise_path(&working_dir.join(relative))
}

/// Lexically normalise a path by removing `.` segments and collapsing `..` segments.
///
/// The filesystem is never consulted, so the path does not need to exist and symlinks are not
/// followed. A `..` that would climb above the root is dropped; on a relative path with no
/// preceding normal segment it is kept.
pub fn normalise_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    out.iter().collect()
}

/// Parse the configured relative file path from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default path.
pub fn file_path_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_FILE_RESOURCE_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalise_removes_current_dir_segments() {
        assert_eq!(
            normalise_path(Path::new("/srv/./app/./files/demo.txt")),
            PathBuf::from("/srv/app/files/demo.txt")
        );
    }

    #[test]
    fn normalise_collapses_parent_segments() {
        assert_eq!(
            normalise_path(Path::new("/srv/app/../data/files/../demo.txt")),
            PathBuf::from("/srv/data/demo.txt")
        );
    }

    #[test]
    fn normalise_does_not_climb_above_root() {
        assert_eq!(
            normalise_path(Path::new("/../../etc/demo.txt")),
            PathBuf::from("/etc/demo.txt")
        );
    }

    #[test]
    fn normalise_keeps_leading_parent_on_relative_path() {
        assert_eq!(
            normalise_path(Path::new("../files/./demo.txt")),
            PathBuf::from("../files/demo.txt")
        );
    }

    #[test]
    fn resolve_joins_working_dir_and_default_path() {
        let resolved = resolve_file_path(Path::new("/srv/app"), DEFAULT_FILE_RESOURCE_PATH);
        assert_eq!(resolved, PathBuf::from("/srv/app/files/demo.txt"));
    }

    #[test]
    fn resolve_normalises_relative_path() {
        let resolved = resolve_file_path(Path::new("/srv/app/bin"), "../files/./out/../demo.txt");
        assert_eq!(resolved, PathBuf::from("/srv/app/files/demo.txt"));
    }

    #[test]
    fn resolve_keeps_absolute_path_under_working_dir() {
        let resolved = resolve_file_path(Path::new("/srv/app"), "/tmp/demo.txt");
        assert_eq!(resolved, PathBuf::from("/srv/app/tmp/demo.txt"));
    }

    #[test]
    fn config_with_absolute_path_stays_under_working_dir() {
        let cfg = CoreConfig::new(Path::new("/srv/app"), "/tmp/demo.txt").unwrap();
        assert_eq!(cfg.file_path(), Path::new("/srv/app/tmp/demo.txt"));
        assert_eq!(cfg.file_name(), "demo.txt");
    }

    #[test]
    fn config_path_is_stable_across_calls() {
        let cfg = CoreConfig::new(Path::new("/srv/app"), "files/demo.txt").unwrap();

        let first = cfg.file_path().to_path_buf();
        let second = cfg.file_path().to_path_buf();

        assert_eq!(first, second);
        assert_eq!(first, PathBuf::from("/srv/app/files/demo.txt"));
        assert_eq!(cfg.file_name(), "demo.txt");
        assert_eq!(cfg.parent_dir(), Some(Path::new("/srv/app/files")));
    }

    #[test]
    fn config_rejects_empty_relative_path() {
        let result = CoreConfig::new(Path::new("/srv/app"), "   ");
        assert!(matches!(result, Err(FileError::InvalidInput(_))));
    }

    #[test]
    fn config_rejects_relative_working_dir() {
        let result = CoreConfig::new(Path::new("srv/app"), "files/demo.txt");
        assert!(matches!(result, Err(FileError::InvalidInput(_))));
    }

    #[test]
    fn config_rejects_path_without_file_name() {
        let result = CoreConfig::new(Path::new("/srv/app"), "../../..");
        assert!(matches!(result, Err(FileError::InvalidInput(_))));
    }

    #[test]
    fn config_from_current_dir_is_absolute() {
        let cfg = CoreConfig::from_current_dir(DEFAULT_FILE_RESOURCE_PATH).unwrap();
        assert!(cfg.file_path().is_absolute());
        assert!(cfg.file_path().ends_with("files/demo.txt"));
    }

    #[test]
    fn env_value_falls_back_to_default() {
        assert_eq!(file_path_from_env_value(None), DEFAULT_FILE_RESOURCE_PATH);
        assert_eq!(
            file_path_from_env_value(Some("  ".into())),
            DEFAULT_FILE_RESOURCE_PATH
        );
    }

    #[test]
    fn env_value_is_trimmed() {
        assert_eq!(
            file_path_from_env_value(Some(" data/out.bin \n".into())),
            "data/out.bin"
        );
    }
}
