//! Numbered frame directory.
//!
//! Layout:
//! ```text
//! data/
//!   0.json
//!   1.json
//!   ...
//! ```

use crate::{Snapshot, SnapshotError};
use std::path::{Path, PathBuf};

/// Read-only view of a directory of `<index>.json` snapshot files.
#[derive(Debug, Clone)]
pub struct FrameStore {
    root: PathBuf,
}

impl FrameStore {
    /// Open a frame directory. The directory does not have to exist yet;
    /// frames that are absent simply load as `None`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            root: path.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding frame `index`.
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.root.join(format!("{index}.json"))
    }

    pub fn contains(&self, index: usize) -> bool {
        self.frame_path(index).is_file()
    }

    /// Load frame `index`. Returns `Ok(None)` when the file does not exist.
    pub fn load(&self, index: usize) -> Result<Option<Snapshot>, SnapshotError> {
        let path = self.frame_path(index);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("no such file: {}", path.display());
                return Ok(None);
            }
            Err(source) => return Err(SnapshotError::Io { path, source }),
        };
        let snapshot =
            Snapshot::from_json_str(&text).map_err(|source| SnapshotError::Parse {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(
            frame = index,
            fences = snapshot.fences.len(),
            food = snapshot.food.len(),
            snakes = snapshot.snakes.len(),
            enemies = snapshot.enemies.len(),
            "loaded frame"
        );
        Ok(Some(snapshot))
    }

    /// Sorted indices of every `<n>.json` file in the directory.
    pub fn indices(&self) -> Result<Vec<usize>, SnapshotError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| SnapshotError::Io {
            path: self.root.clone(),
            source,
        })?;
        let mut indices = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SnapshotError::Io {
                path: self.root.clone(),
                source,
            })?;
            let name = entry.file_name();
            let Some(stem) = name.to_str().and_then(|n| n.strip_suffix(".json")) else {
                continue;
            };
            if let Ok(index) = stem.parse::<usize>() {
                indices.push(index);
            }
        }
        indices.sort_unstable();
        Ok(indices)
    }

    /// Number of frames in the contiguous run starting at `0.json`.
    pub fn frame_count(&self) -> usize {
        (0..).take_while(|&i| self.contains(i)).count()
    }

    /// Indices missing from `0..=max`, i.e. holes in the sequence.
    pub fn gaps(&self) -> Result<Vec<usize>, SnapshotError> {
        let indices = self.indices()?;
        let Some(&max) = indices.last() else {
            return Ok(Vec::new());
        };
        Ok((0..=max)
            .filter(|i| indices.binary_search(i).is_err())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn frame_path_uses_index() {
        let store = FrameStore::open("data");
        assert_eq!(store.frame_path(7), PathBuf::from("data").join("7.json"));
    }

    #[test]
    fn missing_frame_loads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FrameStore::open(tmp.path());
        assert!(store.load(0).unwrap().is_none());
    }

    #[test]
    fn existing_frame_loads() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "0.json", r#"{"fences": [[1, 1, 0]], "food": [], "snakes": [], "enemies": []}"#);
        let store = FrameStore::open(tmp.path());
        let snap = store.load(0).unwrap().unwrap();
        assert_eq!(snap.fences.len(), 1);
    }

    #[test]
    fn malformed_frame_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "0.json", "{ not json");
        let store = FrameStore::open(tmp.path());
        match store.load(0) {
            Err(SnapshotError::Parse { path, .. }) => assert!(path.ends_with("0.json")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn indices_are_numeric_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["10.json", "2.json", "0.json", "notes.txt", "x.json"] {
            write(tmp.path(), name, "{}");
        }
        let store = FrameStore::open(tmp.path());
        assert_eq!(store.indices().unwrap(), vec![0, 2, 10]);
    }

    #[test]
    fn frame_count_stops_at_first_gap() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["0.json", "1.json", "3.json"] {
            write(tmp.path(), name, "{}");
        }
        let store = FrameStore::open(tmp.path());
        assert_eq!(store.frame_count(), 2);
        assert_eq!(store.gaps().unwrap(), vec![2]);
    }

    #[test]
    fn indices_of_missing_dir_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FrameStore::open(tmp.path().join("nope"));
        assert!(matches!(store.indices(), Err(SnapshotError::Io { .. })));
    }
}
