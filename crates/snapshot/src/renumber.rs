//! Renumber arbitrarily numbered snapshot files (for example simulation
//! timestamps) into the contiguous `0.json .. N-1.json` sequence the viewer
//! steps through.

use crate::SnapshotError;
use std::path::{Path, PathBuf};

/// One copy performed (or planned) by [`renumber`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenumberedFile {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Numeric value of the file name before its first `.`.
fn frame_key(name: &str) -> Result<i64, SnapshotError> {
    let prefix = name.split('.').next().unwrap_or_default();
    prefix
        .parse::<i64>()
        .map_err(|_| SnapshotError::InvalidFrameName(name.to_string()))
}

/// Compute the copies [`renumber`] would perform, without touching the disk
/// beyond listing `source`.
pub fn plan_renumber(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
) -> Result<Vec<RenumberedFile>, SnapshotError> {
    let source = source.as_ref();
    let target = target.as_ref();
    if !source.is_dir() {
        return Err(SnapshotError::NotADirectory(source.to_path_buf()));
    }
    if same_dir(source, target) {
        return Err(SnapshotError::SameDirectory(target.to_path_buf()));
    }

    let io_err = |source_err: std::io::Error| SnapshotError::Io {
        path: source.to_path_buf(),
        source: source_err,
    };

    let mut keyed = Vec::new();
    for entry in std::fs::read_dir(source).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if !entry.file_type().map_err(io_err)?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !name.ends_with(".json") {
            continue;
        }
        keyed.push((frame_key(&name)?, name));
    }
    keyed.sort();

    Ok(keyed
        .into_iter()
        .enumerate()
        .map(|(i, (_, name))| RenumberedFile {
            source: source.join(name),
            target: target.join(format!("{i}.json")),
        })
        .collect())
}

/// Copy every `*.json` file in `source` into `target` as a zero-based
/// contiguous sequence ordered by the numeric prefix of the original names.
/// `target` is created if it does not exist.
pub fn renumber(
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
) -> Result<Vec<RenumberedFile>, SnapshotError> {
    let source = source.as_ref();
    let target = target.as_ref();
    let plan = plan_renumber(source, target)?;

    std::fs::create_dir_all(target).map_err(|e| SnapshotError::Io {
        path: target.to_path_buf(),
        source: e,
    })?;

    for file in &plan {
        std::fs::copy(&file.source, &file.target).map_err(|e| SnapshotError::Io {
            path: file.source.clone(),
            source: e,
        })?;
        tracing::info!(
            "copied {} to {}",
            file.source.display(),
            file.target.display()
        );
    }
    Ok(plan)
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn sorts_numerically_not_lexically() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("data_time");
        std::fs::create_dir(&src).unwrap();
        touch(&src, "100.json", "c");
        touch(&src, "9.json", "a");
        touch(&src, "20.json", "b");

        let dst = tmp.path().join("data_sequence");
        let copied = renumber(&src, &dst).unwrap();

        assert_eq!(copied.len(), 3);
        assert_eq!(std::fs::read_to_string(dst.join("0.json")).unwrap(), "a");
        assert_eq!(std::fs::read_to_string(dst.join("1.json")).unwrap(), "b");
        assert_eq!(std::fs::read_to_string(dst.join("2.json")).unwrap(), "c");
    }

    #[test]
    fn output_is_contiguous_from_zero() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir(&src).unwrap();
        for stamp in [1700000003, 1700000001, 1700000042, 1700000007] {
            touch(&src, &format!("{stamp}.json"), "{}");
        }
        let dst = tmp.path().join("dst");
        renumber(&src, &dst).unwrap();

        let store = crate::FrameStore::open(&dst);
        assert_eq!(store.indices().unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(store.frame_count(), 4);
    }

    #[test]
    fn prefix_before_first_dot_is_the_key() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir(&src).unwrap();
        touch(&src, "3.final.json", "three");
        touch(&src, "12.json", "twelve");
        touch(&src, "readme.txt", "ignored");

        let plan = plan_renumber(&src, tmp.path().join("dst")).unwrap();
        let sources: Vec<_> = plan
            .iter()
            .map(|f| f.source.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(sources, vec!["3.final.json", "12.json"]);
    }

    #[test]
    fn non_numeric_name_aborts_before_copying() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir(&src).unwrap();
        touch(&src, "1.json", "{}");
        touch(&src, "latest.json", "{}");

        let dst = tmp.path().join("dst");
        let err = renumber(&src, &dst).unwrap_err();
        assert!(matches!(err, SnapshotError::InvalidFrameName(ref n) if n == "latest.json"));
        assert!(!dst.join("0.json").exists());
    }

    #[test]
    fn missing_source_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let err = renumber(tmp.path().join("absent"), tmp.path().join("dst")).unwrap_err();
        assert!(matches!(err, SnapshotError::NotADirectory(_)));
    }

    #[test]
    fn renumbering_in_place_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "5.json", "{}");
        let err = renumber(tmp.path(), tmp.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::SameDirectory(_)));
    }

    #[test]
    fn planning_in_place_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "5.json", "{}");
        let err = plan_renumber(tmp.path(), tmp.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::SameDirectory(_)));
    }

    #[test]
    fn empty_source_copies_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        std::fs::create_dir(&src).unwrap();
        let dst = tmp.path().join("dst");
        assert!(renumber(&src, &dst).unwrap().is_empty());
        assert!(dst.is_dir());
    }
}
