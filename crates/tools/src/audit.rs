use snakeview_snapshot::{FrameStore, SnapshotError};
use std::fmt;

/// A frame that failed to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameProblem {
    pub index: usize,
    pub message: String,
}

/// Result of checking every frame in a data directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameAudit {
    /// Frames that parsed.
    pub valid: Vec<usize>,
    pub problems: Vec<FrameProblem>,
    /// Holes in the `0..=max` sequence.
    pub gaps: Vec<usize>,
}

impl FrameAudit {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty() && self.gaps.is_empty()
    }
}

impl fmt::Display for FrameAudit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frames: {} valid, {} malformed, {} missing",
            self.valid.len(),
            self.problems.len(),
            self.gaps.len()
        )
    }
}

/// Parse every numbered frame in `store`.
///
/// Only a failure to list the directory is an error; per-frame failures are
/// collected in the report.
pub fn audit_frames(store: &FrameStore) -> Result<FrameAudit, SnapshotError> {
    let mut audit = FrameAudit {
        gaps: store.gaps()?,
        ..FrameAudit::default()
    };
    for index in store.indices()? {
        match store.load(index) {
            Ok(Some(_)) => audit.valid.push(index),
            // Deleted between listing and loading.
            Ok(None) => audit.gaps.push(index),
            Err(e) => audit.problems.push(FrameProblem {
                index,
                message: e.to_string(),
            }),
        }
    }
    audit.gaps.sort_unstable();
    tracing::debug!(
        valid = audit.valid.len(),
        problems = audit.problems.len(),
        gaps = audit.gaps.len(),
        "audited {}",
        store.root().display()
    );
    Ok(audit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn clean_directory() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "0.json", "{}");
        write(tmp.path(), "1.json", r#"{"fences": [[0, 0, 0]]}"#);
        let audit = audit_frames(&FrameStore::open(tmp.path())).unwrap();
        assert!(audit.is_clean());
        assert_eq!(audit.valid, vec![0, 1]);
    }

    #[test]
    fn reports_gaps_and_malformed_frames() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "0.json", "{}");
        write(tmp.path(), "1.json", "[oops");
        write(tmp.path(), "3.json", "{}");
        let audit = audit_frames(&FrameStore::open(tmp.path())).unwrap();
        assert!(!audit.is_clean());
        assert_eq!(audit.valid, vec![0, 3]);
        assert_eq!(audit.gaps, vec![2]);
        assert_eq!(audit.problems.len(), 1);
        assert_eq!(audit.problems[0].index, 1);
        assert_eq!(audit.to_string(), "frames: 2 valid, 1 malformed, 1 missing");
    }

    #[test]
    fn missing_directory_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(audit_frames(&FrameStore::open(tmp.path().join("nope"))).is_err());
    }
}
