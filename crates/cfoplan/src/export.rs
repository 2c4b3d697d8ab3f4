//! Report delivery to a directory on disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cfoplan_core::{ReportArtifact, ReportSink};

use crate::util::io::atomic_write_bytes;

/// Writes each report as `<dir>/<artifact file name>`, replacing any
/// earlier export of the same sheet name
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    dir: PathBuf,
}

impl DirectoryExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ReportSink for DirectoryExporter {
    fn deliver(&mut self, artifact: &ReportArtifact) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.file_name);
        atomic_write_bytes(&path, &artifact.bytes)?;
        tracing::info!(path = %path.display(), mime = artifact.mime_type, "Report written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfoplan_core::report::REPORT_MIME_TYPE;
    use tempfile::tempdir;

    fn artifact(name: &str, text: &str) -> ReportArtifact {
        ReportArtifact {
            file_name: name.to_string(),
            mime_type: REPORT_MIME_TYPE,
            bytes: text.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_deliver_creates_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("nested").join("reports");
        let mut exporter = DirectoryExporter::new(&target);

        let path = exporter
            .deliver(&artifact("Plan-report.txt", "CFOPlan Report for: Plan"))
            .unwrap();

        assert_eq!(path, target.join("Plan-report.txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "CFOPlan Report for: Plan"
        );
    }

    #[test]
    fn test_same_name_overwrites() {
        let dir = tempdir().unwrap();
        let mut exporter = DirectoryExporter::new(dir.path());

        exporter.deliver(&artifact("A-report.txt", "old")).unwrap();
        let path = exporter.deliver(&artifact("A-report.txt", "new")).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_unwritable_target_is_an_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        // A regular file where the directory should be
        let mut exporter = DirectoryExporter::new(&blocker);
        assert!(exporter.deliver(&artifact("A-report.txt", "x")).is_err());
    }
}
