//! Resolves a zip-packaged speedtest run: locates the measurement document
//! and the cluster metadata among the archive entries and stitches the
//! cluster version into the result.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::error::ReportError;
use crate::result::{Cluster, SpeedtestResult};

/// Archive entry carrying the cluster metadata document.
const CLUSTER_INFO_ENTRY: &str = "cluster.info";

/// Scan a zip archive for a speedtest result and its cluster metadata.
///
/// The scan is flat and best-effort: entries that fail to read or decode are
/// skipped, and with several `.json` candidates the last one that decodes
/// wins (enumeration order, no sorting). Missing or unparsable metadata
/// leaves the version label empty; no decodable result at all fails with
/// [`ReportError::NoResultInArchive`].
pub fn from_zip_file<P: AsRef<Path>>(path: P) -> Result<SpeedtestResult, ReportError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut result: Option<SpeedtestResult> = None;
    let mut cluster: Option<Cluster> = None;

    for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(err) => {
                debug!(index, %err, "skipping unreadable archive entry");
                continue;
            }
        };
        let name = entry.name().to_owned();
        let mut data = Vec::new();
        if let Err(err) = entry.read_to_end(&mut data) {
            debug!(entry = %name, %err, "skipping unreadable archive entry");
            continue;
        }

        if name == CLUSTER_INFO_ENTRY {
            match serde_json::from_slice::<Cluster>(&data) {
                Ok(parsed) => cluster = Some(parsed),
                Err(err) => debug!(entry = %name, %err, "ignoring unparsable cluster metadata"),
            }
        }
        if name.ends_with(".json") {
            match SpeedtestResult::from_slice(&data) {
                Ok(parsed) => result = Some(parsed),
                Err(err) => debug!(entry = %name, %err, "ignoring undecodable result candidate"),
            }
        }
    }

    match result {
        Some(mut result) => {
            if let Some(cluster) = cluster {
                result.version = cluster.info.version;
            }
            Ok(result)
        }
        None => Err(ReportError::NoResultInArchive(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    const RESULT_DOC: &str = r#"{"object": {"threads": 32, "objectSize": 10485760}}"#;
    const CLUSTER_DOC: &str = r#"{"info": {"minio_version": "RELEASE.2023-05-04T21-44-30Z"}}"#;

    fn write_archive(dir: &TempDir, entries: &[(&str, &str)]) -> PathBuf {
        let path = dir.path().join("speedtest.zip");
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, content) in entries {
            writer
                .start_file(name.to_string(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    #[test]
    fn stitches_version_from_cluster_metadata() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(&dir, &[("result.json", RESULT_DOC), ("cluster.info", CLUSTER_DOC)]);
        let result = from_zip_file(&path).unwrap();
        assert_eq!(result.version, "RELEASE.2023-05-04T21-44-30Z");
        assert_eq!(result.object.threads, 32);
    }

    #[test]
    fn entry_order_does_not_matter() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(
            &dir,
            &[
                ("readme.txt", "not json"),
                ("cluster.info", CLUSTER_DOC),
                ("result.json", RESULT_DOC),
            ],
        );
        let result = from_zip_file(&path).unwrap();
        assert_eq!(result.version, "RELEASE.2023-05-04T21-44-30Z");
    }

    #[test]
    fn missing_metadata_leaves_the_version_empty() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(&dir, &[("result.json", RESULT_DOC)]);
        let result = from_zip_file(&path).unwrap();
        assert!(result.version.is_empty());
        assert!(result.object.is_present());
    }

    #[test]
    fn unparsable_metadata_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(&dir, &[("cluster.info", "garbage"), ("result.json", RESULT_DOC)]);
        let result = from_zip_file(&path).unwrap();
        assert!(result.version.is_empty());
    }

    #[test]
    fn last_decodable_json_entry_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(
            &dir,
            &[
                ("a.json", r#"{"object": {"threads": 1}}"#),
                ("b.json", r#"{"object": {"threads": 2}}"#),
                ("c.json", "{broken"),
            ],
        );
        let result = from_zip_file(&path).unwrap();
        assert_eq!(result.object.threads, 2);
    }

    #[test]
    fn empty_archive_yields_no_result() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(&dir, &[]);
        let err = from_zip_file(&path).unwrap_err();
        assert!(matches!(err, ReportError::NoResultInArchive(_)));
    }

    #[test]
    fn archive_without_json_entries_yields_no_result() {
        let dir = TempDir::new().unwrap();
        let path = write_archive(&dir, &[("cluster.info", CLUSTER_DOC), ("notes.txt", "hi")]);
        let err = from_zip_file(&path).unwrap_err();
        assert!(matches!(err, ReportError::NoResultInArchive(_)));
    }

    #[test]
    fn non_archive_input_is_an_io_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.json");
        std::fs::write(&path, RESULT_DOC).unwrap();
        let err = from_zip_file(&path).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
