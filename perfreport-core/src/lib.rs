//! perfreport-core: schema-tolerant model and report renderer for
//! distributed object-store speedtest results.
//!
//! A result arrives either as a bare JSON document or as a zip archive
//! bundling per-run JSON with a `cluster.info` metadata file. [`load`] tries
//! archive resolution first and falls back to plain JSON; the decoded
//! [`SpeedtestResult`] renders through its `Display` impl and re-encodes via
//! [`SpeedtestResult::to_json`].

pub mod archive;
pub mod error;
mod render;
pub mod result;
pub mod units;

pub use error::ReportError;
pub use result::{
    Client, Cluster, ClusterInfo, Drive, DriveServer, Get, Network, NetworkServer, Object,
    ObjectServer, Perf, Put, ResponseTime, SiteReplication, SiteServer, SpeedtestResult,
};
pub use units::{Bytes, DurationNs, UnitBase};

use std::path::Path;

/// Load a result from a path holding either a zip bundle or a bare JSON
/// document.
///
/// A readable zip that merely contains no usable result does not fall back
/// to JSON parsing; only a path that is not a zip archive at all is retried
/// as a plain document.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SpeedtestResult, ReportError> {
    let path = path.as_ref();
    match archive::from_zip_file(path) {
        Ok(result) => Ok(result),
        Err(err @ ReportError::NoResultInArchive(_)) => Err(err),
        Err(_) => SpeedtestResult::from_json_file(path),
    }
}
