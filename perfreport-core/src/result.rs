//! Schema-tolerant model of a speedtest result document.
//!
//! The field set is the union of the three observed schema revisions; every
//! field is defaultable, so a document from any revision decodes into the
//! same structure. Unknown fields are ignored. A section carries data only
//! when its presence predicate says so.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::units::{Bytes, DurationNs};

fn is_zero(n: &u64) -> bool {
    *n == 0
}

/// Root aggregate for one speedtest run.
///
/// The version label is absent from measurement documents; the archive
/// resolver stamps it from the bundled cluster metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedtestResult {
    #[serde(default, rename = "Version", skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub drive: Drive,
    #[serde(default)]
    pub object: Object,
    #[serde(default)]
    pub client: Client,
    #[serde(default, rename = "siteReplication")]
    pub site_replication: SiteReplication,
}

impl SpeedtestResult {
    /// Decode a raw JSON document.
    ///
    /// Absent fields are left at their zero values and unknown fields are
    /// ignored; only malformed JSON or a type mismatch on a field the
    /// document does carry fails.
    pub fn from_slice(data: &[u8]) -> Result<Self, ReportError> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let data = fs::read(path)?;
        Self::from_slice(&data)
    }

    /// Re-encode as indented JSON with the same wire names the document was
    /// decoded with. Zero-valued scalars and empty lists are dropped;
    /// section objects are always emitted.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Per-node network interface throughput measurements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<NetworkServer>,
}

impl Network {
    pub fn is_present(&self) -> bool {
        !self.servers.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkServer {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(default)]
    pub perf: Perf,
}

/// Per-node, per-disk throughput measurements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drive {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<DriveServer>,
}

impl Drive {
    pub fn is_present(&self) -> bool {
        !self.servers.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveServer {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(default, rename = "perf", skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<Perf>,
}

/// Aggregate PUT/GET object benchmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    #[serde(default, rename = "objectSize", skip_serializing_if = "Bytes::is_zero")]
    pub object_size: Bytes,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub threads: u64,
    #[serde(default, rename = "PUT")]
    pub put: Put,
    #[serde(default, rename = "GET")]
    pub get: Get,
}

impl Object {
    pub fn is_present(&self) -> bool {
        self.threads > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Put {
    #[serde(default)]
    pub perf: Perf,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ObjectServer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Get {
    #[serde(default)]
    pub perf: Perf,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ObjectServer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectServer {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
}

/// Client-to-cluster transfer measurement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(default, rename = "bytesSent", skip_serializing_if = "Bytes::is_zero")]
    pub bytes_sent: Bytes,
    #[serde(default, rename = "timeSpent", skip_serializing_if = "DurationNs::is_zero")]
    pub time_spent: DurationNs,
}

impl Client {
    pub fn is_present(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// Mean transfer rate in whole bytes per second. A run shorter than one
    /// whole second reports the raw byte count.
    pub fn throughput(&self) -> Bytes {
        let secs = self.time_spent.as_secs();
        if secs > 0 {
            Bytes(self.bytes_sent.0 / secs)
        } else {
            self.bytes_sent
        }
    }
}

/// Per-site replication throughput measurements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteReplication {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<SiteServer>,
}

impl SiteReplication {
    pub fn is_present(&self) -> bool {
        !self.servers.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteServer {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
    #[serde(default)]
    pub perf: Perf,
}

/// Reusable measurement bundle attached to a node, disk, or site.
///
/// Older schema revisions never populated the `tx`/`rx` duration fields and
/// instead wrote a pre-computed rate into the byte-count field itself; the
/// derived-rate accessors keep that compatibility fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perf {
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub throughput: Bytes,
    #[serde(default, rename = "objectsPerSec", skip_serializing_if = "is_zero")]
    pub objects_per_sec: u64,
    #[serde(default, rename = "responseTime")]
    pub response_time: ResponseTime,
    #[serde(default)]
    pub ttfb: ResponseTime,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub tx: Bytes,
    #[serde(default, rename = "txTotalDuration", skip_serializing_if = "DurationNs::is_zero")]
    pub tx_total_duration: DurationNs,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub rx: Bytes,
    #[serde(default, rename = "rxTotalDuration", skip_serializing_if = "DurationNs::is_zero")]
    pub rx_total_duration: DurationNs,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, rename = "readThroughput", skip_serializing_if = "Bytes::is_zero")]
    pub read_throughput: Bytes,
    #[serde(default, rename = "writeThroughput", skip_serializing_if = "Bytes::is_zero")]
    pub write_throughput: Bytes,
}

impl Perf {
    /// Receive rate in bytes per second when the run covered at least one
    /// whole second, else the raw byte count.
    pub fn rx_rate(&self) -> Bytes {
        let secs = self.rx_total_duration.as_secs();
        if secs > 0 {
            Bytes(self.rx.0 / secs)
        } else {
            self.rx
        }
    }

    /// Transmit counterpart of [`Perf::rx_rate`].
    pub fn tx_rate(&self) -> Bytes {
        let secs = self.tx_total_duration.as_secs();
        if secs > 0 {
            Bytes(self.tx.0 / secs)
        } else {
            self.tx
        }
    }
}

/// Latency distribution as reported by the cluster.
///
/// The values reuse the byte-count wrapper even though they are time
/// magnitudes; the wire format does not encode units differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTime {
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub avg: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub p50: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub p75: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub p95: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub p99: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub p999: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub l5p: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub s5p: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub max: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub min: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub sdev: Bytes,
    #[serde(default, skip_serializing_if = "Bytes::is_zero")]
    pub range: Bytes,
}

/// Auxiliary `cluster.info` document bundled in archives; carries only the
/// cluster's software version.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cluster {
    #[serde(default)]
    pub info: ClusterInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterInfo {
    #[serde(default, rename = "minio_version")]
    pub version: String,
}
