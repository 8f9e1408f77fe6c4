//! Fixed-order text rendering of a speedtest result.
//!
//! Sections render only when present and contribute nothing otherwise. The
//! tab-column layout and checkmark headers match the cluster tooling's own
//! report output.

use std::fmt;

use crate::result::SpeedtestResult;

impl fmt::Display for SpeedtestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut drive_count = 0usize;

        if self.network.is_present() {
            writeln!(f, "NetPerf: ✔")?;
            writeln!(f)?;
            writeln!(f, "NODE\t\t\t\tRX\t\tTX")?;
            for server in &self.network.servers {
                writeln!(
                    f,
                    "{}\t{:.1} GiB/s\t{:.1} GiB/s",
                    server.endpoint,
                    server.perf.rx_rate().gib(),
                    server.perf.tx_rate().gib(),
                )?;
            }
            writeln!(f)?;
        }

        if self.drive.is_present() {
            writeln!(f, "DrivePerf: ✔")?;
            writeln!(f)?;
            writeln!(f, "NODE\t\t\t\tPATH\t\t\tREAD\t\tWRITE")?;
            for server in &self.drive.servers {
                for disk in &server.disks {
                    drive_count += 1;
                    writeln!(
                        f,
                        "{}\t{}\t{:.0} MiB/s\t{:.0} MiB/s",
                        server.endpoint,
                        disk.path,
                        disk.read_throughput.mib(),
                        disk.write_throughput.mib(),
                    )?;
                }
            }
            writeln!(f)?;
        }

        if self.object.is_present() {
            writeln!(f, "ObjectPerf: ✔")?;
            writeln!(f)?;
            writeln!(f, "   \tTHROUGHPUT\tIOPS")?;
            writeln!(
                f,
                "PUT\t{:.1} GiB/s\t{} objs/s",
                self.object.put.perf.throughput.gib(),
                self.object.put.perf.objects_per_sec,
            )?;
            writeln!(
                f,
                "GET\t{:.1} GiB/s\t{} objs/s",
                self.object.get.perf.throughput.gib(),
                self.object.get.perf.objects_per_sec,
            )?;
            writeln!(f)?;
            writeln!(
                f,
                "MinIO {}, {} servers, {} drives, {:.0} MiB objects, {} threads",
                self.version,
                self.network.servers.len(),
                drive_count,
                self.object.object_size.mib(),
                self.object.threads,
            )?;
            writeln!(f)?;
        }

        if self.client.is_present() {
            writeln!(f, "Client: ✔")?;
            writeln!(f)?;
            writeln!(f, "ENDPOINT\t\t\t\t\tTX")?;
            writeln!(
                f,
                "{}\t{:.1} MiB/s",
                self.client.endpoint,
                self.client.throughput().mib(),
            )?;
        }

        if self.site_replication.is_present() {
            writeln!(f, "SiteReplication: ✔")?;
            writeln!(f)?;
            writeln!(f, "ENDPOINT\t\tRX\t\tTX")?;
            for server in &self.site_replication.servers {
                writeln!(
                    f,
                    "{}\t{:.1} MiB/s\t{:.1} MiB/s",
                    server.endpoint,
                    server.perf.rx_rate().mib(),
                    server.perf.tx_rate().mib(),
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
