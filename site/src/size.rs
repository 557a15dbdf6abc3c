//! # Asset Size Reporter
//!
//! Measures how large the bundled client build is on the wire: the bytes are
//! gzipped at maximum effort and the compressed length is formatted for the
//! page badge. The compressed bytes are thrown away; they are never served.

use crate::assets::AssetStore;
use crate::error::{SiteError, SiteResult};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

const SI_SUFFIXES: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Length of `bytes` after gzip at `Compression::best()`.
pub fn compressed_len(bytes: &[u8]) -> std::io::Result<u64> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(bytes.len() / 2), Compression::best());
    encoder.write_all(bytes)?;
    let compressed = encoder.finish()?;
    Ok(compressed.len() as u64)
}

/// Format a byte count with SI (base 1000) units, e.g. `"9 B"`, `"1.2 kB"`,
/// `"35 kB"`. Below ten of a unit one decimal is kept.
pub fn humanize_bytes(n: u64) -> String {
    if n < 10 {
        return format!("{n} B");
    }

    let mut exp = 0;
    let mut unit = 1u64;
    while exp < SI_SUFFIXES.len() - 1 && n / unit >= 1000 {
        unit *= 1000;
        exp += 1;
    }

    let value = ((n as f64 / unit as f64) * 10.0 + 0.5).floor() / 10.0;
    if value < 10.0 {
        format!("{value:.1} {}", SI_SUFFIXES[exp])
    } else {
        format!("{value:.0} {}", SI_SUFFIXES[exp])
    }
}

/// Result of measuring one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub path: String,
    pub raw_len: u64,
    pub compressed_len: u64,
    /// Human readable compressed size, shown on the page.
    pub display: String,
}

pub struct AssetSizeReporter;

impl AssetSizeReporter {
    /// Read `path` from `store` and measure it.
    pub fn report(store: &dyn AssetStore, path: &str) -> SiteResult<SizeReport> {
        let bytes = store
            .read(path)
            .map_err(|source| SiteError::AssetUnavailable {
                path: path.to_string(),
                source,
            })?;

        let compressed = compressed_len(&bytes).map_err(SiteError::Compression)?;
        let report = SizeReport {
            path: path.to_string(),
            raw_len: bytes.len() as u64,
            compressed_len: compressed,
            display: humanize_bytes(compressed),
        };

        tracing::info!(
            asset = %report.path,
            raw = report.raw_len,
            gzipped = report.compressed_len,
            display = %report.display,
            "Measured bundle size"
        );
        Ok(report)
    }
}
