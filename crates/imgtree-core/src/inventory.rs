//! Raw inventory records and the adapter that turns them into the view model.
//!
//! The records mirror an image-list response with per-manifest data. They
//! are produced elsewhere (a daemon query, a saved dump) and arrive here
//! already materialized as JSON.

use std::io::Read;

use serde::Deserialize;

use crate::error::Result;
use crate::model::{Details, Entry, Variant};
use crate::units::human_size;

/// One image as reported by the inventory service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageRecord {
    pub id: String,
    pub repo_tags: Vec<String>,
    /// Total disk usage in bytes
    pub size: u64,
    /// Number of containers using the image
    pub containers: u64,
    pub manifests: Vec<ManifestRecord>,
}

/// One manifest of a (possibly multi-platform) image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifestRecord {
    pub id: String,
    pub kind: ManifestKind,
    pub available: bool,
    pub platform: Platform,
    pub size: ManifestSize,
    /// IDs of containers using this manifest
    pub containers: Vec<String>,
}

/// What a manifest describes. Only image manifests become variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestKind {
    #[default]
    Image,
    Attestation,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub os: String,
    pub architecture: String,
    pub variant: Option<String>,
}

impl Platform {
    /// Format as `os/architecture/variant`, skipping empty parts, or
    /// `unknown` without an OS.
    pub fn display(&self) -> String {
        if self.os.is_empty() {
            return "unknown".to_string();
        }
        [
            Some(self.os.as_str()),
            Some(self.architecture.as_str()),
            self.variant.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ManifestSize {
    /// Bytes on disk including unpacked layers
    pub total: u64,
    /// Bytes of the distributable content
    pub content: u64,
}

/// Parse an inventory document (a JSON array of image records).
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ImageRecord>> {
    let records: Vec<ImageRecord> = serde_json::from_reader(reader)?;
    tracing::debug!(count = records.len(), "loaded inventory records");
    Ok(records)
}

/// Build the view model, preserving record and manifest order.
pub fn build_view(records: &[ImageRecord]) -> Vec<Entry> {
    records.iter().map(entry_from_record).collect()
}

fn entry_from_record(record: &ImageRecord) -> Entry {
    let mut total_content: u64 = 0;
    let mut children = Vec::with_capacity(record.manifests.len());

    for manifest in &record.manifests {
        if manifest.kind != ManifestKind::Image {
            tracing::debug!(
                image = %record.id,
                manifest = %manifest.id,
                kind = ?manifest.kind,
                "skipping non-image manifest"
            );
            continue;
        }

        total_content = total_content.saturating_add(manifest.size.content);
        children.push(Variant {
            platform: manifest.platform.display(),
            available: manifest.available,
            details: Details {
                id: manifest.id.clone(),
                disk_usage: human_size(manifest.size.total),
                content_size: human_size(manifest.size.content),
                in_use: !manifest.containers.is_empty(),
            },
        });
    }

    Entry {
        names: record.repo_tags.clone(),
        details: Details {
            id: record.id.clone(),
            disk_usage: human_size(record.size),
            content_size: human_size(total_content),
            in_use: record.containers > 0,
        },
        children,
    }
}
