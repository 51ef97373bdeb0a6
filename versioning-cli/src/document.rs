//! Loading and encoding versioning documents.

use crate::generated::VERSIONING_INFORMATION;
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use std::borrow::Cow;
use tracing::{debug, info};
use versioning_types::schema::VERSIONING_INFO_V1;
use versioning_types::{VersioningDocument, VersioningInformation};

/// Encodings a versioning document can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension (`.json` or `.toml`).
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Read a versioning document and return the information it carries.
///
/// Fails on unreadable files, unknown extensions, malformed content and
/// documents written for another schema.
pub fn load_document(path: &Utf8Path) -> anyhow::Result<VersioningInformation<'static>> {
    let format = DocumentFormat::from_path(path).with_context(|| {
        format!(
            "unsupported document extension for {} (expected .json or .toml)",
            path
        )
    })?;
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path))?;

    let doc: VersioningDocument<'static> = match format {
        DocumentFormat::Json => {
            serde_json::from_str(&contents).with_context(|| format!("parse json {}", path))?
        }
        DocumentFormat::Toml => {
            toml::from_str(&contents).with_context(|| format!("parse toml {}", path))?
        }
    };

    if !doc.is_supported() {
        anyhow::bail!(
            "unsupported schema '{}' in {} (expected '{}')",
            doc.schema,
            path,
            VERSIONING_INFO_V1
        );
    }

    info!("loaded versioning document {}", path);
    Ok(doc.versioning)
}

/// The document at `input`, or the compiled-in value when `input` is `None`.
pub fn select(
    input: Option<&Utf8Path>,
) -> anyhow::Result<Cow<'static, VersioningInformation<'static>>> {
    match input {
        Some(path) => Ok(Cow::Owned(load_document(path)?)),
        None => {
            debug!("using compiled-in versioning information");
            Ok(Cow::Borrowed(&VERSIONING_INFORMATION))
        }
    }
}

/// Encode `info` as a versioning document, newline-terminated.
pub fn encode(info: &VersioningInformation<'_>, format: DocumentFormat) -> anyhow::Result<String> {
    let doc = VersioningDocument::new(info.clone());
    let mut out = match format {
        DocumentFormat::Json => serde_json::to_string_pretty(&doc).context("serialize json")?,
        DocumentFormat::Toml => toml::to_string(&doc).context("serialize toml")?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
