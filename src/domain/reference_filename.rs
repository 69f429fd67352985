use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::{ReferenceId, ReferenceSource};

const DEFAULT_EXTENSION: &str = ".wav";
const FALLBACK_BASE: &str = "reference";

static NON_PORTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.\-]").unwrap());

/// File name of a reference inside the reference audio directory. Every
/// constructor embeds a fresh [`ReferenceId`], so names never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceFilename(String);

impl ReferenceFilename {
    /// `<sanitized-base>_<id><ext>`, falling back to `.wav` when the upload
    /// carries no usable extension.
    pub fn for_upload(original: &str, id: &ReferenceId) -> Self {
        let sanitized = sanitize_filename(original);
        let (base, ext) = split_extension(&sanitized);
        let base = if base.is_empty() { FALLBACK_BASE } else { base };
        let ext = ext.unwrap_or(DEFAULT_EXTENSION);
        Self(format!("{}_{}{}", base, id, ext))
    }

    pub fn synthesized(source: ReferenceSource, id: &ReferenceId) -> Self {
        Self(format!("recorded_{}_{}{}", source.tag(), id, DEFAULT_EXTENSION))
    }

    pub fn segment(id: &ReferenceId) -> Self {
        Self(format!("segment_{}{}", id, DEFAULT_EXTENSION))
    }

    pub fn from_raw(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduces a client supplied file name to a portable ASCII name with no path
/// components. May return an empty string.
pub fn sanitize_filename(raw: &str) -> String {
    let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
    let separated = ascii.replace(['/', '\\'], " ");
    let joined = separated.split_whitespace().collect::<Vec<_>>().join("_");
    let portable = NON_PORTABLE.replace_all(&joined, "");
    portable.trim_matches(|c| c == '.' || c == '_').to_string()
}

fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => {
            let (base, ext) = name.split_at(idx);
            let usable = ext.len() > 1 && ext[1..].chars().all(|c| c.is_ascii_alphanumeric());
            (base, usable.then_some(ext))
        }
        _ => (name, None),
    }
}

