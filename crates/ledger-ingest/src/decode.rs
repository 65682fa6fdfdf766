//! Text decoding for CSV sources of unknown encoding.
//!
//! Ledger exports arrive as UTF-8 (with or without BOM), UTF-16LE from
//! spreadsheet "Unicode text" exports, or legacy code pages (Big5, GBK,
//! Windows-1252). Decoding never fails:
//!
//! 1. A UTF-8 or UTF-16LE byte-order mark picks the encoding outright.
//! 2. Otherwise each candidate encoding decodes the whole buffer in turn and
//!    the first one the [`CleanDecodeHeuristic`] accepts wins.
//! 3. If no candidate is accepted, the buffer is decoded as lossy UTF-8.
//!
//! The result then has replacement, NUL, and control characters removed
//! (TAB, LF, and CR are kept for the CSV reader).

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use encoding_rs::{Encoding, UTF_8, UTF_16LE};
use serde::Serialize;
use tracing::{debug, trace};

use ledger_common::{REPLACEMENT_CHARACTER, strip_control_chars};

use crate::error::{IngestError, Result};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// UTF-16 little-endian byte-order mark.
pub const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Candidate labels tried, in order, when no BOM is present.
///
/// Resolved through the WHATWG label table, where `gb2312` is an alias of
/// GBK and `latin1` an alias of Windows-1252.
pub const DEFAULT_CANDIDATE_LABELS: [&str; 6] =
    ["utf-8", "big5", "gb2312", "gbk", "latin1", "windows-1252"];

/// Decides whether a candidate decode is good enough to accept.
pub trait CleanDecodeHeuristic: fmt::Debug + Send + Sync {
    /// `had_errors` is true when the decoder hit malformed input and
    /// substituted replacement characters.
    fn is_clean(&self, text: &str, had_errors: bool) -> bool;
}

/// Accepts any decode that met no malformed byte sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectMalformed;

impl CleanDecodeHeuristic for RejectMalformed {
    fn is_clean(&self, _text: &str, had_errors: bool) -> bool {
        !had_errors
    }
}

/// Also rejects decodes whose output contains U+FFFD, even when the source
/// bytes encoded it legitimately.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectReplacementChars;

impl CleanDecodeHeuristic for RejectReplacementChars {
    fn is_clean(&self, text: &str, had_errors: bool) -> bool {
        !had_errors && !text.contains(REPLACEMENT_CHARACTER)
    }
}

/// How the decoder arrived at its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeConfidence {
    /// A byte-order mark named the encoding.
    Bom,
    /// A candidate encoding decoded the buffer cleanly.
    Clean,
    /// No candidate was accepted; lossy UTF-8 was used.
    BestEffort,
}

impl DecodeConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bom => "bom",
            Self::Clean => "clean",
            Self::BestEffort => "best-effort",
        }
    }
}

impl fmt::Display for DecodeConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate encodings and the acceptance heuristic.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    candidates: Vec<&'static Encoding>,
    heuristic: Arc<dyn CleanDecodeHeuristic>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        let candidates = DEFAULT_CANDIDATE_LABELS
            .iter()
            .filter_map(|label| Encoding::for_label(label.as_bytes()))
            .collect();
        Self {
            candidates: dedup_encodings(candidates),
            heuristic: Arc::new(RejectMalformed),
        }
    }
}

impl DecoderConfig {
    /// Replaces the candidate list with encodings resolved from WHATWG labels.
    pub fn with_candidate_labels<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut candidates = Vec::new();
        for label in labels {
            let label = label.as_ref();
            let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
                IngestError::UnknownEncoding {
                    label: label.to_string(),
                }
            })?;
            candidates.push(encoding);
        }
        self.candidates = dedup_encodings(candidates);
        Ok(self)
    }

    /// Replaces the candidate list.
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<&'static Encoding>) -> Self {
        self.candidates = dedup_encodings(candidates);
        self
    }

    /// Replaces the acceptance heuristic.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: impl CleanDecodeHeuristic + 'static) -> Self {
        self.heuristic = Arc::new(heuristic);
        self
    }

    /// Candidate encodings in trial order.
    pub fn candidates(&self) -> &[&'static Encoding] {
        &self.candidates
    }
}

fn dedup_encodings(encodings: Vec<&'static Encoding>) -> Vec<&'static Encoding> {
    let mut unique: Vec<&'static Encoding> = Vec::with_capacity(encodings.len());
    for encoding in encodings {
        if !unique.contains(&encoding) {
            unique.push(encoding);
        }
    }
    unique
}

/// Decoded CSV text and how it was obtained.
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// Text without BOM and without stripped control characters.
    pub text: String,
    /// Encoding that produced `text`.
    pub encoding: &'static Encoding,
    pub confidence: DecodeConfidence,
}

/// Decodes `bytes` into clean text. Never fails.
pub fn decode(bytes: &[u8], config: &DecoderConfig) -> DecodedText {
    let (raw, encoding, confidence) = decode_raw(bytes, config);
    let text = strip_control_chars(&raw).into_owned();
    debug!(
        encoding = encoding.name(),
        confidence = %confidence,
        bytes = bytes.len(),
        chars_removed = raw.chars().count() - text.chars().count(),
        "decoded source text"
    );
    DecodedText {
        text,
        encoding,
        confidence,
    }
}

fn decode_raw<'a>(
    bytes: &'a [u8],
    config: &DecoderConfig,
) -> (Cow<'a, str>, &'static Encoding, DecodeConfidence) {
    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
        let (text, _) = UTF_8.decode_without_bom_handling(rest);
        return (text, UTF_8, DecodeConfidence::Bom);
    }
    if let Some(rest) = bytes.strip_prefix(&UTF16LE_BOM) {
        let (text, _) = UTF_16LE.decode_without_bom_handling(rest);
        return (text, UTF_16LE, DecodeConfidence::Bom);
    }

    for &encoding in &config.candidates {
        let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
        if config.heuristic.is_clean(&text, had_errors) {
            return (text, encoding, DecodeConfidence::Clean);
        }
        trace!(encoding = encoding.name(), had_errors, "candidate rejected");
    }

    let (text, _) = UTF_8.decode_without_bom_handling(bytes);
    (text, UTF_8, DecodeConfidence::BestEffort)
}
