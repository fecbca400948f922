use serde::Deserialize;

pub(crate) mod nul;
pub(crate) mod status;

/// Limits and strictness applied while decoding status output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Longest accepted record in bytes, not counting its NUL terminator.
    pub max_record_len: usize,
    /// Fail on entry lines that don't fit their grammar instead of skipping them.
    /// Also fails on records that aren't valid UTF-8.
    pub strict_entries: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_record_len: 1 << 20,
            strict_entries: false,
        }
    }
}
