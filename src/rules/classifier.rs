use std::path::Path;

use crate::rules::types::RiskTag;

/// Tags files as watched-risk by extension.
#[derive(Debug, Clone)]
pub struct RiskClassifier {
    extensions: Vec<String>,
}

impl RiskClassifier {
    pub fn new(extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// `extension` includes the leading separator (`.py`). Empty or unknown
    /// extensions are unwatched.
    pub fn classify(&self, extension: &str) -> RiskTag {
        if !extension.is_empty() && self.extensions.iter().any(|e| e == extension) {
            RiskTag::Watched
        } else {
            RiskTag::Unwatched
        }
    }
}

/// The file extension with its leading `.`, or an empty string.
///
/// Dotfiles such as `.bashrc` have no extension; `archive.tar.gz` has `.gz`.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
