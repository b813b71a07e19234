//! Classifier and loader configuration.

/// Label reported when no class scores above zero.
pub const DEFAULT_FALLBACK_LABEL: &str = "other";

/// Settings for [`BayesClassifier`](crate::bayes::BayesClassifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub fallback_label: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            fallback_label: DEFAULT_FALLBACK_LABEL.to_string(),
        }
    }
}

impl ClassifierConfig {
    pub fn with_fallback_label<S: Into<String>>(mut self, label: S) -> Self {
        self.fallback_label = label.into();
        self
    }
}

/// Settings for reading training and test files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Single byte separating tokens on a line.
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { delimiter: b' ' }
    }
}

impl LoaderConfig {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
