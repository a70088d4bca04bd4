use std::collections::HashMap;

/// Symbol to icon path resolution.
///
/// Paths follow `<dir>/<symbol>.<extension>` unless overridden. The file
/// is never checked for existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIcons {
    dir: String,
    extension: String,
    overrides: HashMap<String, String>,
}

impl TokenIcons {
    /// Create a resolver for a directory and extension
    pub fn new(dir: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into().trim_end_matches('/').to_string(),
            extension: extension.into().trim_start_matches('.').to_string(),
            overrides: HashMap::new(),
        }
    }

    /// Use a fixed path for one symbol
    pub fn with_override(mut self, symbol: impl Into<String>, path: impl Into<String>) -> Self {
        self.overrides.insert(symbol.into(), path.into());
        self
    }

    /// Icon path for a symbol
    pub fn icon_path(&self, symbol: &str) -> String {
        match self.overrides.get(symbol) {
            Some(path) => path.clone(),
            None => format!("{}/{}.{}", self.dir, symbol, self.extension),
        }
    }
}

impl Default for TokenIcons {
    fn default() -> Self {
        Self::new("assets/tokens", "svg")
    }
}
