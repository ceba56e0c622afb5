//! Session configuration

use crate::model::Catalog;
use crate::seed;

/// Configuration for an interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Whether the catalog starts with the seed songs
    pub seed: bool,
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new() -> Self {
        Self { seed: true }
    }

    /// Set whether the seed songs are loaded
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Build the initial catalog for this configuration
    pub fn build_catalog(&self) -> Catalog {
        if self.seed {
            seed::seeded_catalog()
        } else {
            Catalog::new()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
