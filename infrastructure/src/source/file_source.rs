//! Choice source backed by the loaded TOML configuration

use crate::config::FileConfig;
use choiceset_application::{ChoiceSourceError, ChoiceSourcePort, SourcedDefinition};
use tracing::debug;

/// Serves the `[sets.*]` sections of a [`FileConfig`].
#[derive(Debug, Clone, Default)]
pub struct FileChoiceSource {
    config: FileConfig,
}

impl FileChoiceSource {
    pub fn new(config: FileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FileConfig {
        &self.config
    }
}

impl ChoiceSourcePort for FileChoiceSource {
    fn definitions(&self) -> Result<Vec<SourcedDefinition>, ChoiceSourceError> {
        debug!(sets = self.config.sets.len(), "Reading choice sets from config");
        Ok(self
            .config
            .sets
            .iter()
            .map(|(name, set)| set.to_definition(name))
            .collect())
    }
}
