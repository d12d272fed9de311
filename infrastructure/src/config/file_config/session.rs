//! Session defaults from TOML (`[session]` section)

use genomechat_application::SessionContext;
use genomechat_domain::{Organism, OutputType};
use serde::{Deserialize, Serialize};

/// Defaults applied to every new chat session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    pub organism: Organism,
    /// Output types requested when a command names none
    pub output_types: Vec<OutputType>,
    /// Ontology terms requested when a command names none
    pub ontology_terms: Vec<String>,
}

impl FileSessionConfig {
    /// Start a session with these defaults and the given key.
    pub fn to_session(&self, api_key: Option<&str>) -> SessionContext {
        let session = SessionContext::new()
            .with_organism(self.organism)
            .with_output_types(self.output_types.clone())
            .with_ontology_terms(self.ontology_terms.clone());
        match api_key {
            Some(key) => session.with_api_key(key),
            None => session,
        }
    }
}
