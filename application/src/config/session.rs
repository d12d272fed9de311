//! Per-session state.
//!
//! A [`SessionContext`] is created when a chat session (or one-shot command)
//! starts and dropped when it ends. Nothing about a session lives in global
//! state; use cases receive the context explicitly.

use chrono::{DateTime, Utc};
use genomechat_domain::{Organism, OutputType};

#[derive(Debug, Clone)]
pub struct SessionContext {
    api_key: Option<String>,
    organism: Organism,
    output_types: Vec<OutputType>,
    ontology_terms: Vec<String>,
    started_at: DateTime<Utc>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            api_key: None,
            organism: Organism::default(),
            output_types: Vec::new(),
            ontology_terms: Vec::new(),
            started_at: Utc::now(),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.set_api_key(key);
        self
    }

    pub fn with_organism(mut self, organism: Organism) -> Self {
        self.organism = organism;
        self
    }

    /// Output types applied when a command does not pass `--outputs`.
    pub fn with_output_types(mut self, types: Vec<OutputType>) -> Self {
        self.output_types = types;
        self
    }

    /// Ontology terms applied when a command does not pass `--ontology`.
    pub fn with_ontology_terms(mut self, terms: Vec<String>) -> Self {
        self.ontology_terms = terms;
        self
    }

    /// Adopt a key (e.g. after a successful `setup` command). Blank keys clear it.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        let key = key.trim();
        self.api_key = (!key.is_empty()).then(|| key.to_string());
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn organism(&self) -> Organism {
        self.organism
    }

    pub fn output_types(&self) -> &[OutputType] {
        &self.output_types
    }

    pub fn ontology_terms(&self) -> &[String] {
        &self.ontology_terms
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
