//! Template repository port and JSON import/export.
//! The engine consumes plain `Template` values through this narrow
//! interface; actual persistence backends live outside the crate.

use indexmap::IndexMap;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::Template;

/// Narrow repository interface the engine and front-ends call through.
///
/// Implementations own storage and ordering; this crate ships an
/// in-memory reference implementation used by the binary and the tests.
pub trait TemplateStore {
    fn get(&self, id: Uuid) -> Option<&Template>;
    fn list(&self) -> Vec<&Template>;
    /// Inserts the template or replaces the one sharing its id.
    fn upsert(&mut self, template: Template);
    /// Deletes the template, returning it if it existed.
    fn delete(&mut self, id: Uuid) -> Option<Template>;
}

/// Insertion-ordered in-memory template store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    templates: IndexMap<Uuid, Template>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a template up, failing with `TemplateNotFound` instead of
    /// returning an option.
    pub fn require(&self, id: Uuid) -> Result<&Template> {
        self.get(id).ok_or(Error::TemplateNotFound { id })
    }
}

impl TemplateStore for MemoryStore {
    fn get(&self, id: Uuid) -> Option<&Template> {
        self.templates.get(&id)
    }

    fn list(&self) -> Vec<&Template> {
        self.templates.values().collect()
    }

    fn upsert(&mut self, template: Template) {
        self.templates.insert(template.id, template);
    }

    fn delete(&mut self, id: Uuid) -> Option<Template> {
        self.templates.shift_remove(&id)
    }
}

/// Serializes one template to pretty-printed JSON.
pub fn export_template(template: &Template) -> Result<String> {
    Ok(serde_json::to_string_pretty(template)?)
}

/// Serializes a sequence of templates to pretty-printed JSON.
pub fn export_templates(templates: &[Template]) -> Result<String> {
    Ok(serde_json::to_string_pretty(templates)?)
}

/// Deserializes one template from JSON.
pub fn import_template(json: &str) -> Result<Template> {
    Ok(serde_json::from_str(json)?)
}

/// Deserializes a sequence of templates from JSON.
pub fn import_templates(json: &str) -> Result<Vec<Template>> {
    Ok(serde_json::from_str(json)?)
}
