use serde::Deserialize;
use std::collections::HashSet;

use crate::error::SiteError;

const BUILTIN_TEMPLATES: &str = include_str!("../../assets/dashboard_templates.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Widget {
    pub title: String,
    pub description: String,
    /// Primary value, primary label, trend value.
    pub stats: [String; 3],
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Template {
    pub title: String,
    pub widgets: Vec<Widget>,
}

#[derive(Deserialize)]
struct IndustryEntry {
    key: String,
    #[serde(flatten)]
    template: Template,
}

#[derive(Deserialize)]
struct RegistryFile {
    default: String,
    industries: Vec<IndustryEntry>,
}

/// Read-only mapping from industry key to dashboard template, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateRegistry {
    default_key: String,
    entries: Vec<(String, Template)>,
}

impl TemplateRegistry {
    pub fn builtin() -> Result<Self, SiteError> {
        Self::from_json(BUILTIN_TEMPLATES)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let file: RegistryFile = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for entry in &file.industries {
            if !seen.insert(entry.key.as_str()) {
                return Err(SiteError::DuplicateIndustry(entry.key.clone()));
            }
            if entry.template.widgets.is_empty() {
                return Err(SiteError::EmptyTemplate(entry.key.clone()));
            }
        }
        if !seen.contains(file.default.as_str()) {
            return Err(SiteError::MissingDefault(file.default));
        }

        Ok(Self {
            default_key: file.default,
            entries: file
                .industries
                .into_iter()
                .map(|entry| (entry.key, entry.template))
                .collect(),
        })
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.entries.iter().map(|(key, template)| (key.as_str(), template))
    }

    /// Strict lookup: unknown keys are a caller error.
    pub fn get(&self, key: &str) -> Result<&Template, SiteError> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, template)| template)
            .ok_or_else(|| SiteError::UnknownIndustry(key.to_string()))
    }

    /// Resolves a selector value to a key and template. Absent or empty
    /// values select the default; unknown keys are logged and also fall
    /// back to the default.
    pub fn resolve<'a>(&'a self, selected: Option<&'a str>) -> (&'a str, &'a Template) {
        let key = match selected {
            Some(value) if !value.is_empty() => value,
            _ => self.default_key(),
        };

        match self.get(key) {
            Ok(template) => (key, template),
            Err(e) => {
                log::warn!("{}, showing {} instead", e, self.default_key);
                (self.default_key(), self.default_template())
            }
        }
    }

    fn default_template(&self) -> &Template {
        // from_json guarantees the default key is present
        self.entries
            .iter()
            .find(|(k, _)| *k == self.default_key)
            .map(|(_, template)| template)
            .unwrap_or_else(|| &self.entries[0].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_every_industry_in_order() {
        let registry = TemplateRegistry::builtin().unwrap();
        let keys: Vec<&str> = registry.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec!["general", "design", "farming", "healthcare", "finance", "education"]
        );
        assert_eq!(registry.default_key(), "general");
        for (_, template) in registry.iter() {
            assert_eq!(template.widgets.len(), 3);
        }
    }

    #[test]
    fn farming_template_matches_catalogue() {
        let registry = TemplateRegistry::builtin().unwrap();
        let farming = registry.get("farming").unwrap();
        assert_eq!(farming.title, "Urban Farming Hub");
        assert_eq!(farming.widgets[0].title, "Crop Growth");
        assert_eq!(farming.widgets[0].stats, ["85%", "Growth", "Rate"].map(String::from));
        assert_eq!(farming.widgets[2].stats[0], "72°F");
    }

    #[test]
    fn strict_lookup_rejects_unknown_key() {
        let registry = TemplateRegistry::builtin().unwrap();
        match registry.get("nonexistent") {
            Err(SiteError::UnknownIndustry(key)) => assert_eq!(key, "nonexistent"),
            other => panic!("expected UnknownIndustry, got {:?}", other),
        }
    }

    #[test]
    fn absent_or_empty_selection_resolves_to_general() {
        let registry = TemplateRegistry::builtin().unwrap();

        let (key, template) = registry.resolve(None);
        assert_eq!(key, "general");
        assert_eq!(template.title, "Business Dashboard");

        let (key, template) = registry.resolve(Some(""));
        assert_eq!(key, "general");
        assert_eq!(template.widgets.len(), 3);
    }

    #[test]
    fn unknown_selection_falls_back_to_general() {
        let registry = TemplateRegistry::builtin().unwrap();
        let (key, template) = registry.resolve(Some("nonexistent"));
        assert_eq!(key, "general");
        assert_eq!(template.title, "Business Dashboard");
    }

    #[test]
    fn wrong_stats_arity_is_a_load_error() {
        let raw = r#"{
            "default": "a",
            "industries": [
                { "key": "a", "title": "A", "widgets": [
                    { "title": "w", "description": "d", "stats": ["1", "2"] }
                ] }
            ]
        }"#;
        assert!(matches!(TemplateRegistry::from_json(raw), Err(SiteError::Config(_))));
    }

    #[test]
    fn empty_widget_list_is_rejected() {
        let raw = r#"{ "default": "a", "industries": [ { "key": "a", "title": "A", "widgets": [] } ] }"#;
        assert!(matches!(
            TemplateRegistry::from_json(raw),
            Err(SiteError::EmptyTemplate(key)) if key == "a"
        ));
    }

    #[test]
    fn duplicate_keys_and_missing_default_are_rejected() {
        let widget = r#"{ "title": "w", "description": "d", "stats": ["1", "2", "3"] }"#;
        let duplicate = format!(
            r#"{{ "default": "a", "industries": [
                {{ "key": "a", "title": "A", "widgets": [{w}] }},
                {{ "key": "a", "title": "B", "widgets": [{w}] }}
            ] }}"#,
            w = widget
        );
        assert!(matches!(
            TemplateRegistry::from_json(&duplicate),
            Err(SiteError::DuplicateIndustry(_))
        ));

        let no_default = format!(
            r#"{{ "default": "zzz", "industries": [ {{ "key": "a", "title": "A", "widgets": [{w}] }} ] }}"#,
            w = widget
        );
        assert!(matches!(
            TemplateRegistry::from_json(&no_default),
            Err(SiteError::MissingDefault(key)) if key == "zzz"
        ));
    }
}
