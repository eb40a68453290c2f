use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The two user-supplied fields of the checker form.
/// Replaced wholesale on every edit transition; never partially aliased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    /// Website URL the thumbnail would belong to
    pub url: String,

    /// Episode identifier (free-form, see validation rules)
    pub episode_id: String,
}

impl FormInput {
    pub fn new(url: impl Into<String>, episode_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            episode_id: episode_id.into(),
        }
    }

    /// Returns a copy with a single field replaced
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Url => next.url = value.into(),
            FormField::EpisodeId => next.episode_id = value.into(),
        }
        next
    }
}

/// Named input fields, the key space of the validation-error map
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Url,
    EpisodeId,
}

impl FormField {
    /// Key name as the presentation layer sees it
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Url => "url",
            FormField::EpisodeId => "episodeId",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation failures.
/// A key is present only while its field is invalid; the whole map is
/// recomputed on every validation pass, never incrementally patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Invalid field names, in stable order
    pub fn fields(&self) -> Vec<FormField> {
        self.errors.keys().copied().collect()
    }
}
