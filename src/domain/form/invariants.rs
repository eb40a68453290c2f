use super::entity::{FormField, FormInput, ValidationErrors};
use url::Url;

pub const URL_REQUIRED: &str = "URL is required";
pub const URL_MALFORMED: &str = "Please enter a valid URL";
pub const EPISODE_ID_REQUIRED: &str = "Episode ID is required";

/// Validates the checker form.
///
/// Pure and deterministic: the full error map is rebuilt from the input on
/// every call. An empty map means both fields are acceptable.
pub fn validate_form(input: &FormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if input.url.trim().is_empty() {
        errors.insert(FormField::Url, URL_REQUIRED);
    } else if !is_well_formed_url(&input.url) {
        errors.insert(FormField::Url, URL_MALFORMED);
    }

    if input.episode_id.trim().is_empty() {
        errors.insert(FormField::EpisodeId, EPISODE_ID_REQUIRED);
    }

    errors
}

/// URL invariants:
/// 1. Must parse as an absolute URL (scheme required)
/// 2. Must carry an authority (bare strings and `mailto:` style URLs fail)
///
/// Syntactic check only; no network or DNS resolution is performed.
fn is_well_formed_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}
