pub mod entity;
pub mod invariants;

pub use entity::{FormField, FormInput, ValidationErrors};
pub use invariants::validate_form;
