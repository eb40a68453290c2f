pub mod machine;
pub mod value_objects;

pub use machine::{CheckTicket, CheckerState};
pub use value_objects::{CheckResult, CheckStatus};
