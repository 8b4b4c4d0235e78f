pub mod comorbidity;
pub mod diagnosis;
pub mod enums;
pub mod profile;
pub mod recommendation;
pub mod severity;

pub use comorbidity::*;
pub use diagnosis::*;
pub use profile::*;
pub use recommendation::*;
pub use severity::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
