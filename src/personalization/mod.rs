//! Patient-specific recommendations: population and disease
//! contraindications, severity handling, age advice and drug interactions.

pub mod engine;
pub mod families;
pub mod tables;

pub use engine::Personalizer;
pub use tables::ContraindicationRule;
