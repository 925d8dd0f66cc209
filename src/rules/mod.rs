pub mod builtin;
pub mod classifier;
pub mod custom;
pub mod engine;
pub mod types;

pub use classifier::{RiskClassifier, extension_of};
pub use custom::{PatternRule, RuleError};
pub use engine::ContentScanner;
pub use types::*;
