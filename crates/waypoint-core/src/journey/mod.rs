//! Learning journey domain module.
//!
//! The journey is the only structured output of the pipeline. A completion's
//! text goes through three steps here, in order:
//!
//! - `extract`: recover the JSON object from possibly prose-wrapped text
//! - `validation`: shallow shape check, then tolerant conversion into typed models
//! - `sanitize`: replace resource URLs that are not on the allow-list

pub mod extract;
mod lenient;
mod model;
pub mod sanitize;
pub mod validation;

pub use extract::{extract_json_span, parse_completion};
pub use model::{
    Activity, CulturalConnection, Difficulty, LearningJourney, LearningResource,
    ProgressTracking, ResourceType,
};
pub use sanitize::{FALLBACK_RESOURCE_URL, TRUSTED_DOMAINS, is_trusted_url, sanitize_resource_urls};
pub use validation::validate_journey;
