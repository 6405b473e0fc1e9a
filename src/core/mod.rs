// Core algorithm exports
pub mod booking;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use booking::{BookingOrchestrator, BookingError, ReserveOutcome, ReleaseOutcome};
pub use filters::has_sufficient_payload;
pub use matcher::{Matcher, MatchResult, DEFAULT_RESULT_LIMIT};
pub use scoring::calculate_fit_score;
