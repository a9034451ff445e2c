pub mod law;
pub mod violation;
pub mod report;

// Re-export common model types
pub use law::LawKind;
pub use violation::{Outcome, Violation};
pub use report::{LawVerdict, VerificationReport, SAMPLING_LIMITATION};
