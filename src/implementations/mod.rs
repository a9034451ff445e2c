pub mod config;
pub mod law_checks;
pub mod projection;
pub mod verifier;
