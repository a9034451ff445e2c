pub mod check;
pub mod laws;
