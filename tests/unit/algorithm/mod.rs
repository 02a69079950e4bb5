pub mod executor;
pub mod iterative;
