pub mod answers;
pub mod error;
pub mod manifest;
pub mod names;
