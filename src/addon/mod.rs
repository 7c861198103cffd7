pub mod prompt;
pub mod scaffold;
pub mod summary;
