// Declare all modules
pub mod form;
pub mod terminal;
pub mod utils;

// No re-exports here as they're handled in lib.rs
