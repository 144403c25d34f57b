pub mod config;
pub mod error;
pub mod io;
pub mod logging;

pub use config::FormConfig;
pub use error::FormError;
