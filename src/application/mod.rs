pub mod services;

// Re-export key types for convenience
pub use services::{TollFeeEngine, MAX_FEE, MAX_WINDOW_MINUTES};
