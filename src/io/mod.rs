/// Command-line parsing and batch processing
pub mod cli;
/// Constants, generator and render configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG, ASCII and JSON map export
pub mod export;
/// PNG rendering
pub mod image;
/// Progress display
pub mod progress;
