//! Pure helpers used by the download state machine.

mod progress;
mod validation;

pub use progress::progress_fraction;
pub use validation::is_success;
