pub mod clean;
pub mod errors;
pub mod runner;
pub mod seq;

use crate::errors::CleanError;

pub fn run() -> Result<(), CleanError> {
    runner::run()
}
