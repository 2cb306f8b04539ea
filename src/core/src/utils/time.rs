use log::debug;
use std::time::Instant;

pub struct TimeEstimation;

impl TimeEstimation {
    /// Runs `action` and returns its result with the elapsed milliseconds.
    pub fn estimate<T, F: FnOnce() -> T>(action: F) -> (T, u128) {
        let now = Instant::now();

        let result = action();

        (result, now.elapsed().as_millis())
    }
}

pub struct Logging;

impl Logging {
    pub fn estimate_result<T, F: FnOnce() -> T>(action: F, message: &str) -> T {
        let (result, elapsed) = TimeEstimation::estimate(action);

        debug!("{}: {} ms", message, elapsed);

        result
    }
}
