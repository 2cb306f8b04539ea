mod calendar;
mod score;

pub use calendar::*;
pub use score::*;
