mod aggregator;
mod diagnostics;
mod engine;
mod entry;
mod event;
mod ranking;
mod resolver;
mod source;

pub use aggregator::*;
pub use diagnostics::*;
pub use engine::*;
pub use entry::*;
pub use event::*;
pub use ranking::*;
pub use resolver::*;
pub use source::*;
