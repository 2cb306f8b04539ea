mod collection;
mod record;
mod team;

pub use collection::*;
pub use record::*;
pub use team::*;
