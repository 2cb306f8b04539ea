mod error;
mod generators;
mod loaders;
mod snapshot;
mod store;

pub use error::*;
pub use generators::*;
pub use loaders::*;
pub use snapshot::*;
pub use store::*;
