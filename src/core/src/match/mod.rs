mod game;
mod legacy;
mod status;
mod validation;

pub use game::*;
pub use legacy::*;
pub use status::*;
pub use validation::*;
