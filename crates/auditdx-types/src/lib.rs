pub mod classify;
pub mod fixture;
pub mod outcome;

pub use classify::*;
pub use fixture::*;
pub use outcome::*;
