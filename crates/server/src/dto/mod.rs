mod county;
mod date;
mod session;
mod strategy;

pub use county::*;
pub use date::*;
pub use session::*;
pub use strategy::*;
