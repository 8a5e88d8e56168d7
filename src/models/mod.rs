pub mod card;
pub mod set;

pub use card::*;
pub use set::*;
