mod character;
mod encounter;
mod enemy;
mod item;
mod name;
mod ratio;

pub use character::*;
pub use encounter::*;
pub use enemy::*;
pub use item::*;
pub use name::*;
pub use ratio::*;
