//! Builder and director for houses.

mod builders;
mod director;
mod house;

pub use builders::{ApartmentBuilder, HouseBuilder, HouseStyle, StoneBuilder, WoodBuilder};
pub use director::Director;
pub use house::{House, Yard};
