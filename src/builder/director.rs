use super::{House, HouseBuilder};
use tracing::debug;

/// Owns the order in which a house is put together.
///
/// The builder decides what each part looks like; the director only decides
/// the sequence: door, heating, wall, window, yard.
#[derive(Debug)]
pub struct Director {
    builder: Box<dyn HouseBuilder>,
}

impl Director {
    pub fn new(builder: Box<dyn HouseBuilder>) -> Self {
        Director { builder }
    }

    /// Swaps the builder. Houses already returned are unaffected.
    pub fn set_builder(&mut self, builder: Box<dyn HouseBuilder>) {
        debug!("director rebound to a new builder");
        self.builder = builder;
    }

    pub fn build_house(&mut self) -> House {
        debug!("step: door");
        self.builder.build_door();
        debug!("step: heating");
        self.builder.build_heating();
        debug!("step: wall");
        self.builder.build_wall();
        debug!("step: window");
        self.builder.build_window();
        debug!("step: yard");
        self.builder.build_yard();
        self.builder.house()
    }
}
