use super::{House, Yard};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assembles a [`House`] one part at a time.
///
/// Steps are independent: each sets exactly one part and may run in any order.
/// `house` snapshots whatever has been built so far.
pub trait HouseBuilder: fmt::Debug {
    fn build_wall(&mut self);
    fn build_door(&mut self);
    fn build_window(&mut self);
    fn build_heating(&mut self);
    fn build_yard(&mut self);
    fn house(&self) -> House;
}

#[derive(Debug, Default)]
pub struct WoodBuilder {
    house: House,
}

impl WoodBuilder {
    pub fn new() -> Self {
        WoodBuilder::default()
    }
}

impl HouseBuilder for WoodBuilder {
    fn build_wall(&mut self) {
        self.house.wall = Some("white wall".to_string());
    }

    fn build_door(&mut self) {
        self.house.door = Some("red wood".to_string());
    }

    fn build_window(&mut self) {
        self.house.window = Some("wood window".to_string());
    }

    fn build_heating(&mut self) {
        self.house.heating = Some("simonzi".to_string());
    }

    fn build_yard(&mut self) {
        self.house.yard = Some(Yard::new(10, "wood yard"));
    }

    fn house(&self) -> House {
        self.house.clone()
    }
}

#[derive(Debug, Default)]
pub struct StoneBuilder {
    house: House,
}

impl StoneBuilder {
    pub fn new() -> Self {
        StoneBuilder::default()
    }
}

impl HouseBuilder for StoneBuilder {
    fn build_wall(&mut self) {
        self.house.wall = Some("grey stone".to_string());
    }

    fn build_door(&mut self) {
        self.house.door = Some("oak".to_string());
    }

    fn build_window(&mut self) {
        self.house.window = Some("double glazed".to_string());
    }

    fn build_heating(&mut self) {
        self.house.heating = Some("floor heating".to_string());
    }

    fn build_yard(&mut self) {
        self.house.yard = Some(Yard::new(25, "stone garden"));
    }

    fn house(&self) -> House {
        self.house.clone()
    }
}

/// Flats have no yard, so `build_yard` leaves the house untouched.
#[derive(Debug, Default)]
pub struct ApartmentBuilder {
    house: House,
}

impl ApartmentBuilder {
    pub fn new() -> Self {
        ApartmentBuilder::default()
    }
}

impl HouseBuilder for ApartmentBuilder {
    fn build_wall(&mut self) {
        self.house.wall = Some("concrete".to_string());
    }

    fn build_door(&mut self) {
        self.house.door = Some("steel".to_string());
    }

    fn build_window(&mut self) {
        self.house.window = Some("pvc window".to_string());
    }

    fn build_heating(&mut self) {
        self.house.heating = Some("central".to_string());
    }

    fn build_yard(&mut self) {}

    fn house(&self) -> House {
        self.house.clone()
    }
}

/// Names a concrete builder, for config files and the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HouseStyle {
    #[default]
    Wood,
    Stone,
    Apartment,
}

impl HouseStyle {
    pub fn builder(self) -> Box<dyn HouseBuilder> {
        match self {
            HouseStyle::Wood => Box::new(WoodBuilder::new()),
            HouseStyle::Stone => Box::new(StoneBuilder::new()),
            HouseStyle::Apartment => Box::new(ApartmentBuilder::new()),
        }
    }
}

impl fmt::Display for HouseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HouseStyle::Wood => "wood",
            HouseStyle::Stone => "stone",
            HouseStyle::Apartment => "apartment",
        };
        f.write_str(name)
    }
}
