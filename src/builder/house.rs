use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Yard {
    pub size: u32,
    pub name: String,
}

impl Yard {
    pub fn new(size: u32, name: impl Into<String>) -> Self {
        Yard {
            size,
            name: name.into(),
        }
    }
}

/// A finished house. Every part is optional because a builder may skip steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct House {
    pub wall: Option<String>,
    pub door: Option<String>,
    pub window: Option<String>,
    pub heating: Option<String>,
    pub yard: Option<Yard>,
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Missing parts render as empty text.
        write!(
            f,
            "Door:{},Wall:{},Window:{},Heating:{}",
            self.door.as_deref().unwrap_or_default(),
            self.wall.as_deref().unwrap_or_default(),
            self.window.as_deref().unwrap_or_default(),
            self.heating.as_deref().unwrap_or_default()
        )?;
        if let Some(yard) = &self.yard {
            write!(f, ",yard size:{},yard name:{}", yard.size, yard.name)?;
        }
        Ok(())
    }
}
