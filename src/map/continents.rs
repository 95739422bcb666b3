use serde::{Deserialize, Serialize};

use crate::hex::HexPoint;

/// Named continents handed out to landmasses of at least ten tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ContinentType {
    None,
    Africa,
    Amasia,
    America,
    Antarctica,
    Arctica,
    Asia,
    Asiamerica,
    Atlantica,
    Australia,
    Avalonia,
    Baltica,
    Cimmeria,
    Columbia,
    Eurasia,
    Europe,
    Gondwana,
    Kalaharia,
    Kazakhstania,
    Kernorland,
    Kumarikandam,
    Laurasia,
    Laurentia,
    Lemuria,
    Mu,
    Nena,
    NorthAmerica,
    OldNorthAmerica,
    Pangaea,
    Pannotia,
    Rodinia,
    Siberia,
    SouthAmerica,
    Terra,
    Ur,
    Vaalbara,
    Vendian,
    Zealandia,
}

string_enum!(ContinentType {
    None => "none",
    Africa => "africa",
    Amasia => "amasia",
    America => "america",
    Antarctica => "antarctica",
    Arctica => "arctica",
    Asia => "asia",
    Asiamerica => "asiamerica",
    Atlantica => "atlantica",
    Australia => "australia",
    Avalonia => "avalonia",
    Baltica => "baltica",
    Cimmeria => "cimmeria",
    Columbia => "columbia",
    Eurasia => "eurasia",
    Europe => "europe",
    Gondwana => "gondwana",
    Kalaharia => "kalaharia",
    Kazakhstania => "kazakhstania",
    Kernorland => "kernorland",
    Kumarikandam => "kumarikandam",
    Laurasia => "laurasia",
    Laurentia => "laurentia",
    Lemuria => "lemuria",
    Mu => "mu",
    Nena => "nena",
    NorthAmerica => "northAmerica",
    OldNorthAmerica => "oldNorthAmerica",
    Pangaea => "pangaea",
    Pannotia => "pannotia",
    Rodinia => "rodinia",
    Siberia => "siberia",
    SouthAmerica => "southAmerica",
    Terra => "terra",
    Ur => "ur",
    Vaalbara => "vaalbara",
    Vendian => "vendian",
    Zealandia => "zealandia",
});

impl ContinentType {
    /// Names handed out in order to sufficiently large landmasses.
    pub const POOL: [ContinentType; 12] = [
        ContinentType::Africa,
        ContinentType::Asia,
        ContinentType::Europe,
        ContinentType::America,
        ContinentType::Australia,
        ContinentType::Gondwana,
        ContinentType::Laurasia,
        ContinentType::Pangaea,
        ContinentType::Rodinia,
        ContinentType::Zealandia,
        ContinentType::Lemuria,
        ContinentType::Mu,
    ];
}

/// Named oceans handed out to water bodies of at least ten tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum OceanType {
    None,
    Atlantic,
    Pacific,
    Indic,
    Arctic,
    Antarctic,
    Balticum,
    NorthSea,
    MareNostrum,
}

string_enum!(OceanType {
    None => "none",
    Atlantic => "atlantic",
    Pacific => "pacific",
    Indic => "indic",
    Arctic => "arctic",
    Antarctic => "antarctic",
    Balticum => "balticum",
    NorthSea => "northSea",
    MareNostrum => "mareNostrum",
});

impl OceanType {
    pub const POOL: [OceanType; 8] = [
        OceanType::Atlantic,
        OceanType::Pacific,
        OceanType::Indic,
        OceanType::Arctic,
        OceanType::Antarctic,
        OceanType::Balticum,
        OceanType::NorthSea,
        OceanType::MareNostrum,
    ];
}

/// A connected landmass discovered after terrain generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Continent {
    pub identifier: u8,
    pub continent_type: ContinentType,
    pub points: Vec<HexPoint>,
}

impl Continent {
    pub fn new(identifier: u8) -> Self {
        Continent {
            identifier,
            continent_type: ContinentType::None,
            points: Vec::new(),
        }
    }

    pub fn add(&mut self, point: HexPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A connected body of water discovered after terrain generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ocean {
    pub identifier: u8,
    pub ocean_type: OceanType,
    pub points: Vec<HexPoint>,
}

impl Ocean {
    pub fn new(identifier: u8) -> Self {
        Ocean {
            identifier,
            ocean_type: OceanType::None,
            points: Vec::new(),
        }
    }

    pub fn add(&mut self, point: HexPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
