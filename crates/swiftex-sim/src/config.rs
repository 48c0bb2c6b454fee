//! Engine configuration and the seed world (`spec.md` §9, Design Notes).

use swiftex_core::CityId;
use swiftex_dispatch::VehicleKind;

/// One seed road: `(from, to, base_distance_km)`.
pub type SeedRoad = (u16, u16, u32);

/// One seed rider: `(display_name, vehicle, max_capacity)`.
pub type SeedRider = (&'static str, VehicleKind, u32);

/// Static construction parameters for a fresh [`crate::Engine`].
///
/// `seed_default()` reproduces the world described in Design Notes §9 —
/// ten Pakistani cities, ten roads among them, and the five-rider fleet —
/// so the scenarios in `spec.md` §8 can be reproduced verbatim.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub cities: Vec<(CityId, &'static str)>,
    pub roads: Vec<SeedRoad>,
    pub fleet: Vec<SeedRider>,
}

impl EngineConfig {
    pub fn seed_default() -> Self {
        EngineConfig {
            cities: vec![
                (CityId(1), "Lahore"),
                (CityId(2), "Islamabad"),
                (CityId(3), "Karachi"),
                (CityId(4), "Rawalpindi"),
                (CityId(5), "Faisalabad"),
                (CityId(6), "Multan"),
                (CityId(7), "Peshawar"),
                (CityId(8), "Quetta"),
                (CityId(9), "Sialkot"),
                (CityId(10), "Gujranwala"),
            ],
            roads: vec![
                (1, 2, 375),
                (2, 4, 20),
                (1, 10, 70),
                (10, 9, 55),
                (1, 5, 180),
                (5, 6, 250),
                (6, 3, 900),
                (6, 8, 650),
                (3, 8, 690),
                (2, 7, 190),
            ],
            fleet: vec![
                ("Bike-1", VehicleKind::Bike, 50),
                ("Bike-2", VehicleKind::Bike, 50),
                ("Van-1", VehicleKind::Van, 200),
                ("Van-2", VehicleKind::Van, 200),
                ("Truck-1", VehicleKind::Truck, 1000),
            ],
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::seed_default()
    }
}
