//! Default park rides, seeded when no catalog file exists yet.

use crate::domain::{Ride, RideId, RideType};

/// Columns: id, name, thrill, duration, queue, fatigue, restricted, vip,
/// weather, min_weight, max_weight, min_age, max_age.
type Row = (
    &'static str,
    &'static str,
    u32,
    u32,
    u32,
    u32,
    bool,
    bool,
    bool,
    u32,
    u32,
    u32,
    u32,
);

#[rustfmt::skip]
const LAND: &[Row] = &[
    ("L001", "Mission Interstellar", 9, 3, 25, 8, false, true, true, 40, 120, 12, 65),
    ("L002", "Sky Wheel", 3, 5, 10, 2, false, true, true, 0, 150, 3, 80),
    ("L003", "Adventures of Chikku", 4, 4, 8, 3, false, false, false, 0, 80, 5, 16),
    ("L004", "Twist and Shout", 7, 3, 20, 6, false, true, true, 35, 110, 10, 60),
    ("L005", "Rockin' Tug", 5, 4, 12, 4, false, true, true, 25, 100, 8, 70),
    ("L006", "Termite Coaster and Train", 6, 5, 15, 5, false, false, false, 30, 120, 10, 75),
    ("L007", "Pirate Ship", 8, 4, 18, 7, true, true, true, 40, 130, 12, 65),
    ("L008", "Wonder Splash", 5, 3, 10, 4, false, true, true, 20, 100, 6, 70),
    ("L009", "Grand Prix", 6, 6, 15, 5, false, true, false, 25, 120, 8, 75),
    ("L010", "Crazy Cars", 4, 3, 8, 3, false, false, false, 15, 90, 5, 80),
    ("L011", "Sky Tilt", 8, 3, 22, 7, false, true, true, 45, 120, 14, 60),
    ("L012", "Hyperverse", 10, 2, 30, 9, true, true, true, 50, 110, 16, 55),
    ("L013", "Recoil", 9, 3, 28, 8, false, true, true, 45, 120, 14, 60),
    ("L014", "Maverick", 9, 3, 25, 8, false, true, true, 45, 115, 14, 65),
    ("L015", "Equinox", 8, 4, 20, 7, false, true, true, 40, 120, 12, 65),
    ("L016", "Techno Jump", 7, 2, 15, 6, false, true, true, 35, 110, 10, 70),
    ("L017", "Twin Flip T Rex", 8, 3, 22, 7, false, true, true, 40, 120, 12, 65),
    ("L018", "Wonderla Bamba", 6, 4, 12, 5, false, true, true, 30, 120, 8, 75),
    ("L019", "G Fall", 10, 1, 35, 9, false, true, true, 50, 110, 18, 50),
];

#[rustfmt::skip]
const WATER: &[Row] = &[
    ("W001", "Rainbow Loops", 8, 4, 25, 7, false, true, true, 40, 120, 12, 65),
    ("W002", "Drop Loop", 9, 3, 30, 8, true, true, true, 45, 110, 14, 60),
    ("W003", "Rain Disco", 6, 5, 15, 5, false, true, true, 25, 120, 8, 75),
    ("W004", "Boomerang", 7, 4, 20, 6, false, true, true, 35, 115, 10, 70),
    ("W005", "Pirate Lagoon", 5, 6, 12, 4, false, true, true, 20, 130, 6, 80),
    ("W006", "Fun Racers", 4, 3, 8, 3, false, false, true, 15, 100, 5, 75),
    ("W007", "Uphill Racer", 6, 4, 15, 5, false, true, true, 30, 120, 8, 70),
    ("W008", "Bullet", 8, 2, 25, 7, false, true, true, 40, 115, 12, 65),
    ("W009", "Wavy and Vertical Fall", 9, 3, 28, 8, false, true, true, 45, 120, 14, 60),
    ("W010", "Harakiri", 10, 2, 35, 9, true, true, true, 50, 110, 16, 55),
    ("W011", "Mammoth", 7, 5, 18, 6, false, true, true, 35, 130, 10, 70),
    ("W012", "Splash", 3, 4, 5, 2, false, false, true, 0, 150, 3, 85),
    ("W013", "Wave Pools", 2, 8, 5, 2, false, false, true, 0, 200, 0, 90),
    ("W014", "Lazy River", 1, 10, 3, 1, false, false, true, 0, 200, 0, 95),
    ("W015", "Sea Lagoon", 3, 6, 5, 2, false, false, true, 0, 180, 3, 85),
    ("W016", "Drop and Tornado", 8, 4, 22, 7, false, true, true, 40, 120, 12, 65),
    ("W017", "Screw", 7, 3, 18, 6, false, true, true, 35, 115, 10, 70),
];

#[rustfmt::skip]
const KIDS: &[Row] = &[
    ("K001", "Mini Coaster", 3, 5, 10, 2, false, false, false, 15, 80, 4, 14),
    ("K002", "Bumper Cars", 2, 8, 5, 1, false, false, false, 20, 90, 6, 16),
    ("K003", "Kiddie Swings", 2, 3, 5, 1, false, false, false, 10, 70, 3, 12),
    ("K004", "Mini Pirate Ship", 3, 3, 8, 2, false, false, false, 15, 80, 5, 14),
    ("K005", "Kiddies Wheel", 2, 4, 6, 1, false, false, false, 10, 85, 3, 15),
    ("K006", "Coco Cup", 2, 3, 5, 1, false, false, false, 12, 75, 4, 13),
    ("K007", "Carousel", 1, 4, 3, 1, false, false, false, 5, 90, 2, 16),
    ("K008", "Flying Jumbo", 2, 3, 6, 1, false, false, false, 10, 80, 3, 14),
    ("K009", "Convoy", 2, 4, 5, 1, false, false, false, 8, 85, 3, 15),
    ("K010", "Moon Base", 3, 3, 8, 2, false, false, false, 15, 80, 4, 14),
    ("K011", "Mini Top Spin", 3, 3, 10, 2, true, false, false, 18, 85, 5, 16),
    ("K012", "Circus Train", 1, 5, 3, 1, false, false, false, 5, 100, 2, 18),
    ("K013", "Funky Monkey", 2, 4, 6, 1, false, false, false, 12, 80, 4, 15),
];

fn to_ride(row: &Row, ride_type: RideType) -> Option<Ride> {
    let &(id, name, thrill, duration, queue_time, fatigue, restricted, vip, weather, min_w, max_w, min_a, max_a) =
        row;
    Some(Ride {
        id: RideId::parse(id).ok()?,
        name: name.to_string(),
        thrill,
        duration,
        queue_time,
        fatigue,
        mandatory: false,
        restricted,
        vip_access: vip,
        affected_by_weather: weather,
        ride_type,
        min_weight: min_w,
        max_weight: max_w,
        min_age: min_a,
        max_age: max_a,
    })
}

/// The rides a fresh park starts with.
pub fn default_rides() -> Vec<Ride> {
    let groups = [
        (LAND, RideType::Land),
        (WATER, RideType::Water),
        (KIDS, RideType::Kids),
    ];
    groups
        .iter()
        .flat_map(|(rows, ride_type)| rows.iter().filter_map(|row| to_ride(row, *ride_type)))
        .collect()
}
