//! The reference Buenos Aires fleet and a handful of ride destinations.

use gs_core::GeoPoint;

/// Fifteen rentable units spread over central Buenos Aires, one per vehicle
/// type.
pub const UNITS_CSV: &str = "\
id,type_id,lng,lat,address
SUV-031,luxury_sport_suv,-58.3835,-34.6027,\"Av. 9 de Julio 1120, San Nicolás, CABA\"
SUV-221,extreme_offroad_suv,-58.4191,-34.5882,\"Av. Santa Fe 3250, Palermo, CABA\"
SUV-402,executive_premium_suv,-58.3642,-34.6118,\"Juana Manso 1550, Puerto Madero, CABA\"
SUV-520,heritage_trail_suv,-58.4304,-34.5688,\"Av. Dorrego 2400, Palermo, CABA\"
EXC-018,classic_excavator,-58.4589,-34.5854,\"Av. del Libertador 6500, Núñez, CABA\"
BLD-044,industrial_bulldozer,-58.4693,-34.5897,\"Av. Cabildo 4700, Núñez, CABA\"
CRN-011,mobile_crane,-58.3838,-34.6225,\"Av. Belgrano 2400, Balvanera, CABA\"
VAN-105,modern_urban_van,-58.4095,-34.6108,\"Av. Córdoba 3300, Almagro, CABA\"
VAN-302,executive_luxury_van,-58.3717,-34.6028,\"Reconquista 300, Microcentro, CABA\"
VAN-701,futuristic_electric_van,-58.4455,-34.5731,\"Luis María Campos 1200, Palermo, CABA\"
VAN-845,cargo_panel_van,-58.364,-34.5962,\"Peru 600, San Telmo, CABA\"
PK-210,standard_pickup,-58.508,-34.635,\"Av. General Paz 9500, Mataderos, CABA\"
PK-455,heavy_duty_pickup,-58.3922,-34.5809,\"Av. Pres. Figueroa Alcorta 2200, Recoleta, CABA\"
PK-900,futuristic_electric_pickup,-58.3802,-34.6039,\"Av. Corrientes 650, San Nicolás, CABA\"
PK-615,fleet_red_pickup,-58.5124,-34.5902,\"Av. Eva Perón 5200, Flores, CABA\"
";

/// Named drop-off points.  Rides cycle through these in order.
pub const DESTINATIONS: [(&str, GeoPoint); 5] = [
    ("Obelisco",               GeoPoint { lng: -58.3816, lat: -34.6037 }),
    ("Plaza de Mayo",          GeoPoint { lng: -58.3723, lat: -34.6083 }),
    ("Parque Tres de Febrero", GeoPoint { lng: -58.4172, lat: -34.5722 }),
    ("Parque Chacabuco",       GeoPoint { lng: -58.4390, lat: -34.6350 }),
    ("Costanera Sur",          GeoPoint { lng: -58.3540, lat: -34.6130 }),
];
