use std::fmt;

/// Mean Earth radius in kilometres, used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Opaque airport identity, e.g. `"LGA"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirportCode(pub String);

impl AirportCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub code: AirportCode,
    /// Degrees, positive north.
    pub latitude: f64,
    /// Degrees, positive east.
    pub longitude: f64,
}

impl Airport {
    /// Great-circle (haversine) distance to `other`, in kilometres.
    pub fn distance_km(&self, other: &Airport) -> f64 {
        let lat_a = self.latitude.to_radians();
        let lon_a = self.longitude.to_radians();
        let lat_b = other.latitude.to_radians();
        let lon_b = other.longitude.to_radians();

        let h = ((lat_a - lat_b) / 2.0).sin().powi(2)
            + lat_a.cos() * lat_b.cos() * ((lon_a - lon_b) / 2.0).sin().powi(2);
        let arc = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        EARTH_RADIUS_KM * arc
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub speed_kmh: f64,
}

impl Plane {
    /// Take-off to landing estimate for a leg of `distance_km`, in hours.
    pub fn flight_time_hours(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh
    }
}

/// An existing one-way route: an ordered sequence of at least two airports.
/// Consecutive pairs are the directed edges of the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub airports: Vec<AirportCode>,
}

impl Route {
    pub fn new(airports: Vec<AirportCode>) -> Self {
        Self { airports }
    }

    /// The consecutive (from, to) pairs of the route.
    pub fn legs(&self) -> impl Iterator<Item = (&AirportCode, &AirportCode)> {
        self.airports.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

/// A suggested new route from the starting airport to a representative
/// airport of an aggregate no other aggregate can reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoute {
    pub from: AirportCode,
    pub to: AirportCode,
}
