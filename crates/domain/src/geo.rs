// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Coordinates, locations and the map bounding box used by sync requests.

use serde::{Deserialize, Serialize};

/// Mean earth radius in meters, used for haversine distance.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new `Coordinate`.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the haversine distance to `other` in meters.
    #[must_use]
    pub fn distance_m(&self, other: &Self) -> f64 {
        let lat1: f64 = self.latitude.to_radians();
        let lat2: f64 = other.latitude.to_radians();
        let d_lat: f64 = (other.latitude - self.latitude).to_radians();
        let d_lon: f64 = (other.longitude - self.longitude).to_radians();

        let a: f64 = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * a.sqrt().asin() * EARTH_RADIUS_M
    }
}

/// A street address with an optional resolved coordinate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// The resolved coordinate, if geocoded.
    #[serde(default)]
    pub coordinate: Option<Coordinate>,
    /// The full display address.
    #[serde(default)]
    pub full_address: Option<String>,
    /// Suburb or locality.
    #[serde(default)]
    pub suburb: Option<String>,
    /// Postcode.
    #[serde(default)]
    pub postcode: Option<String>,
}

impl Location {
    /// Creates a location from a coordinate only.
    #[must_use]
    pub const fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
            full_address: None,
            suburb: None,
            postcode: None,
        }
    }
}

/// A map viewport, expressed by its north-west and south-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// The north-west corner.
    pub north_west: Coordinate,
    /// The south-east corner.
    pub south_east: Coordinate,
}

impl BoundingBox {
    /// Creates a new `BoundingBox`.
    #[must_use]
    pub const fn new(north_west: Coordinate, south_east: Coordinate) -> Self {
        Self {
            north_west,
            south_east,
        }
    }

    /// Returns the diagonal span of the box in meters.
    #[must_use]
    pub fn diagonal_m(&self) -> f64 {
        self.north_west.distance_m(&self.south_east)
    }

    /// Returns how far this box has moved relative to `previous`, as a
    /// fraction of the previous box's diagonal.
    #[must_use]
    pub fn moved_fraction(&self, previous: &Self) -> f64 {
        let prev_size: f64 = previous.diagonal_m();
        if prev_size == 0.0 {
            return 1.0;
        }
        self.north_west.distance_m(&previous.north_west) / prev_size
    }

    /// Returns how much this box has been resized relative to `previous`,
    /// as a fraction of this box's diagonal.
    #[must_use]
    pub fn resized_fraction(&self, previous: &Self) -> f64 {
        let new_size: f64 = self.diagonal_m();
        if new_size == 0.0 {
            return 1.0;
        }
        (1.0 - (previous.diagonal_m() / new_size)).abs()
    }
}
