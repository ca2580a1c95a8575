//! Shapes of the map configuration embedded in the page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CENTER_LAT: f64 = 54.5260;
pub const DEFAULT_CENTER_LNG: f64 = 15.2551;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Which of the two map scenarios the page is showing.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    /// Every campsite of one country.
    #[default]
    Country,
    /// Campsites within a radius of a chosen campsite.
    Radius,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

impl Default for MapCenter {
    fn default() -> Self {
        Self {
            lat: DEFAULT_CENTER_LAT,
            lng: DEFAULT_CENTER_LNG,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

/// Raw campsite entry. Coordinates stay untyped so that entries with
/// non-numeric values can be skipped instead of failing the whole payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MapCampsite {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub lng: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CenterCampsite {
    pub id: i64,
}

/// Contents of the `map-data` JSON script element.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    #[serde(default)]
    pub mode: MapMode,
    #[serde(default)]
    pub center: Option<MapCenter>,
    #[serde(default, rename = "radius_km")]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub tile: Option<TileLayer>,
    #[serde(default)]
    pub campsites: Vec<MapCampsite>,
    #[serde(default)]
    pub center_campsite: Option<CenterCampsite>,
}

impl MapConfig {
    /// Parses the embedded JSON. Empty input yields the default config.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    pub fn center_or_default(&self) -> MapCenter {
        self.center.unwrap_or_default()
    }

    pub fn tile_or_default(&self) -> TileLayer {
        self.tile.clone().unwrap_or_default()
    }
}
