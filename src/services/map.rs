//! Data preparation for the campsite maps.
//!
//! The map widget is a sink: this module decides what it shows (markers,
//! center highlight, radius circle, initial view) and how country selection
//! and invalid single-location input degrade.

use url::Url;

use crate::domain::map::{MapCampsite, MapCenter, MapConfig, MapMode, TileLayer};
use crate::domain::types::Coordinates;
use crate::escape::{escape_attr, escape_html};

pub const COUNTRY_ZOOM: u8 = 6;
pub const RADIUS_ZOOM: u8 = 10;
pub const SINGLE_LOCATION_ZOOM: u8 = 14;

const OSM_BASE: &str = "https://www.openstreetmap.org";
const DETAILS_LINK_CLASSES: &str =
    "text-xs text-green-600 hover:text-green-700 font-medium hover:underline";

#[derive(Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub id: Option<i64>,
    pub coordinates: Coordinates,
    pub is_center: bool,
    pub popup_html: String,
}

/// Circle drawn around the center campsite in radius mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusOverlay {
    pub center: MapCenter,
    pub radius_m: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InitialView {
    /// Fit the bounds of these points.
    Fit(Vec<Coordinates>),
    Center { center: MapCenter, zoom: u8 },
}

/// Everything handed to the map widget.
#[derive(Clone, Debug, PartialEq)]
pub struct MapScene {
    pub mode: MapMode,
    pub tile: TileLayer,
    pub markers: Vec<MapMarker>,
    pub overlay: Option<RadiusOverlay>,
    pub view: InitialView,
}

pub trait MapSink {
    fn render(&mut self, scene: &MapScene);
}

/// Builds markers for every campsite with numeric coordinates; the rest are
/// skipped.
pub fn prepare_markers(config: &MapConfig) -> Vec<MapMarker> {
    let center_id = config.center_campsite.map(|c| c.id);

    config
        .campsites
        .iter()
        .filter_map(|campsite| {
            let coordinates = match (campsite.lat.as_f64(), campsite.lng.as_f64()) {
                (Some(lat), Some(lng)) => Coordinates::new(lat, lng).ok(),
                _ => None,
            };
            let Some(coordinates) = coordinates else {
                log::warn!("Skipping campsite {:?} without usable coordinates", campsite.id);
                return None;
            };

            let is_center = config.mode == MapMode::Radius
                && center_id.is_some()
                && campsite.id == center_id;

            Some(MapMarker {
                id: campsite.id,
                coordinates,
                is_center,
                popup_html: popup_html(campsite, is_center),
            })
        })
        .collect()
}

/// Popup markup for one marker; all campsite fields are escaped.
pub fn popup_html(campsite: &MapCampsite, is_center: bool) -> String {
    let mut html = String::from(r#"<div class="p-2">"#);

    html.push_str(&format!(
        r#"<div class="font-semibold text-base mb-1">{}{}</div>"#,
        escape_html(campsite.name.as_deref()),
        if is_center {
            r#" <span class="text-xs text-red-600">(Center)</span>"#
        } else {
            ""
        }
    ));

    if let Some(country) = campsite.country.as_deref().filter(|c| !c.is_empty()) {
        html.push_str(&format!(
            r#"<div class="text-xs text-gray-600 mb-1">{}</div>"#,
            escape_html(Some(country))
        ));
    }

    html.push_str(&format!(
        r#"<div class="text-xs text-gray-600 mb-2">Likes: {}</div>"#,
        campsite.likes.unwrap_or(0)
    ));

    if let Some(url) = campsite.url.as_deref().filter(|u| !u.is_empty()) {
        html.push_str(&format!(
            r#"<a class="{DETAILS_LINK_CLASSES}" href="{}">View Details →</a>"#,
            escape_attr(Some(url))
        ));
    }

    html.push_str("</div>");
    html
}

pub fn radius_overlay(config: &MapConfig) -> Option<RadiusOverlay> {
    if config.mode != MapMode::Radius {
        return None;
    }
    let center = config.center?;
    let radius_km = config.radius_km.filter(|r| *r > 0.0)?;
    Some(RadiusOverlay {
        center,
        radius_m: radius_km * 1000.0,
    })
}

pub fn initial_view(config: &MapConfig, markers: &[MapMarker]) -> InitialView {
    if !markers.is_empty() {
        return InitialView::Fit(markers.iter().map(|m| m.coordinates).collect());
    }
    let zoom = match config.mode {
        MapMode::Radius => RADIUS_ZOOM,
        MapMode::Country => COUNTRY_ZOOM,
    };
    InitialView::Center {
        center: config.center_or_default(),
        zoom,
    }
}

pub fn build_scene(config: &MapConfig) -> MapScene {
    let markers = prepare_markers(config);
    let view = initial_view(config, &markers);
    MapScene {
        mode: config.mode,
        tile: config.tile_or_default(),
        overlay: radius_overlay(config),
        markers,
        view,
    }
}

/// Parses the embedded configuration and hands the scene to `sink`.
pub fn render_map<S>(raw_config: &str, sink: &mut S) -> serde_json::Result<()>
where
    S: MapSink + ?Sized,
{
    let config = MapConfig::from_json(raw_config)?;
    sink.render(&build_scene(&config));
    Ok(())
}

/// Target of a country-selector change: sets or clears `country` and drops
/// `campsite_id` so the page switches to the country scenario.
pub fn country_navigation_url(current: &str, country: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(current)?;
    let country = country.trim();

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "country" && key != "campsite_id")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(kept);
        if !country.is_empty() {
            pairs.append_pair("country", country);
        }
    }
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url.to_string())
}

/// How the single-campsite map presents its location.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationDisplay {
    Map {
        coordinates: Coordinates,
        name: String,
        /// "Open in OpenStreetMap" link shown under the map.
        osm_link: String,
    },
    /// Coordinates are unusable; only a search link is shown.
    Fallback { search_url: String },
}

/// Coordinates must parse completely as numbers: trailing garbage such as
/// `"45.5abc"` is rejected and yields the search-link fallback.
pub fn resolve_single_location(lat: &str, lng: &str, name: &str) -> LocationDisplay {
    let name = if name.trim().is_empty() {
        "Campsite"
    } else {
        name.trim()
    };

    match Coordinates::parse(lat, lng) {
        Ok(coordinates) => LocationDisplay::Map {
            coordinates,
            name: name.to_string(),
            osm_link: osm_direct_link(coordinates),
        },
        Err(err) => {
            log::warn!("Falling back to a search link for {name}: {err}");
            LocationDisplay::Fallback {
                search_url: osm_search_link(name),
            }
        }
    }
}

pub fn osm_direct_link(point: Coordinates) -> String {
    let (lat, lng) = (point.lat(), point.lng());
    format!("{OSM_BASE}/?mlat={lat}&mlon={lng}#map={SINGLE_LOCATION_ZOOM}/{lat}/{lng}")
}

pub fn osm_search_link(query: &str) -> String {
    let encoded = serde_html_form::to_string(vec![("query", query)]).unwrap_or_default();
    format!("{OSM_BASE}/search?{encoded}")
}
