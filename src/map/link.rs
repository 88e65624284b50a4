use url::Url;

use super::MapSurface;
use crate::error::{AppError, AppResult};
use crate::inbox::LocationPoint;

const OSM_BASE_URL: &str = "https://www.openstreetmap.org/";
const ZOOM: u8 = 15;

#[derive(Debug, Clone, Default)]
pub struct LinkMap {
    current: Option<Url>,
}

impl MapSurface for LinkMap {
    fn draw(&mut self, point: &LocationPoint) -> AppResult<String> {
        if !(-90.0..=90.0).contains(&point.lat) || !(-180.0..=180.0).contains(&point.lng) {
            return Err(AppError::Map(format!(
                "coordinates out of range: {}, {}",
                point.lat, point.lng
            )));
        }

        let mut url = Url::parse(OSM_BASE_URL)?;
        url.query_pairs_mut()
            .append_pair("mlat", &point.lat.to_string())
            .append_pair("mlon", &point.lng.to_string());
        url.set_fragment(Some(&format!(
            "map={ZOOM}/{}/{}",
            point.lat, point.lng
        )));

        let rendered = format!("{} {url}", point.label);
        self.current = Some(url);
        Ok(rendered)
    }

    fn dispose(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> LocationPoint {
        LocationPoint {
            lat,
            lng,
            label: "Depot".to_string(),
        }
    }

    #[test]
    fn renders_osm_link() {
        let mut map = LinkMap::default();
        let rendered = map.draw(&point(52.52, 13.405)).expect("draw should work");

        assert_eq!(
            rendered,
            "Depot https://www.openstreetmap.org/?mlat=52.52&mlon=13.405#map=15/52.52/13.405"
        );
        assert!(map.current.is_some());

        map.dispose();
        assert!(map.current.is_none());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut map = LinkMap::default();
        let result = map.draw(&point(123.0, 13.405));
        assert!(matches!(result, Err(AppError::Map(_))));
    }
}
