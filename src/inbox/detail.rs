use serde::Serialize;
use serde_json::Value;

use super::model::{NormalizedItem, RawRecord};
use crate::map::{MapRender, MapSlot};

const DETAIL_FIELDS: [(&str, &str); 9] = [
    ("id", "ID"),
    ("status", "Status"),
    ("tracking_number", "Tracking Number"),
    ("carrier", "Carrier"),
    ("weight", "Weight"),
    ("dimensions", "Dimensions"),
    ("sender_address", "Sender Address"),
    ("recipient_address", "Recipient Address"),
    ("estimated_delivery", "Estimated Delivery"),
];

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPoint {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
}

pub fn extract_fields(item: &NormalizedItem) -> Vec<DetailField> {
    DETAIL_FIELDS
        .iter()
        .filter_map(|&(key, label)| {
            display_value(item.raw.get(key)).map(|value| DetailField { label, value })
        })
        .collect()
}

fn display_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

pub fn extract_location(item: &NormalizedItem) -> Option<LocationPoint> {
    let raw = item.raw.as_ref();

    nested_point(raw, "location", "Location", true)
        .or_else(|| top_level_point(raw))
        .or_else(|| nested_point(raw, "tracking_location", "Tracking Location", false))
}

fn nested_point(
    raw: &RawRecord,
    key: &str,
    default_label: &str,
    labelled: bool,
) -> Option<LocationPoint> {
    let location = raw.get(key)?;
    let lat = coordinate(location.get("lat"))?;
    let lng = coordinate(location.get("lng"))?;

    let label = labelled
        .then(|| location.get("label").and_then(Value::as_str))
        .flatten()
        .filter(|label| !label.trim().is_empty())
        .unwrap_or(default_label);

    Some(LocationPoint {
        lat,
        lng,
        label: label.to_string(),
    })
}

fn top_level_point(raw: &RawRecord) -> Option<LocationPoint> {
    Some(LocationPoint {
        lat: coordinate(raw.get("latitude"))?,
        lng: coordinate(raw.get("longitude"))?,
        label: "Location".to_string(),
    })
}

fn coordinate(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    parsed.is_finite().then_some(parsed)
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub item: NormalizedItem,
    pub fields: Vec<DetailField>,
    pub location: Option<LocationPoint>,
    pub map: Option<MapRender>,
    pub raw: RawRecord,
}

impl DetailView {
    pub fn open(item: &NormalizedItem, map_slot: &mut MapSlot) -> Self {
        let location = extract_location(item);
        let map = match &location {
            Some(point) => Some(map_slot.show(point)),
            None => {
                map_slot.close();
                None
            }
        };

        Self {
            item: item.clone(),
            fields: extract_fields(item),
            location,
            map,
            raw: item.raw.as_ref().clone(),
        }
    }

    pub fn close(self, map_slot: &mut MapSlot) {
        map_slot.close();
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::inbox::model::Category;
    use crate::inbox::normalize::normalize_record;

    fn item(raw: Value) -> NormalizedItem {
        let now = Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap();
        normalize_record(Category::Package, 0, &raw, now)
    }

    #[test]
    fn fields_follow_the_fixed_order_and_skip_empty_values() {
        let item = item(json!({
            "carrier": "DHL",
            "id": "p-1",
            "status": "",
            "weight": 2.5,
            "dimensions": { "w": 10, "h": 20 },
            "color": "red",
            "recipient_address": null
        }));

        let labels: Vec<_> = extract_fields(&item)
            .into_iter()
            .map(|field| (field.label, field.value))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("ID", "p-1".to_string()),
                ("Carrier", "DHL".to_string()),
                ("Weight", "2.5".to_string()),
                ("Dimensions", r#"{"h":20,"w":10}"#.to_string()),
            ]
        );
    }

    #[test]
    fn nested_location_wins_over_top_level() {
        let item = item(json!({
            "location": { "lat": 52.52, "lng": 13.405, "label": "Depot" },
            "latitude": 1.0,
            "longitude": 2.0
        }));

        assert_eq!(
            extract_location(&item),
            Some(LocationPoint {
                lat: 52.52,
                lng: 13.405,
                label: "Depot".to_string(),
            })
        );
    }

    #[test]
    fn falls_back_through_location_shapes() {
        let partial_nested = item(json!({
            "location": { "lat": 52.52 },
            "latitude": "48.1",
            "longitude": "11.5"
        }));
        let tracking = item(json!({ "tracking_location": { "lat": 1.5, "lng": 2.5, "label": "ignored" } }));

        assert_eq!(
            extract_location(&partial_nested),
            Some(LocationPoint {
                lat: 48.1,
                lng: 11.5,
                label: "Location".to_string(),
            })
        );
        assert_eq!(
            extract_location(&tracking),
            Some(LocationPoint {
                lat: 1.5,
                lng: 2.5,
                label: "Tracking Location".to_string(),
            })
        );
    }

    #[test]
    fn missing_location_is_none() {
        let item = item(json!({ "location": "Berlin", "latitude": 1.0 }));
        assert_eq!(extract_location(&item), None);
    }

    #[test]
    fn nested_location_defaults_its_label() {
        let item = item(json!({ "location": { "lat": 0, "lng": 0 } }));
        let point = extract_location(&item).unwrap();
        assert_eq!(point.label, "Location");
    }
}
