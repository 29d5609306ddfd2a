//! GeoJSON `Feature` documents for points, line strings and polygons.
//!
//! Positions are written as `[x, y]`. On input, any extra members (altitude)
//! are accepted and dropped. Only the geometry kinds the primitive model can
//! represent are supported; anything else fails to deserialize.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geom::{LineString, Point, Ring};
use crate::props::Properties;

/// GeoJSON position reduced to `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(pub [f64; 2]);

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(s)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let vals = Vec::<f64>::deserialize(d)?;
        match vals[..] {
            [x, y, ..] => Ok(Position([x, y])),
            _ => Err(D::Error::invalid_length(
                vals.len(),
                &"a position with at least 2 members",
            )),
        }
    }
}

#[inline]
fn position(p: &Point) -> Position {
    Position([p.x, p.y])
}

#[inline]
fn point(p: &Position) -> Point {
    Point::new(p.0[0], p.0[1])
}

/// Geometry object, tagged by its `"type"` member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
}

impl Geometry {
    #[inline]
    pub fn is_point(&self) -> bool {
        matches!(self, Geometry::Point { .. })
    }

    #[inline]
    pub fn is_line_string(&self) -> bool {
        matches!(self, Geometry::LineString { .. })
    }

    #[inline]
    pub fn is_polygon(&self) -> bool {
        matches!(self, Geometry::Polygon { .. })
    }

    pub fn as_point(&self) -> Option<Point> {
        match self {
            Geometry::Point { coordinates } => Some(point(coordinates)),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<LineString> {
        match self {
            Geometry::LineString { coordinates } => Some(coordinates.iter().map(point).collect()),
            _ => None,
        }
    }

    /// Rings of a polygon, exterior first.
    pub fn as_rings(&self) -> Option<Vec<Ring>> {
        match self {
            Geometry::Polygon { coordinates } => Some(
                coordinates
                    .iter()
                    .map(|r| Ring::from(r.iter().map(point).collect::<Vec<_>>()))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Polygon with the given rings (exterior first).
    pub fn polygon(rings: &[Ring]) -> Self {
        Geometry::Polygon {
            coordinates: rings
                .iter()
                .map(|r| r.points.iter().map(position).collect())
                .collect(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(p: Point) -> Self {
        Geometry::Point {
            coordinates: position(&p),
        }
    }
}

impl From<&LineString> for Geometry {
    fn from(ls: &LineString) -> Self {
        Geometry::LineString {
            coordinates: ls.points.iter().map(position).collect(),
        }
    }
}

impl From<&Ring> for Geometry {
    fn from(r: &Ring) -> Self {
        Geometry::polygon(std::slice::from_ref(r))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureTag {
    Feature,
}

/// A geometry plus its property bag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Properties,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            geometry,
            properties: Properties::new(),
        }
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl LineString {
    /// Wrap as a feature with empty properties.
    pub fn to_feature(&self) -> Feature {
        Feature::new(Geometry::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn line_string_feature() {
        let mut ls = LineString::new();
        ls.push(vector![1.0, 2.0]);
        let f = ls.to_feature();
        assert!(f.geometry.is_line_string());
        assert_eq!(f.geometry.as_line_string(), Some(ls));
        assert!(f.properties.is_empty());
    }

    #[test]
    fn parses_point_feature_with_properties() {
        let raw = r#"
          { "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [102.0, 0.5] },
            "properties": { "bool": true, "int": 1, "float64": 1.2, "string": "text" }
          }"#;
        let f = Feature::from_json(raw).unwrap();
        assert_eq!(f.geometry.as_point(), Some(vector![102.0, 0.5]));
        assert!(f.properties.must_bool("bool", false));
        assert_eq!(f.properties.must_int("int", 0), 1);
        assert_eq!(f.properties.must_string("string", ""), "text");
    }

    #[test]
    fn missing_properties_default_to_empty() {
        let raw = r#"{"type":"Feature","geometry":{"type":"LineString","coordinates":[[1,2],[3,4]]}}"#;
        let f = Feature::from_json(raw).unwrap();
        assert!(f.properties.is_empty());
        assert_eq!(f.geometry.as_line_string().unwrap().len(), 2);
    }

    #[test]
    fn altitude_is_dropped_and_coordinate_properties_load() {
        let raw = r#"{
            "type":"Feature",
            "properties":{
                "coordinateProperties":{
                    "times":["2024-06-12T09:03:59Z","2024-06-12T09:04:00Z","2024-06-12T09:04:06Z"]
                }
            },
            "geometry":{
                "type":"LineString",
                "coordinates":[[-4.00387147,56.70437094,207],[-4.00383705,56.70436426,208],[-4.00371947,56.70432306,209]]
            }
        }"#;
        let f = Feature::from_json(raw).unwrap();
        let ls = f.geometry.as_line_string().unwrap();
        assert_eq!(ls.len(), 3);
        assert_eq!(ls.points[0], vector![-4.00387147, 56.70437094]);
        match f.properties.coordinate_properties().get("times") {
            Some(crate::props::Value::List(times)) => assert_eq!(times.len(), 3),
            other => panic!("expected a list of times, got {other:?}"),
        }
        // Written back as plain [x, y].
        assert!(f.to_json().unwrap().contains("[-4.00387147,56.70437094]"));
    }

    #[test]
    fn short_positions_are_rejected() {
        let raw = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1]}}"#;
        let err = Feature::from_json(raw).unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn rejects_other_document_types() {
        let raw = r#"{"type":"FeatureCollection","geometry":{"type":"Point","coordinates":[0,0]}}"#;
        assert!(Feature::from_json(raw).is_err());
        let raw = r#"{"type":"Feature","geometry":{"type":"MultiPoint","coordinates":[[0,0]]}}"#;
        assert!(Feature::from_json(raw).is_err());
    }

    #[test]
    fn polygon_json_round_trip() {
        let ring = crate::geom::Bound::new(vector![0.0, 0.0], vector![1.0, 2.0]).to_ring();
        let mut f = Feature::new(Geometry::from(&ring));
        f.properties.insert("name", "box");
        let s = f.to_json().unwrap();
        assert!(s.starts_with(r#"{"type":"Feature","geometry":{"type":"Polygon""#));
        let back = Feature::from_json(&s).unwrap();
        assert_eq!(back, f);
        assert_eq!(back.geometry.as_rings(), Some(vec![ring]));
    }
}
