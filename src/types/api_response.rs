//! Typed shape of a Solar Resource API response body.
//!
//! Field names mirror the upstream JSON exactly. Anything that does not fit
//! these types is rejected during decoding instead of being read as absent.

use crate::types::lat_lon::LatLon;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub inputs: Inputs,
    pub outputs: Outputs,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub sources: Vec<String>,
}

/// The request parameters as echoed back by the API. Coordinates arrive as strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Inputs {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl Inputs {
    /// Parses the echoed coordinates, `None` if either is missing or not a number.
    pub fn location(&self) -> Option<LatLon> {
        let lat = self.lat.as_deref()?.trim().parse().ok()?;
        let lon = self.lon.as_deref()?.trim().parse().ok()?;
        Some(LatLon(lat, lon))
    }
}

/// One irradiance series: its annual mean and one value per month code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeriesData {
    pub annual: f64,
    pub monthly: HashMap<String, f64>,
}

/// Series name to data, in the order the series appear in the response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outputs(Vec<(String, SeriesData)>);

impl Outputs {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesData)> {
        self.0.iter().map(|(name, data)| (name.as_str(), data))
    }

    pub fn get(&self, name: &str) -> Option<&SeriesData> {
        self.0
            .iter()
            .find(|(series, _)| series == name)
            .map(|(_, data)| data)
    }
}

/// Later entries with an already-seen name replace the earlier data in place.
impl FromIterator<(String, SeriesData)> for Outputs {
    fn from_iter<I: IntoIterator<Item = (String, SeriesData)>>(iter: I) -> Self {
        let mut series: Vec<(String, SeriesData)> = Vec::new();
        for (name, data) in iter {
            match series.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = data,
                None => series.push((name, data)),
            }
        }
        Outputs(series)
    }
}

impl<'de> Deserialize<'de> for Outputs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OutputsVisitor;

        impl<'de> Visitor<'de> for OutputsVisitor {
            type Value = Outputs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of series name to series data")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Outputs, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut series: Vec<(String, SeriesData)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, data)) = map.next_entry::<String, SeriesData>()? {
                    if series.iter().any(|(existing, _)| *existing == name) {
                        return Err(de::Error::custom(format!("duplicate series '{}'", name)));
                    }
                    series.push((name, data));
                }
                Ok(Outputs(series))
            }
        }

        deserializer.deserialize_map(OutputsVisitor)
    }
}
