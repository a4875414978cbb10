//! Pedal specification records.

use serde::{Deserialize, Deserializer, Serialize};

use crate::slug::pedal_slug;

/// Pedal categories known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PedalType {
    Fuzz,
    Distortion,
    Overdrive,
    Reverb,
    Delay,
    Chorus,
    Phaser,
    Flanger,
    Compressor,
    Boost,
    Eq,
    Filter,
    Octave,
    Tremolo,
    Looper,
    Other,
}

impl PedalType {
    /// Returns the category as it appears in records.
    pub fn as_str(&self) -> &'static str {
        match self {
            PedalType::Fuzz => "fuzz",
            PedalType::Distortion => "distortion",
            PedalType::Overdrive => "overdrive",
            PedalType::Reverb => "reverb",
            PedalType::Delay => "delay",
            PedalType::Chorus => "chorus",
            PedalType::Phaser => "phaser",
            PedalType::Flanger => "flanger",
            PedalType::Compressor => "compressor",
            PedalType::Boost => "boost",
            PedalType::Eq => "eq",
            PedalType::Filter => "filter",
            PedalType::Octave => "octave",
            PedalType::Tremolo => "tremolo",
            PedalType::Looper => "looper",
            PedalType::Other => "other",
        }
    }

    /// Returns all categories.
    pub fn all() -> &'static [PedalType] {
        &[
            PedalType::Fuzz,
            PedalType::Distortion,
            PedalType::Overdrive,
            PedalType::Reverb,
            PedalType::Delay,
            PedalType::Chorus,
            PedalType::Phaser,
            PedalType::Flanger,
            PedalType::Compressor,
            PedalType::Boost,
            PedalType::Eq,
            PedalType::Filter,
            PedalType::Octave,
            PedalType::Tremolo,
            PedalType::Looper,
            PedalType::Other,
        ]
    }

    /// Parses a category case-insensitively, returning `None` for unknown
    /// categories.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all().iter().copied().find(|t| t.as_str() == lower)
    }

    /// Parses a category, folding unknown categories into [`PedalType::Other`].
    pub fn from_category(s: &str) -> Self {
        Self::parse(s).unwrap_or(PedalType::Other)
    }
}

impl std::fmt::Display for PedalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pedal specification record.
///
/// Records are authored by hand or by the `add` command and stored one per
/// file. The generator reads identity, dimensions, and controls; the
/// remaining catalog fields are carried through untouched. Fields this
/// type does not know are ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedalSpec {
    /// Model name (e.g., "SY-1").
    pub name: String,

    /// Manufacturer name (e.g., "Boss").
    pub manufacturer: String,

    /// Category; kept as written so unknown categories survive a round trip.
    #[serde(rename = "type")]
    pub pedal_type: String,

    /// Power draw in milliamps.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub milli_amps: Option<f64>,

    /// Supply voltage.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub voltage: Option<f64>,

    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Street price in USD.
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Control labels in panel order.
    #[serde(default)]
    pub controls: Vec<String>,

    /// Free-form dimension string in inches, e.g. `4.77" x 2.6" x 1.39"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,

    /// Free-form weight string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Bypass type (e.g., "True Bypass").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypass: Option<String>,

    /// Release year.
    #[serde(
        default,
        deserialize_with = "lenient_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<u32>,

    /// URL-safe identifier; the join key with the generated model.
    pub slug: String,
}

impl PedalSpec {
    /// Creates a new record builder.
    pub fn builder(manufacturer: impl Into<String>, name: impl Into<String>) -> PedalSpecBuilder {
        PedalSpecBuilder::new(manufacturer, name)
    }

    /// Parses a record from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the record to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the record to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Category of the pedal, with unknown categories folded into `Other`.
    pub fn category(&self) -> PedalType {
        PedalType::from_category(&self.pedal_type)
    }

    /// Slug derived from manufacturer and name.
    pub fn derived_slug(&self) -> String {
        pedal_slug(&self.manufacturer, &self.name)
    }
}

// Catalog-only fields are informational; a value of the wrong shape reads as
// absent instead of failing the whole record.

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|y| y.fract() == 0.0 && *y >= 0.0 && *y <= f64::from(u32::MAX))
        .map(|y| y as u32))
}

fn number_from_value(value: &serde_json::Value) -> Option<f64> {
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Builder for [`PedalSpec`].
///
/// The slug is derived from manufacturer and name unless set explicitly.
#[derive(Debug, Clone)]
pub struct PedalSpecBuilder {
    spec: PedalSpec,
    explicit_slug: bool,
}

impl PedalSpecBuilder {
    /// Creates a builder for a pedal of type `other` with no controls.
    pub fn new(manufacturer: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            spec: PedalSpec {
                name: name.into(),
                manufacturer: manufacturer.into(),
                pedal_type: PedalType::Other.as_str().to_string(),
                milli_amps: None,
                voltage: None,
                image_url: None,
                price: None,
                description: None,
                controls: Vec::new(),
                dimensions: None,
                weight: None,
                bypass: None,
                year: None,
                slug: String::new(),
            },
            explicit_slug: false,
        }
    }

    pub fn pedal_type(mut self, pedal_type: impl Into<String>) -> Self {
        self.spec.pedal_type = pedal_type.into();
        self
    }

    pub fn control(mut self, control: impl Into<String>) -> Self {
        self.spec.controls.push(control.into());
        self
    }

    pub fn controls<I, S>(mut self, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.controls.extend(controls.into_iter().map(Into::into));
        self
    }

    pub fn dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.spec.dimensions = Some(dimensions.into());
        self
    }

    pub fn weight(mut self, weight: impl Into<String>) -> Self {
        self.spec.weight = Some(weight.into());
        self
    }

    pub fn milli_amps(mut self, milli_amps: f64) -> Self {
        self.spec.milli_amps = Some(milli_amps);
        self
    }

    pub fn voltage(mut self, voltage: f64) -> Self {
        self.spec.voltage = Some(voltage);
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.spec.image_url = Some(url.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.spec.price = Some(price);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.spec.description = Some(description.into());
        self
    }

    pub fn bypass(mut self, bypass: impl Into<String>) -> Self {
        self.spec.bypass = Some(bypass.into());
        self
    }

    pub fn year(mut self, year: u32) -> Self {
        self.spec.year = Some(year);
        self
    }

    /// Overrides the derived slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.spec.slug = slug.into();
        self.explicit_slug = true;
        self
    }

    pub fn build(mut self) -> PedalSpec {
        if !self.explicit_slug {
            self.spec.slug = self.spec.derived_slug();
        }
        self.spec
    }
}
