//! Page dimensions and margins, in PDF points (1/72 inch).
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn width(&self) -> f32 {
        self.dimensions_pt().0
    }

    pub fn height(&self) -> f32 {
        self.dimensions_pt().1
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Parse a length with an optional unit suffix (e.g., "10pt", "5mm", "12")
    fn parse_length(input: &str) -> Result<f32, String> {
        let input = input.trim();
        let (number, factor) = if let Some(val) = input.strip_suffix("pt") {
            (val, 1.0)
        } else if let Some(val) = input.strip_suffix("in") {
            (val, 72.0)
        } else if let Some(val) = input.strip_suffix("cm") {
            (val, 28.35)
        } else if let Some(val) = input.strip_suffix("mm") {
            (val, 2.835)
        } else {
            (input, 1.0)
        };
        number
            .trim()
            .parse::<f32>()
            .map(|v| v * factor)
            .map_err(|e| format!("Invalid number: {}", e))
    }

    /// Parse margin shorthand (1, 2, or 4 values)
    fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(Self::parse_length)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [vertical, horizontal] => Ok(Margins {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Margins {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(format!(
                "Invalid margin shorthand: expected 1, 2, or 4 values, got {}",
                values.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, a string like '10pt' or '10pt 20pt', or a map")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Ok(Margins::all(value as f32))
            }

            fn visit_str<E>(self, value: &str) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Margins::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => margins.top = map.next_value()?,
                        "right" => margins.right = map.next_value()?,
                        "bottom" => margins.bottom = map.next_value()?,
                        "left" => margins.left = map.next_value()?,
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_from_name_or_map() {
        let a4: PageSize = serde_json::from_str("\"a4\"").unwrap();
        assert_eq!(a4, PageSize::A4);

        let custom: PageSize = serde_json::from_str(r#"{"width": 300, "height": 400}"#).unwrap();
        assert_eq!(custom.dimensions_pt(), (300.0, 400.0));

        assert!(serde_json::from_str::<PageSize>("\"tabloid\"").is_err());
    }

    #[test]
    fn test_margins_shorthand_and_units() {
        let m: Margins = serde_json::from_str("\"10pt 1in\"").unwrap();
        assert_eq!(m.top, 10.0);
        assert_eq!(m.left, 72.0);

        let uniform: Margins = serde_json::from_str("40").unwrap();
        assert_eq!(uniform, Margins::all(40.0));

        let map: Margins = serde_json::from_str(r#"{"left": 40, "right": 12}"#).unwrap();
        assert_eq!(map.left, 40.0);
        assert_eq!(map.top, 0.0);
    }
}
