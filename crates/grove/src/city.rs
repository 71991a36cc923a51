//! City records shown on the palm: one frond per city.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Rgb8
// =============================================================================

/// An 8-bit sRGB color, written as `#rrggbb` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_color(self) -> Color {
        Color::srgb_u8(self.r, self.g, self.b)
    }

    /// Per-channel linear blend in sRGB space, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgb8, t: f32) -> Rgb8 {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb8::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb8::parse_hex(&value).ok_or_else(|| format!("invalid color {value:?}, expected #rrggbb"))
    }
}

impl From<Rgb8> for String {
    fn from(color: Rgb8) -> Self {
        color.to_hex()
    }
}

// =============================================================================
// CityRecord
// =============================================================================

/// Secondary statistics some rosters carry alongside the purchase share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityStats {
    /// Year-over-year growth in percent (may be negative).
    pub growth_rate: f32,
    pub orders: u32,
    /// Customer rating on a 0-5 scale.
    pub quality: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    /// Share of this city's dates already ordered, in percent.
    pub purchased: f32,
    pub color: Rgb8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<CityStats>,
}

impl CityRecord {
    pub fn new(name: impl Into<String>, purchased: f32, color: Rgb8) -> Self {
        Self {
            name: name.into(),
            purchased,
            color,
            stats: None,
        }
    }

    pub fn with_stats(mut self, stats: CityStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// The built-in roster: 24 Tunisian cities.
pub fn default_cities() -> Vec<CityRecord> {
    [
        ("Tunis", 75.0, Rgb8::new(0xff, 0x6b, 0x6b)),
        ("Sfax", 60.0, Rgb8::new(0x4e, 0xcd, 0xc4)),
        ("Sousse", 80.0, Rgb8::new(0x45, 0xb7, 0xd1)),
        ("Ettadhamen", 55.0, Rgb8::new(0xf9, 0xca, 0x24)),
        ("Kairouan", 70.0, Rgb8::new(0xf0, 0x93, 0x2b)),
        ("Gabès", 45.0, Rgb8::new(0xeb, 0x4d, 0x4b)),
        ("Bizerte", 65.0, Rgb8::new(0x6c, 0x5c, 0xe7)),
        ("Ariana", 50.0, Rgb8::new(0xa2, 0x9b, 0xfe)),
        ("Gafsa", 40.0, Rgb8::new(0xfd, 0x79, 0xa8)),
        ("Monastir", 35.0, Rgb8::new(0x00, 0xb8, 0x94)),
        ("Médenine", 30.0, Rgb8::new(0x00, 0xce, 0xc9)),
        ("Tataouine", 25.0, Rgb8::new(0xfd, 0xcb, 0x6e)),
        ("La Marsa", 20.0, Rgb8::new(0xe1, 0x70, 0x55)),
        ("El Kef", 15.0, Rgb8::new(0x81, 0xec, 0xec)),
        ("Mahdia", 10.0, Rgb8::new(0xff, 0xea, 0xa7)),
        ("Zarzis", 85.0, Rgb8::new(0xfa, 0xb1, 0xa0)),
        ("Kasserine", 90.0, Rgb8::new(0xff, 0x76, 0x75)),
        ("Ben Arous", 55.0, Rgb8::new(0x74, 0xb9, 0xff)),
        ("Jendouba", 60.0, Rgb8::new(0x00, 0xb8, 0x94)),
        ("Tozeur", 45.0, Rgb8::new(0xfd, 0xcb, 0x6e)),
        ("Nabeul", 50.0, Rgb8::new(0xe8, 0x43, 0x93)),
        ("Siliana", 40.0, Rgb8::new(0x00, 0xce, 0xc9)),
        ("Beja", 35.0, Rgb8::new(0x6c, 0x5c, 0xe7)),
        ("Manouba", 30.0, Rgb8::new(0xfd, 0x79, 0xa8)),
    ]
    .into_iter()
    .map(|(name, purchased, color)| CityRecord::new(name, purchased, color))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        assert_eq!(Rgb8::parse_hex("#ff6b6b"), Some(Rgb8::new(255, 107, 107)));
        assert_eq!(Rgb8::parse_hex("4ecdc4"), Some(Rgb8::new(0x4e, 0xcd, 0xc4)));
        assert_eq!(Rgb8::parse_hex(" #45B7D1 "), Some(Rgb8::new(0x45, 0xb7, 0xd1)));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(Rgb8::parse_hex("#fff"), None);
        assert_eq!(Rgb8::parse_hex("#gg0000"), None);
        assert_eq!(Rgb8::parse_hex(""), None);
        // multi-byte chars must not panic on slicing
        assert_eq!(Rgb8::parse_hex("#éé00"), None);
        // from_str_radix would accept a sign
        assert_eq!(Rgb8::parse_hex("#+f+f+f"), None);
    }

    #[test]
    fn test_hex_display_roundtrip() {
        let c = Rgb8::new(0x0a, 0xbc, 0xde);
        assert_eq!(c.to_string(), "#0abcde");
        assert_eq!(Rgb8::parse_hex(&c.to_hex()), Some(c));
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Rgb8::new(0, 0, 0);
        let b = Rgb8::new(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb8::new(100, 50, 25));
        assert_eq!(a.lerp(b, 7.0), b, "t is clamped");
    }

    #[test]
    fn test_default_roster_has_24_unique_cities() {
        let cities = default_cities();
        assert_eq!(cities.len(), 24);
        let mut names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 24, "city names must be unique");
    }

    #[test]
    fn test_default_roster_percentages_in_range() {
        for city in default_cities() {
            assert!(
                (0.0..=100.0).contains(&city.purchased),
                "{} has purchased={}",
                city.name,
                city.purchased
            );
        }
    }

    #[test]
    fn test_city_record_json_shape() {
        let json = r##"{"name":"Tunis","purchased":75,"color":"#ff6b6b"}"##;
        let city: CityRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(city.name, "Tunis");
        assert_eq!(city.purchased, 75.0);
        assert_eq!(city.color, Rgb8::new(0xff, 0x6b, 0x6b));
        assert!(city.stats.is_none());
    }

    #[test]
    fn test_city_record_with_stats_json() {
        let json = r##"{"name":"Sfax","purchased":60,"color":"#4ecdc4",
            "stats":{"growth_rate":12.5,"orders":340,"quality":4.6}}"##;
        let city: CityRecord = serde_json::from_str(json).expect("valid record");
        let stats = city.stats.expect("stats present");
        assert_eq!(stats.orders, 340);
        assert!((stats.quality - 4.6).abs() < 1e-6);
    }

    #[test]
    fn test_bad_color_is_rejected_by_serde() {
        let json = r#"{"name":"X","purchased":1,"color":"red"}"#;
        assert!(serde_json::from_str::<CityRecord>(json).is_err());
    }
}
