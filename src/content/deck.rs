use crate::foundation::error::{ScrollyError, ScrollyResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Horizontal alignment of a hero phrase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// One phrase of the stacked hero narrative.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeroPhrase {
    pub text: String,
    pub sub: String,
    pub align: Align,
    /// Accent color as `#rrggbb`.
    pub color: String,
    /// 1-based narrative position.
    pub order: u32,
}

/// One phase of the showcase reel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShowcasePhase {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Oversized backdrop word behind the phase.
    pub outline_text: String,
    /// Accent color as `#rrggbb`.
    pub color: String,
    /// 1-based narrative position.
    pub order: u32,
    /// Background clip path, if the phase has one.
    #[serde(default)]
    pub video: Option<String>,
    /// Extra zoom applied to the clip to hide letterboxing.
    #[serde(default)]
    pub video_scale: Option<f64>,
}

/// One entry of the site navigation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    /// 1-based menu position.
    pub order: u32,
}

/// The narrative content a scrollytelling page is built from.
///
/// This is the JSON-facing, human-edited model. The tracking core never
/// reads it; sessions only need the phase counts, everything else is
/// presentation data handed through to the host.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentDeck {
    #[serde(default)]
    pub hero: Vec<HeroPhrase>,
    #[serde(default)]
    pub showcase: Vec<ShowcasePhase>,
    #[serde(default)]
    pub nav: Vec<NavItem>,
}

impl ContentDeck {
    /// Parse a deck from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollyResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrollyError::serde(format!("parse content deck JSON: {e}")))
    }

    /// Parse a deck from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollyError::validation(format!("open content deck '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write the deck as pretty-printed JSON.
    pub fn to_writer_pretty<W: std::io::Write>(&self, w: W) -> ScrollyResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| ScrollyError::serde(format!("write content deck JSON: {e}")))
    }

    /// Check deck invariants: non-empty sections, `#rrggbb` colors, unique
    /// contiguous 1-based orders, positive video scales.
    pub fn validate(&self) -> ScrollyResult<()> {
        if self.hero.is_empty() {
            return Err(ScrollyError::validation("deck has no hero phrases"));
        }
        if self.showcase.is_empty() {
            return Err(ScrollyError::validation("deck has no showcase phases"));
        }
        if self.nav.is_empty() {
            return Err(ScrollyError::validation("deck has no nav items"));
        }

        for phrase in &self.hero {
            parse_hex_rgb(&phrase.color)?;
        }
        for phase in &self.showcase {
            parse_hex_rgb(&phase.color)?;
            if let Some(scale) = phase.video_scale
                && (!scale.is_finite() || scale <= 0.0)
            {
                return Err(ScrollyError::validation(format!(
                    "showcase '{}' video_scale must be finite and > 0",
                    phase.title
                )));
            }
        }

        check_orders("hero", self.hero.iter().map(|p| p.order))?;
        check_orders("showcase", self.showcase.iter().map(|p| p.order))?;
        check_orders("nav", self.nav.iter().map(|n| n.order))?;
        Ok(())
    }

    /// Number of phases the hero narrative tracks through.
    pub fn hero_phase_count(&self) -> usize {
        self.hero.len()
    }

    /// Number of phases the showcase reel tracks through.
    pub fn showcase_phase_count(&self) -> usize {
        self.showcase.len()
    }

    /// Hero phrases sorted by their narrative order.
    pub fn hero_in_order(&self) -> Vec<&HeroPhrase> {
        let mut v: Vec<&HeroPhrase> = self.hero.iter().collect();
        v.sort_by_key(|p| p.order);
        v
    }

    /// Showcase phases sorted by their narrative order.
    pub fn showcase_in_order(&self) -> Vec<&ShowcasePhase> {
        let mut v: Vec<&ShowcasePhase> = self.showcase.iter().collect();
        v.sort_by_key(|p| p.order);
        v
    }

    /// Nav items sorted by their menu order.
    pub fn nav_in_order(&self) -> Vec<&NavItem> {
        let mut v: Vec<&NavItem> = self.nav.iter().collect();
        v.sort_by_key(|n| n.order);
        v
    }
}

fn check_orders(section: &str, orders: impl Iterator<Item = u32>) -> ScrollyResult<()> {
    let mut sorted: Vec<u32> = orders.collect();
    sorted.sort_unstable();
    for (i, &order) in sorted.iter().enumerate() {
        let expected = (i + 1) as u32;
        if order != expected {
            return Err(ScrollyError::validation(format!(
                "{section} orders must be unique and contiguous from 1: expected {expected}, found {order}"
            )));
        }
    }
    Ok(())
}

/// Parse a `#rrggbb` color into its byte channels.
pub fn parse_hex_rgb(s: &str) -> ScrollyResult<[u8; 3]> {
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| ScrollyError::validation(format!("color '{s}' must start with '#'")))?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ScrollyError::validation(format!(
            "color '{s}' must be '#' followed by 6 hex digits"
        )));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| ScrollyError::validation(format!("color '{s}': {e}")))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_deck() -> ContentDeck {
        ContentDeck {
            hero: vec![
                HeroPhrase {
                    text: "ONE".to_owned(),
                    sub: "FIRST".to_owned(),
                    align: Align::Center,
                    color: "#ffffff".to_owned(),
                    order: 1,
                },
                HeroPhrase {
                    text: "TWO".to_owned(),
                    sub: "SECOND".to_owned(),
                    align: Align::Left,
                    color: "#E4405F".to_owned(),
                    order: 2,
                },
            ],
            showcase: vec![ShowcasePhase {
                title: "VFX".to_owned(),
                subtitle: "VISUAL EFFECTS".to_owned(),
                description: "Compositing.".to_owned(),
                outline_text: "EFFECTS".to_owned(),
                color: "#c45e3a".to_owned(),
                order: 1,
                video: Some("/reel.mp4".to_owned()),
                video_scale: Some(1.5),
            }],
            nav: vec![NavItem {
                label: "Home".to_owned(),
                href: "#home".to_owned(),
                order: 1,
            }],
        }
    }

    #[test]
    fn parse_hex_rgb_accepts_both_cases() {
        assert_eq!(parse_hex_rgb("#ffffff").unwrap(), [255, 255, 255]);
        assert_eq!(parse_hex_rgb("#E4405F").unwrap(), [0xE4, 0x40, 0x5F]);
        assert_eq!(parse_hex_rgb("#3a7ec4").unwrap(), [0x3a, 0x7e, 0xc4]);
    }

    #[test]
    fn parse_hex_rgb_rejects_malformed_colors() {
        assert!(parse_hex_rgb("ffffff").is_err());
        assert!(parse_hex_rgb("#fff").is_err());
        assert!(parse_hex_rgb("#gggggg").is_err());
        assert!(parse_hex_rgb("#ffffff00").is_err());
        assert!(parse_hex_rgb("red").is_err());
    }

    #[test]
    fn tiny_deck_validates() {
        tiny_deck().validate().unwrap();
    }

    #[test]
    fn empty_sections_are_rejected() {
        let mut deck = tiny_deck();
        deck.hero.clear();
        assert!(deck.validate().is_err());

        let mut deck = tiny_deck();
        deck.nav.clear();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn duplicate_and_gapped_orders_are_rejected() {
        let mut deck = tiny_deck();
        deck.hero[1].order = 1;
        let err = deck.validate().unwrap_err();
        assert!(err.to_string().contains("hero orders"));

        let mut deck = tiny_deck();
        deck.hero[1].order = 3;
        assert!(deck.validate().is_err());

        let mut deck = tiny_deck();
        deck.nav[0].order = 0;
        assert!(deck.validate().is_err());
    }

    #[test]
    fn bad_color_and_bad_video_scale_are_rejected() {
        let mut deck = tiny_deck();
        deck.hero[0].color = "white".to_owned();
        assert!(deck.validate().is_err());

        let mut deck = tiny_deck();
        deck.showcase[0].video_scale = Some(0.0);
        assert!(deck.validate().is_err());
    }

    #[test]
    fn sorted_views_follow_order_fields() {
        let mut deck = tiny_deck();
        deck.hero.swap(0, 1);
        let ordered = deck.hero_in_order();
        assert_eq!(ordered[0].text, "ONE");
        assert_eq!(ordered[1].text, "TWO");
    }

    #[test]
    fn json_round_trips_through_snake_case() {
        let deck = tiny_deck();
        let mut buf = Vec::new();
        deck.to_writer_pretty(&mut buf).unwrap();

        let json = String::from_utf8(buf.clone()).unwrap();
        assert!(json.contains("\"outline_text\""));
        assert!(json.contains("\"video_scale\""));
        assert!(json.contains("\"center\""));

        let parsed = ContentDeck::from_reader(buf.as_slice()).unwrap();
        assert_eq!(parsed, deck);
    }

    #[test]
    fn missing_sections_parse_empty_then_fail_validation() {
        let deck = ContentDeck::from_reader(r#"{ "hero": [] }"#.as_bytes()).unwrap();
        assert!(deck.showcase.is_empty());
        assert!(deck.validate().is_err());
    }
}
