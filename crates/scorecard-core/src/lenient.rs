//! Forgiving deserializers for configuration values that are edited by hand
//! or imported from share links.

use serde::{Deserialize, Deserializer, de::IgnoredAny};

/// A value that is expected to be a string but may be anything.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum LooseText {
    Text(String),
    Null(()),
    Other(IgnoredAny),
}

/// Deserializes any JSON number as a repetition count.
///
/// Fractions are floored, negative and non-finite values become zero and
/// values past `u32::MAX` saturate.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(count_from)
}

pub(crate) fn count_from(value: f64) -> u32 {
    // `as` saturates and maps NaN to zero
    value.floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Counted {
        #[serde(deserialize_with = "count")]
        n: u32,
    }

    fn parse(json: &str) -> u32 {
        serde_json::from_str::<Counted>(json).unwrap().n
    }

    #[test]
    fn test_count_accepts_integers() {
        assert_eq!(parse(r#"{"n": 9}"#), 9);
        assert_eq!(parse(r#"{"n": 0}"#), 0);
    }

    #[test]
    fn test_count_floors_fractions() {
        assert_eq!(parse(r#"{"n": 2.5}"#), 2);
        assert_eq!(parse(r#"{"n": 0.99}"#), 0);
    }

    #[test]
    fn test_count_clamps_negative_to_zero() {
        assert_eq!(parse(r#"{"n": -1}"#), 0);
        assert_eq!(parse(r#"{"n": -0.5}"#), 0);
    }

    #[test]
    fn test_count_saturates() {
        assert_eq!(parse(r#"{"n": 1e12}"#), u32::MAX);
        assert_eq!(count_from(f64::NAN), 0);
        assert_eq!(count_from(f64::INFINITY), u32::MAX);
    }

    #[test]
    fn test_count_rejects_non_numbers() {
        assert!(serde_json::from_str::<Counted>(r#"{"n": "nine"}"#).is_err());
    }

    #[test]
    fn test_loose_text_accepts_anything() {
        assert!(matches!(
            serde_json::from_str::<LooseText>(r#""away""#).unwrap(),
            LooseText::Text(s) if s == "away"
        ));
        assert!(matches!(
            serde_json::from_str::<LooseText>("null").unwrap(),
            LooseText::Null(())
        ));
        assert!(matches!(
            serde_json::from_str::<LooseText>("1").unwrap(),
            LooseText::Other(_)
        ));
        assert!(matches!(
            serde_json::from_str::<LooseText>(r#"{"side": "home"}"#).unwrap(),
            LooseText::Other(_)
        ));
    }
}
