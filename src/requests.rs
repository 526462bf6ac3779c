//! Request and response bodies shared by the service, the HTTP layer and the CLI.

use crate::grid::Grid;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An integer that clients may send either as a JSON number or as a numeric string.
///
/// `null` reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FlexInt(pub i64);

impl FlexInt {
    /// The value as a count: negatives clamp to 0.
    #[must_use]
    pub fn as_count(self) -> usize {
        usize::try_from(self.0).unwrap_or(0)
    }
}

impl From<i64> for FlexInt {
    fn from(value: i64) -> Self {
        FlexInt(value)
    }
}

impl<'de> Deserialize<'de> for FlexInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlexIntVisitor)
    }
}

struct FlexIntVisitor;

impl Visitor<'_> for FlexIntVisitor {
    type Value = FlexInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string holding an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FlexInt, E> {
        Ok(FlexInt(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FlexInt, E> {
        i64::try_from(v)
            .map(FlexInt)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FlexInt, E> {
        v.trim()
            .parse()
            .map(FlexInt)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FlexInt, E> {
        Ok(FlexInt::default())
    }
}

/// Body of `POST /Words/Search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Accepted and logged, not applied.
    pub max_length: FlexInt,
    /// Accepted and logged, not applied.
    pub min_length: FlexInt,
    /// How many ranked words to return; negative means none.
    pub max_words: FlexInt,
    pub letters_matrix: Grid,
}

/// Body of `POST /Words/Update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWordsRequest {
    pub words: Vec<String>,
    /// Target the include list when true, the exclude list otherwise.
    pub include: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWordsResponse {
    pub added_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeResponse {
    pub added_count: usize,
    /// Always 0; kept for client compatibility.
    pub removed_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanMergeResponse {
    pub message: String,
}

/// One hit from a word lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupItem {
    /// The line as stored in the list.
    pub word: String,
    pub found: bool,
    /// File name of the list, e.g. `include.txt`.
    pub source: String,
    /// 1-based line number.
    pub line: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_int_accepts_numbers_and_strings() {
        let req: SearchRequest = serde_json::from_str(
            r#"{"maxLength": 8, "minLength": "3", "maxWords": " 10 ", "lettersMatrix": [["A"]]}"#,
        )
        .unwrap();
        assert_eq!(req.max_length, FlexInt(8));
        assert_eq!(req.min_length, FlexInt(3));
        assert_eq!(req.max_words, FlexInt(10));
        assert_eq!(req.letters_matrix, Grid::from(vec![vec!["A"]]));
    }

    #[test]
    fn test_flex_int_null_and_missing_default_to_zero() {
        let req: SearchRequest = serde_json::from_str(r#"{"maxWords": null}"#).unwrap();
        assert_eq!(req.max_words, FlexInt(0));
        assert_eq!(req.max_length, FlexInt(0));
        assert!(req.letters_matrix.is_empty());
    }

    #[test]
    fn test_flex_int_rejects_non_numeric_strings() {
        let err = serde_json::from_str::<SearchRequest>(r#"{"maxWords": "ten"}"#).unwrap_err();
        assert!(err.to_string().contains("integer"));
        assert!(serde_json::from_str::<FlexInt>("1.5").is_err());
    }

    #[test]
    fn test_as_count_clamps_negatives() {
        assert_eq!(FlexInt(-4).as_count(), 0);
        assert_eq!(FlexInt(7).as_count(), 7);
    }

    #[test]
    fn test_responses_use_camel_case() {
        let merge = MergeResponse { added_count: 2, removed_count: 0 };
        assert_eq!(serde_json::to_string(&merge).unwrap(), r#"{"addedCount":2,"removedCount":0}"#);

        let item = LookupItem {
            word: "pear".to_string(),
            found: true,
            source: "include.txt".to_string(),
            line: 3,
        };
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"word":"pear","found":true,"source":"include.txt","line":3}"#
        );
    }
}
