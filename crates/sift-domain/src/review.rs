//! Review module - the fixed-schema structured extraction record
//!
//! A `StructuredReview` is always fully shaped: every field has a documented
//! default, and model output is blended in field by field. Nothing here can
//! fail; unusable input simply leaves the default in place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Sentinel for a field the model could not determine
pub const NOT_SPECIFIED: &str = "Not specified";

/// Sentinel sentiment when none could be determined
pub const UNKNOWN_SENTIMENT: &str = "Unknown";

/// Overall sentiment of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// Favourable review
    Positive,

    /// Unfavourable review
    Negative,

    /// Neither favourable nor unfavourable
    Neutral,

    /// Both favourable and unfavourable points
    Mixed,

    /// Could not be determined
    Unknown,
}

impl Sentiment {
    /// Get the canonical sentiment label
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Mixed => "Mixed",
            Sentiment::Unknown => UNKNOWN_SENTIMENT,
        }
    }

    /// Parse a sentiment label, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            "mixed" => Some(Sentiment::Mixed),
            "unknown" => Some(Sentiment::Unknown),
            _ => None,
        }
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sentiment: {}", s))
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environment in which a reported behaviour was observed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestEnvironment {
    /// Operating system
    pub os: String,

    /// Software or firmware version
    pub software_version: String,

    /// Hardware or product model
    pub product_model: String,

    /// Anything else relevant
    pub other: String,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self {
            os: NOT_SPECIFIED.to_string(),
            software_version: NOT_SPECIFIED.to_string(),
            product_model: NOT_SPECIFIED.to_string(),
            other: NOT_SPECIFIED.to_string(),
        }
    }
}

impl TestEnvironment {
    /// Build an environment from a JSON object, keeping only the four known keys
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut env = Self::default();
        overwrite(&mut env.os, map.get("os"));
        overwrite(&mut env.software_version, map.get("software_version"));
        overwrite(&mut env.product_model, map.get("product_model"));
        overwrite(&mut env.other, map.get("other"));
        env
    }
}

/// Structured information extracted from a review summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReview {
    /// Name of the product or service under review
    pub product_or_service_name: String,

    /// The main point the reviewer makes
    pub key_point_description: String,

    /// The main problem the reviewer reports
    pub key_pain_point: String,

    /// Sentiment label, normally one of the `Sentiment` labels
    pub sentiment: String,

    /// Steps to reproduce the reported behaviour, in order
    pub test_steps: Vec<String>,

    /// Environment the behaviour was observed in
    pub test_environment: TestEnvironment,

    /// Why extraction fell back to defaults, if it did
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_error: Option<String>,
}

impl Default for StructuredReview {
    fn default() -> Self {
        Self {
            product_or_service_name: NOT_SPECIFIED.to_string(),
            key_point_description: NOT_SPECIFIED.to_string(),
            key_pain_point: NOT_SPECIFIED.to_string(),
            sentiment: UNKNOWN_SENTIMENT.to_string(),
            test_steps: Vec::new(),
            test_environment: TestEnvironment::default(),
            extraction_error: None,
        }
    }
}

impl StructuredReview {
    /// Default-populated review carrying an extraction error
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            extraction_error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Blend an untyped JSON object into the fixed schema.
    ///
    /// Each field starts at its default and is overwritten only when the key is
    /// present. Scalars are stringified whatever their JSON type; a non-array
    /// `test_steps` becomes a single step; `test_environment` keeps only its
    /// four known keys. `null` counts as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_domain::StructuredReview;
    /// use serde_json::json;
    ///
    /// let input = json!({"product_or_service_name": 123, "sentiment": true});
    /// let review = StructuredReview::from_json_map(input.as_object().unwrap());
    /// assert_eq!(review.product_or_service_name, "123");
    /// assert_eq!(review.sentiment, "True");
    /// assert_eq!(review.key_pain_point, "Not specified");
    /// ```
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut review = Self::default();

        overwrite(&mut review.product_or_service_name, map.get("product_or_service_name"));
        overwrite(&mut review.key_point_description, map.get("key_point_description"));
        overwrite(&mut review.key_pain_point, map.get("key_pain_point"));
        overwrite(&mut review.sentiment, map.get("sentiment"));

        match map.get("test_steps") {
            None | Some(Value::Null) => {}
            Some(Value::Array(steps)) => {
                review.test_steps = steps.iter().map(stringify).collect();
            }
            Some(single) => review.test_steps = vec![stringify(single)],
        }

        if let Some(Value::Object(env)) = map.get("test_environment") {
            review.test_environment = TestEnvironment::from_json_map(env);
        }

        review
    }

    /// Interpret the stored sentiment label
    pub fn sentiment_kind(&self) -> Sentiment {
        Sentiment::parse(&self.sentiment).unwrap_or(Sentiment::Unknown)
    }

    /// Whether extraction fell back to defaults
    pub fn has_error(&self) -> bool {
        self.extraction_error.is_some()
    }
}

fn overwrite(slot: &mut String, value: Option<&Value>) {
    match value {
        None | Some(Value::Null) => {}
        Some(v) => *slot = stringify(v),
    }
}

/// Render any JSON value as display text
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from(value: Value) -> StructuredReview {
        StructuredReview::from_json_map(value.as_object().unwrap())
    }

    #[test]
    fn test_default_review() {
        let review = StructuredReview::default();
        assert_eq!(review.product_or_service_name, NOT_SPECIFIED);
        assert_eq!(review.key_point_description, NOT_SPECIFIED);
        assert_eq!(review.key_pain_point, NOT_SPECIFIED);
        assert_eq!(review.sentiment, "Unknown");
        assert!(review.test_steps.is_empty());
        assert_eq!(review.test_environment.os, NOT_SPECIFIED);
        assert_eq!(review.test_environment.software_version, NOT_SPECIFIED);
        assert_eq!(review.test_environment.product_model, NOT_SPECIFIED);
        assert_eq!(review.test_environment.other, NOT_SPECIFIED);
        assert!(!review.has_error());
    }

    #[test]
    fn test_scalar_coercion() {
        let review = from(json!({
            "product_or_service_name": 123,
            "sentiment": true,
            "test_steps": [1, 2, 3]
        }));
        assert_eq!(review.product_or_service_name, "123");
        assert_eq!(review.sentiment, "True");
        assert_eq!(review.test_steps, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_partial_input_keeps_defaults() {
        let review = from(json!({"product_or_service_name": "X"}));
        let expected = StructuredReview {
            product_or_service_name: "X".to_string(),
            ..StructuredReview::default()
        };
        assert_eq!(review, expected);
    }

    #[test]
    fn test_single_step_is_wrapped() {
        let review = from(json!({"test_steps": "Open the app"}));
        assert_eq!(review.test_steps, vec!["Open the app"]);
    }

    #[test]
    fn test_null_counts_as_absent() {
        let review = from(json!({"key_pain_point": null, "test_steps": null}));
        assert_eq!(review.key_pain_point, NOT_SPECIFIED);
        assert!(review.test_steps.is_empty());
    }

    #[test]
    fn test_environment_known_keys_only() {
        let review = from(json!({
            "test_environment": {
                "os": "Windows 11 Pro",
                "product_model": "Dell XPS 15",
                "gpu": "RTX 4070"
            }
        }));
        let env = &review.test_environment;
        assert_eq!(env.os, "Windows 11 Pro");
        assert_eq!(env.product_model, "Dell XPS 15");
        assert_eq!(env.software_version, NOT_SPECIFIED);
        assert_eq!(env.other, NOT_SPECIFIED);

        let serialized = serde_json::to_value(env).unwrap();
        assert_eq!(serialized.as_object().unwrap().len(), 4);
        assert!(serialized.get("gpu").is_none());
    }

    #[test]
    fn test_environment_not_an_object() {
        let review = from(json!({"test_environment": "Android 13"}));
        assert_eq!(review.test_environment, TestEnvironment::default());
    }

    #[test]
    fn test_nested_values_render_as_json() {
        let review = from(json!({"key_point_description": {"a": 1}, "test_steps": [[1, 2]]}));
        assert_eq!(review.key_point_description, r#"{"a":1}"#);
        assert_eq!(review.test_steps, vec!["[1,2]"]);
    }

    #[test]
    fn test_sentiment_kind() {
        let mut review = StructuredReview::default();
        assert_eq!(review.sentiment_kind(), Sentiment::Unknown);

        review.sentiment = " negative ".to_string();
        assert_eq!(review.sentiment_kind(), Sentiment::Negative);

        review.sentiment = "True".to_string();
        assert_eq!(review.sentiment_kind(), Sentiment::Unknown);
    }

    #[test]
    fn test_sentiment_from_str() {
        assert_eq!("Mixed".parse::<Sentiment>(), Ok(Sentiment::Mixed));
        assert!("great".parse::<Sentiment>().is_err());
        assert_eq!(Sentiment::Positive.to_string(), "Positive");
    }

    #[test]
    fn test_error_omitted_when_absent() {
        let json = serde_json::to_value(StructuredReview::default()).unwrap();
        assert!(json.get("extraction_error").is_none());

        let json = serde_json::to_value(StructuredReview::with_error("boom")).unwrap();
        assert_eq!(json["extraction_error"], "boom");
        assert_eq!(json["sentiment"], "Unknown");
    }
}
