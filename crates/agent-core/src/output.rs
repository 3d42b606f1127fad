//! Structured Output
//!
//! Agents can declare a schema the model must answer with instead of free
//! text. The schema is generated from a typed record and shipped to the
//! hosted runtime; replies are decoded back into that record.

use schemars::JsonSchema;
use schemars::schema::RootSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Result};

/// Structured-output contract for an agent.
///
/// `key` names the state slot the runtime stores the decoded record under.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputSpec {
    /// State key for the decoded record
    pub key: String,

    /// JSON Schema the model reply must conform to
    pub schema: RootSchema,
}

impl OutputSpec {
    /// Build a spec from a typed record
    pub fn of<T: JsonSchema>(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            schema: schemars::schema_for!(T),
        }
    }

    /// Schema as a plain JSON value (for manifests)
    pub fn schema_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.schema)?)
    }

    /// Render the instruction section describing the output contract
    pub fn format_contract(&self) -> String {
        let schema = self
            .schema_json()
            .and_then(|v| serde_json::to_string_pretty(&v).map_err(AgentError::from))
            .unwrap_or_else(|_| "{}".into());

        format!(
            "## Output Format\n\n\
             Respond with a single JSON object conforming to this schema. \
             Do not add prose outside the JSON.\n\n```json\n{}\n```\n",
            schema
        )
    }

    /// Decode a model reply into the typed record.
    ///
    /// Tolerates a fenced code block or surrounding prose around the JSON
    /// payload. Shape mismatches surface as [`AgentError::OutputDecode`].
    pub fn decode<T: DeserializeOwned>(&self, raw: &str) -> Result<T> {
        let payload = extract_json(raw);
        serde_json::from_str(payload)
            .map_err(|e| AgentError::OutputDecode(format!("{} (payload: {})", e, payload.trim())))
    }
}

/// Pull the JSON payload out of a model reply.
///
/// Checks for a ```json fence first, then any ``` fence, then falls back to
/// the outermost brace pair.
fn extract_json(raw: &str) -> &str {
    for marker in ["```json", "```"] {
        if let Some(start) = raw.find(marker) {
            let after = &raw[start + marker.len()..];
            if let Some(end) = after.find("```") {
                return after[..end].trim();
            }
        }
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if end > start {
            return &raw[start..=end];
        }
    }

    raw.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "lowercase")]
    enum Verdict {
        Pass,
        Fail,
    }

    #[derive(Debug, Deserialize, Serialize, JsonSchema)]
    struct Review {
        subject: String,
        verdict: Verdict,
    }

    #[test]
    fn test_schema_json_lists_properties() {
        let spec = OutputSpec::of::<Review>("review");
        let schema = spec.schema_json().unwrap();

        let properties = schema.get("properties").unwrap();
        assert!(properties.get("subject").is_some());
        assert!(properties.get("verdict").is_some());
    }

    #[test]
    fn test_decode_plain_json() {
        let spec = OutputSpec::of::<Review>("review");
        let review: Review = spec
            .decode(r#"{"subject": "AAPL", "verdict": "pass"}"#)
            .unwrap();

        assert_eq!(review.subject, "AAPL");
        assert_eq!(review.verdict, Verdict::Pass);
    }

    #[test]
    fn test_decode_fenced_json_with_prose() {
        let spec = OutputSpec::of::<Review>("review");
        let raw = "Here is my answer:\n```json\n{\"subject\": \"MSFT\", \"verdict\": \"fail\"}\n```\nLet me know if you need more.";

        let review: Review = spec.decode(raw).unwrap();
        assert_eq!(review.subject, "MSFT");
        assert_eq!(review.verdict, Verdict::Fail);
    }

    #[test]
    fn test_decode_rejects_unknown_enum_value() {
        let spec = OutputSpec::of::<Review>("review");
        let result: Result<Review> = spec.decode(r#"{"subject": "AAPL", "verdict": "maybe"}"#);

        assert!(matches!(result, Err(AgentError::OutputDecode(_))));
    }

    #[test]
    fn test_format_contract_embeds_schema() {
        let spec = OutputSpec::of::<Review>("review");
        let contract = spec.format_contract();

        assert!(contract.contains("## Output Format"));
        assert!(contract.contains("verdict"));
    }
}
