use serde_json::Value;

/// Outcome of a lenient parse attempt on a backend payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedContent {
    /// The input was valid JSON.
    Structured(Value),
    /// The input was not JSON; the original text is kept as-is.
    Raw(String),
}

impl ParsedContent {
    pub fn is_structured(&self) -> bool {
        matches!(self, ParsedContent::Structured(_))
    }

    pub fn structured(&self) -> Option<&Value> {
        match self {
            ParsedContent::Structured(value) => Some(value),
            ParsedContent::Raw(_) => None,
        }
    }

    pub fn into_structured(self) -> Option<Value> {
        match self {
            ParsedContent::Structured(value) => Some(value),
            ParsedContent::Raw(_) => None,
        }
    }
}

/// Try to parse a backend payload as JSON. Never fails; anything
/// serde_json rejects comes back as `Raw` with the original text.
pub fn parse_content(input: &str) -> ParsedContent {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => ParsedContent::Structured(value),
        Err(_) => ParsedContent::Raw(input.to_string()),
    }
}
