use deploy_defs::{ApiFault, NormalizedError};
use deploy_utils::{parse_content, ParsedContent};
use serde_json::Value;

/// Collapse any orchestrator API failure into the one error shape callers
/// see. Total: every fault maps to a valid `NormalizedError`.
///
/// Runtime faults carry their own message/code/status through. For backend
/// error responses the message and code come from the `message` and
/// `error_code` fields of a structured body; an unstructured body becomes
/// the message as-is, and a missing body falls back to the defaults.
pub fn normalize_fault(fault: ApiFault) -> NormalizedError {
    match fault {
        ApiFault::Runtime {
            message,
            code,
            status,
        } => NormalizedError {
            message,
            code,
            status,
        },
        ApiFault::Response { status, body } => {
            let mut normalized = NormalizedError {
                message: "unknown API error".to_string(),
                code: Some("UNKNOWN".to_string()),
                status,
            };
            if let Some(body) = body {
                match parse_content(&body) {
                    ParsedContent::Structured(content) => {
                        if let Some(message) = non_empty_field(&content, "message") {
                            normalized.message = message;
                        }
                        if let Some(code) = non_empty_field(&content, "error_code") {
                            normalized.code = Some(code);
                        }
                    }
                    ParsedContent::Raw(text) => normalized.message = text,
                }
            }
            normalized
        }
    }
}

fn non_empty_field(content: &Value, field: &str) -> Option<String> {
    content
        .get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn runtime_fault_fields_pass_through() {
        let normalized = normalize_fault(ApiFault::Runtime {
            message: "connect ECONNREFUSED 10.1.2.3:443".to_string(),
            code: Some("ECONNREFUSED".to_string()),
            status: None,
        });
        assert_eq!(
            normalized,
            NormalizedError {
                message: "connect ECONNREFUSED 10.1.2.3:443".to_string(),
                code: Some("ECONNREFUSED".to_string()),
                status: None,
            }
        );
    }

    #[test]
    fn runtime_fault_without_code_stays_codeless() {
        let normalized = normalize_fault(ApiFault::Runtime {
            message: "request timed out".to_string(),
            code: None,
            status: None,
        });
        assert_eq!(normalized.code, None);
        assert_eq!(normalized.status, None);
    }

    #[test]
    fn structured_body_supplies_message_and_code() {
        let normalized = normalize_fault(ApiFault::Response {
            status: Some(400),
            body: Some(r#"{"message": "bad", "error_code": "E1"}"#.to_string()),
        });
        assert_eq!(
            normalized,
            NormalizedError {
                message: "bad".to_string(),
                code: Some("E1".to_string()),
                status: Some(400),
            }
        );
    }

    #[test]
    fn structured_body_with_missing_fields_keeps_defaults() {
        let normalized = normalize_fault(ApiFault::Response {
            status: None,
            body: Some(r#"{"detail": "something else entirely"}"#.to_string()),
        });
        assert_eq!(normalized.message, "unknown API error");
        assert_eq!(normalized.code, Some("UNKNOWN".to_string()));
    }

    #[test]
    fn unstructured_body_becomes_the_message() {
        let normalized = normalize_fault(ApiFault::Response {
            status: Some(502),
            body: Some("oops".to_string()),
        });
        assert_eq!(
            normalized,
            NormalizedError {
                message: "oops".to_string(),
                code: Some("UNKNOWN".to_string()),
                status: Some(502),
            }
        );
    }

    #[test]
    fn missing_body_falls_back_to_defaults() {
        let normalized = normalize_fault(ApiFault::Response {
            status: None,
            body: None,
        });
        assert_eq!(
            normalized,
            NormalizedError {
                message: "unknown API error".to_string(),
                code: Some("UNKNOWN".to_string()),
                status: None,
            }
        );
    }
}
