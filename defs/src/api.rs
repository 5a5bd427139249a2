/// Result of a single orchestrator API call.
///
/// The backend answers every call with a stringified payload; callers that
/// care about the content run it through `deploy_utils::parse_content`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiResponse {
    pub status: Option<u16>,
    pub body: Option<String>,
}

impl ApiResponse {
    pub fn with_body(body: impl Into<String>) -> Self {
        ApiResponse {
            status: Some(200),
            body: Some(body.into()),
        }
    }
}
