//! HTTP API handlers.

use axum::extract::Path;
use axum::Json;
use serde::Serialize;

/// Name returned by the root endpoint.
pub const NAME: &str = "Smeet";
/// Location returned by every endpoint.
pub const LOCATION: &str = "Dehradun";

/// Fixed introduction returned for the base path.
///
/// The `Location` key is capitalized on the wire, so it carries a serde rename.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Always "Smeet".
    pub name: &'static str,
    /// Always "Dehradun".
    #[serde(rename = "Location")]
    pub location: &'static str,
}

/// Echo of a single captured path segment.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    /// The captured segment, verbatim after percent-decoding.
    pub hi: String,
    /// Always "Dehradun".
    #[serde(rename = "Location")]
    pub location: &'static str,
}

/// Root handler - always returns the fixed introduction record.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: NAME,
        location: LOCATION,
    })
}

/// Echo handler - returns the captured path segment back to the caller.
///
/// Percent-decoding is done by the `Path` extractor. Anything the router
/// cannot match (empty segment, multiple segments) never reaches this
/// function.
pub async fn echo(Path(data): Path<String>) -> Json<EchoResponse> {
    Json(EchoResponse {
        hi: data,
        location: LOCATION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn root_returns_fixed_record() {
        let Json(body) = root().await;
        assert_eq!(body.name, "Smeet");
        assert_eq!(body.location, "Dehradun");
    }

    #[tokio::test]
    async fn root_serializes_with_capitalized_location_key() {
        let Json(body) = root().await;
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"name":"Smeet","Location":"Dehradun"}"#);
    }

    #[tokio::test]
    async fn echo_returns_segment_verbatim() {
        let Json(body) = echo(Path("hello".to_string())).await;
        assert_eq!(body.hi, "hello");
        assert_eq!(body.location, "Dehradun");
    }

    #[tokio::test]
    async fn echo_serializes_expected_shape() {
        let Json(body) = echo(Path("123".to_string())).await;
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"hi":"123","Location":"Dehradun"}"#);
    }

    #[tokio::test]
    async fn echo_is_idempotent() {
        let Json(first) = echo(Path("same".to_string())).await;
        let Json(second) = echo(Path("same".to_string())).await;
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
