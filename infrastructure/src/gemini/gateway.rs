//! [`AnswerGateway`] backed by the Gemini `generateContent` endpoint

use super::error::GeminiError;
use super::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use bfhl_application::{AnswerError, AnswerGateway};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Connection settings for [`GeminiAnswerGateway`].
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Without trailing slash, e.g. `https://generativelanguage.googleapis.com`.
    pub base_url: String,
    pub model: String,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Answer gateway calling Gemini over HTTPS.
///
/// One `reqwest::Client` is shared by all requests. Each call carries its
/// own timeout; there are no retries.
pub struct GeminiAnswerGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiAnswerGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bfhl-service/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    /// `{base_url}/v1beta/models/{model}:generateContent`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl AnswerGateway for GeminiAnswerGateway {
    async fn ask(&self, prompt: &str, timeout: Duration) -> Result<String, AnswerError> {
        debug!(model = %self.config.model, "Calling generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .timeout(timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.summary())
                .unwrap_or_default();
            return Err(AnswerError::Upstream(if detail.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                format!("HTTP {}: {}", status.as_u16(), detail)
            }));
        }

        let reply: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| AnswerError::Upstream(format!("invalid response body: {}", e)))?;
        Ok(reply.text())
    }
}

/// Map a transport failure onto the port's closed error set.
fn classify(error: reqwest::Error) -> AnswerError {
    if error.is_timeout() {
        AnswerError::Timeout
    } else if error.is_connect() {
        AnswerError::Unreachable(error.to_string())
    } else if error.is_decode() || error.is_body() || error.is_status() {
        AnswerError::Upstream(error.to_string())
    } else if error.is_request() {
        AnswerError::Unreachable(error.to_string())
    } else {
        AnswerError::Upstream(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    const BUDGET: Duration = Duration::from_secs(5);

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }

    fn gateway(base_url: String) -> GeminiAnswerGateway {
        GeminiAnswerGateway::new(GeminiConfig {
            api_key: "test-key".to_string(),
            base_url,
            model: "gemini-test".to_string(),
        })
        .unwrap()
    }

    async fn answer(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "error": {"code": 403, "message": "bad key", "status": "PERMISSION_DENIED"}
                })),
            );
        }
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or("");
        let reply = if prompt.contains("France") { "Paris." } else { "" };
        (
            StatusCode::OK,
            Json(json!({"candidates": [{"content": {"parts": [{"text": reply}]}}]})),
        )
    }

    #[test]
    fn test_endpoint() {
        let gateway = gateway("https://generativelanguage.googleapis.com".to_string());
        assert_eq!(
            gateway.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig {
            api_key: "test-key".to_string(),
            base_url: "http://localhost".to_string(),
            model: "gemini-test".to_string(),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("test-key"));
        assert!(debug.contains("gemini-test"));
    }

    #[tokio::test]
    async fn test_successful_reply() {
        let base = serve(Router::new().route("/v1beta/models/{call}", post(answer))).await;
        let reply = gateway(base)
            .ask("What is the capital of France?", BUDGET)
            .await
            .unwrap();
        assert_eq!(reply, "Paris.");
    }

    #[tokio::test]
    async fn test_reply_without_text_is_empty() {
        let base = serve(Router::new().route("/v1beta/models/{call}", post(answer))).await;
        let reply = gateway(base).ask("Why?", BUDGET).await.unwrap();
        assert_eq!(reply, "");
    }

    #[tokio::test]
    async fn test_error_status_is_upstream() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": {"code": 500, "message": "backend exploded"}})),
                )
            }),
        );
        let base = serve(router).await;
        match gateway(base).ask("Why?", BUDGET).await {
            Err(AnswerError::Upstream(detail)) => {
                assert!(detail.contains("500"));
                assert!(detail.contains("backend exploded"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejected_key_is_upstream() {
        let base = serve(Router::new().route("/v1beta/models/{call}", post(answer))).await;
        let gateway = GeminiAnswerGateway::new(GeminiConfig {
            api_key: "wrong".to_string(),
            base_url: base,
            model: "gemini-test".to_string(),
        })
        .unwrap();
        assert_eq!(
            gateway.ask("Why?", BUDGET).await,
            Err(AnswerError::Upstream(
                "HTTP 403: PERMISSION_DENIED: bad key".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_undecodable_body_is_upstream() {
        let router = Router::new().route("/v1beta/models/{call}", post(|| async { "not json" }));
        let base = serve(router).await;
        assert!(matches!(
            gateway(base).ask("Why?", BUDGET).await,
            Err(AnswerError::Upstream(_))
        ));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                "late"
            }),
        );
        let base = serve(router).await;
        assert_eq!(
            gateway(base).ask("Why?", Duration::from_millis(100)).await,
            Err(AnswerError::Timeout)
        );
    }

    #[tokio::test]
    async fn test_refused_connection_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert!(matches!(
            gateway(format!("http://{addr}")).ask("Why?", BUDGET).await,
            Err(AnswerError::Unreachable(_))
        ));
    }
}
