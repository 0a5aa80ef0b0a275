use crate::prelude::{eprintln, *};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use numclass_core::classify::{classify, parse_number};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "NUMCLASS_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

/// Shared per-server state: one reqwest client reused across requests.
pub struct ApiState {
    pub client: reqwest::Client,
    pub facts_api: String,
}

pub fn router(state: Arc<ApiState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/classify-number", get(classify_number))
        .layer(cors)
        .with_state(state)
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let state = Arc::new(ApiState {
        client: reqwest::Client::new(),
        facts_api: global.facts_api.clone(),
    });

    if global.verbose {
        eprintln!("Classification API listening on http://{addr}");
        eprintln!("Endpoint: http://{addr}/api/classify-number?number=<value>");
        eprintln!("Facts API: {}", global.facts_api);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// GET /api/classify-number?number=<text>
///
/// Missing and empty `number` values collapse to the same empty raw string,
/// so both produce the same 400 body. The fact lookup runs inside this
/// request's task only and can never turn a classifiable input into an
/// error response.
async fn classify_number(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let raw = params.get("number").map(String::as_str).unwrap_or("");

    let n = match parse_number(raw) {
        Ok(n) => n,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::to_value(err).unwrap_or(serde_json::Value::Null)),
            );
        }
    };

    let fun_fact = crate::facts::fun_fact(&state.client, &state.facts_api, n).await;
    let result = classify(n, fun_fact);

    (
        StatusCode::OK,
        Json(serde_json::to_value(result).unwrap_or(serde_json::Value::Null)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use httpmock::prelude::*;
    use tower::ServiceExt; // for oneshot

    fn test_router(facts_api: &str) -> Router {
        router(Arc::new(ApiState {
            client: reqwest::Client::new(),
            facts_api: facts_api.to_string(),
        }))
    }

    async fn get_json(
        app: Router,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_missing_parameter_is_bad_request() {
        let app = test_router("http://127.0.0.1:1");
        let (status, body) = get_json(app, "/api/classify-number").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"number": "", "error": true}));
    }

    #[tokio::test]
    async fn test_unparsable_parameter_echoes_raw_text() {
        let app = test_router("http://127.0.0.1:1");
        let (status, body) = get_json(app, "/api/classify-number?number=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"number": "abc", "error": true}));
    }

    #[tokio::test]
    async fn test_empty_parameter_matches_missing() {
        let app = test_router("http://127.0.0.1:1");
        let (status, body) = get_json(app, "/api/classify-number?number=").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"number": "", "error": true}));
    }

    #[tokio::test]
    async fn test_classifies_perfect_number() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/28");
            then.status(200).body("28 is a perfect number.");
        });

        let app = test_router(&server.base_url());
        let (status, body) = get_json(app, "/api/classify-number?number=28").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_prime"], false);
        assert_eq!(body["is_perfect"], true);
        assert_eq!(body["properties"], serde_json::json!(["even"]));
        assert_eq!(body["digit_sum"], 10);
        assert_eq!(body["fun_fact"], "28 is a perfect number.");
    }

    #[tokio::test]
    async fn test_classifies_armstrong_number_property_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/153");
            then.status(200).body("153 is narcissistic.");
        });

        let app = test_router(&server.base_url());
        let (status, body) = get_json(app, "/api/classify-number?number=153").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_prime"], false);
        assert_eq!(body["properties"], serde_json::json!(["odd", "armstrong"]));
        assert_eq!(body["digit_sum"], 9);
    }

    #[tokio::test]
    async fn test_fact_failure_still_classifies() {
        let app = test_router("http://127.0.0.1:1");
        let (status, body) = get_json(app, "/api/classify-number?number=7").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_prime"], true);
        assert_eq!(body["fun_fact"], "Could not fetch fact for 7");
    }

    #[tokio::test]
    async fn test_negative_fractional_input() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/-3.5");
            then.status(200).body("negative trivia");
        });

        let app = test_router(&server.base_url());
        let (status, body) = get_json(app, "/api/classify-number?number=-3.5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["number"], -3.5);
        // Truncates to -3: odd, not prime, not perfect, magnitude digits.
        assert_eq!(body["is_prime"], false);
        assert_eq!(body["is_perfect"], false);
        assert_eq!(body["properties"], serde_json::json!(["odd"]));
        assert_eq!(body["digit_sum"], 3);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_idempotent() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/496");
            then.status(200).body("496 is perfect.");
        });

        let first = get_json(
            test_router(&server.base_url()),
            "/api/classify-number?number=496",
        )
        .await;
        let second = get_json(
            test_router(&server.base_url()),
            "/api/classify-number?number=496",
        )
        .await;

        assert_eq!(first, second);
    }
}
