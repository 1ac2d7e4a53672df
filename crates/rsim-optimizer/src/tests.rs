//! Unit and integration tests for rsim-optimizer.

use std::net::TcpListener;

use rsim_core::Waypoint;

use crate::sample::{sample_request, sample_stops};
use crate::{
    HttpOptimizer, OptimizeRequest, OptimizeResponse, Optimizer, OptimizerConfig,
    OptimizerError, OptimizerResult, PassthroughOptimizer,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SUCCESS_BODY: &str = r#"{
    "status": "success",
    "route": [
        {"stop_lat": 12.9716, "stop_lon": 77.5946, "stop_name": "Start Point"},
        {"stop_lat": 12.9861, "stop_lon": 77.6070, "stop_name": "Intermediate Stop 2"},
        {"stop_lat": 12.9789, "stop_lon": 77.6008, "stop_name": "Intermediate Stop 1"},
        {"stop_lat": 12.9933, "stop_lon": 77.6132, "stop_name": "End Point"}
    ],
    "path_coordinates": [[12.9716, 77.5946], [12.9750, 77.5990], [12.9933, 77.6132]],
    "total_distance": 4821
}"#;

fn client(base_url: &str) -> HttpOptimizer {
    let config = OptimizerConfig { base_url: base_url.into(), timeout_secs: 5 };
    HttpOptimizer::new(&config).unwrap()
}

/// A loopback port with nothing listening on it.
fn dead_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod wire {
    use super::*;

    #[test]
    fn request_uses_stop_field_names() {
        let json = serde_json::to_value(sample_request()).unwrap();
        let first = &json["locations"][0];
        assert_eq!(first["stop_lat"], 12.9716);
        assert_eq!(first["stop_lon"], 77.5946);
        assert_eq!(first["stop_name"], "Start Point");
    }

    #[test]
    fn response_decodes_with_integer_distance() {
        let resp: OptimizeResponse = serde_json::from_str(SUCCESS_BODY).unwrap();
        assert_eq!(resp.status.as_deref(), Some("success"));
        assert_eq!(resp.route.len(), 4);
        assert_eq!(resp.route[1].name, "Intermediate Stop 2");
        assert_eq!(resp.path_coordinates.len(), 3);
        assert_eq!(resp.path_coordinates[1].lat, 12.9750);
        assert_eq!(resp.path_coordinates[1].lon, 77.5990);
        assert_eq!(resp.total_distance, Some(4821.0));
    }

    #[test]
    fn missing_path_coordinates_means_empty() {
        let body = r#"{"route": [{"stop_lat": 1.0, "stop_lon": 2.0, "stop_name": "A"}]}"#;
        let resp: OptimizeResponse = serde_json::from_str(body).unwrap();
        assert!(resp.path_coordinates.is_empty());
        assert!(resp.status.is_none());
        assert!(resp.total_distance.is_none());
    }
}

// ── Request validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn sample_request_is_valid() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn single_location_rejected() {
        let req = OptimizeRequest::new(vec![Waypoint::new(12.97, 77.59, "Only")]);
        match req.validate() {
            Err(OptimizerError::InvalidRequest(msg)) => {
                assert_eq!(msg, "At least 2 locations are required");
            }
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[test]
    fn blank_name_rejected() {
        let mut stops = sample_stops();
        stops[2].name = "   ".into();
        let err = OptimizeRequest::new(stops).validate().unwrap_err();
        assert!(matches!(err, OptimizerError::InvalidRequest(ref m) if m.contains("location 3")));
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let mut stops = sample_stops();
        stops[0].lat = 123.0;
        assert!(matches!(
            OptimizeRequest::new(stops).validate(),
            Err(OptimizerError::InvalidRequest(_))
        ));
    }

    #[test]
    fn nan_coordinates_rejected() {
        let mut stops = sample_stops();
        stops[1].lon = f64::NAN;
        assert!(OptimizeRequest::new(stops).validate().is_err());
    }
}

// ── PassthroughOptimizer ──────────────────────────────────────────────────────

#[cfg(test)]
mod passthrough {
    use super::*;

    #[test]
    fn keeps_order_and_connects_stops() {
        let resp = PassthroughOptimizer.optimize(&sample_request()).unwrap();
        assert_eq!(resp.route, sample_stops());
        assert_eq!(resp.path_coordinates.len(), 4);
        assert_eq!(resp.path_coordinates[3], sample_stops()[3].point());
    }

    #[test]
    fn total_distance_is_sum_of_legs_in_metres() {
        let stops = sample_stops();
        let expected_km: f64 = stops
            .windows(2)
            .map(|w| w[0].point().distance_km(w[1].point()))
            .sum();
        let resp = PassthroughOptimizer.optimize(&sample_request()).unwrap();
        let total = resp.total_distance.unwrap();
        assert!((total - expected_km * 1000.0).abs() < 1e-6);
        // Roughly 3.3 km along the diagonal.
        assert!(total > 3_000.0 && total < 3_600.0, "total = {total}");
    }

    #[test]
    fn validates_like_the_service() {
        let req = OptimizeRequest::new(vec![]);
        assert!(matches!(
            PassthroughOptimizer.optimize(&req),
            Err(OptimizerError::InvalidRequest(_))
        ));
    }
}

// ── HttpOptimizer ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod http {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    /// Mount a single expected `POST /api/optimize` answered with `response`.
    async fn optimizer_server(response: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/optimize"))
            .and(header("content-type", "application/json"))
            .respond_with(response)
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    /// The client blocks, so it is built, used and dropped off the runtime.
    async fn optimize_blocking(
        base_url: String,
        request: OptimizeRequest,
    ) -> OptimizerResult<OptimizeResponse> {
        tokio::task::spawn_blocking(move || client(&base_url).optimize(&request))
            .await
            .expect("blocking task panicked")
    }

    #[test]
    fn endpoint_joins_base_url() {
        let config = OptimizerConfig::with_base_url("http://example.test:5000/");
        assert_eq!(config.endpoint(), "http://example.test:5000/api/optimize");
        assert_eq!(OptimizerConfig::default().endpoint(), "http://localhost:5000/api/optimize");
    }

    #[test]
    fn config_partial_json_uses_defaults() {
        let config: OptimizerConfig =
            serde_json::from_str(r#"{"base_url": "http://10.0.0.2:8080"}"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.timeout_secs, crate::http::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_load_missing_file_is_io_error() {
        let err = OptimizerConfig::load(std::path::Path::new("/nonexistent/optimizer.json")).unwrap_err();
        assert!(matches!(err, rsim_core::CoreError::Io(_)));
    }

    #[tokio::test]
    async fn success_returns_route_and_geometry() {
        let server =
            optimizer_server(ResponseTemplate::new(200).set_body_raw(SUCCESS_BODY, "application/json")).await;

        let resp = optimize_blocking(server.uri(), sample_request()).await.unwrap();
        assert_eq!(resp.route.len(), 4);
        assert_eq!(resp.route[0].name, "Start Point");
        assert_eq!(resp.route[3].name, "End Point");
        assert_eq!(resp.path_coordinates.len(), 3);

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["locations"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["locations"][1]["stop_name"], "Intermediate Stop 1");
        assert_eq!(body["locations"][1]["stop_lat"], 12.9789);
    }

    #[tokio::test]
    async fn rejection_surfaces_service_message() {
        let server = optimizer_server(
            ResponseTemplate::new(500).set_body_json(json!({"status": "error", "message": "No solution found"})),
        )
        .await;

        let err = optimize_blocking(server.uri(), sample_request()).await.unwrap_err();
        match err {
            OptimizerError::Rejected { status, ref message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "No solution found");
            }
            ref other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(err.to_string(), "No solution found");
    }

    #[tokio::test]
    async fn rejection_without_message_uses_fallback() {
        let server = optimizer_server(ResponseTemplate::new(400).set_body_json(json!({}))).await;
        let err = optimize_blocking(server.uri(), sample_request()).await.unwrap_err();
        assert!(matches!(err, OptimizerError::Rejected { status: 400, .. }));
        assert_eq!(err.to_string(), "Failed to optimize route");
    }

    #[tokio::test]
    async fn rejection_with_non_json_body_uses_fallback() {
        let server =
            optimizer_server(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>")).await;
        let err = optimize_blocking(server.uri(), sample_request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to optimize route");
    }

    #[tokio::test]
    async fn malformed_success_body_is_decode_error() {
        let server =
            optimizer_server(ResponseTemplate::new(200).set_body_json(json!({"route": "not a list"}))).await;
        let err = optimize_blocking(server.uri(), sample_request()).await.unwrap_err();
        assert!(matches!(err, OptimizerError::Decode(_)));
    }

    #[tokio::test]
    async fn invalid_request_never_hits_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let req = OptimizeRequest::new(vec![Waypoint::new(12.97, 77.59, "Only")]);
        let err = optimize_blocking(server.uri(), req).await.unwrap_err();
        assert!(matches!(err, OptimizerError::InvalidRequest(_)));
    }

    #[test]
    fn unreachable_service_is_distinct_from_rejection() {
        let err = client(&dead_port_url()).optimize(&sample_request()).unwrap_err();
        assert!(matches!(err, OptimizerError::Unreachable(_)));
        assert!(err.to_string().starts_with("Failed to connect to server: "));
    }
}
