//! IRR solve endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use irr_analytics::cashflows::CashFlowSeries;

use crate::dto::{IrrRequest, IrrResponse, RESOLVE_CODE};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Solve for the IRR of a spending/income series.
///
/// Input problems are 4xx responses and root-finding failures are 500s.
/// A NaN rate is a 200 with `status = 1`. The solve itself runs on the
/// blocking thread pool.
pub async fn solve(
    State(state): State<AppState>,
    payload: Result<Json<IrrRequest>, JsonRejection>,
) -> ApiResult<Json<IrrResponse>> {
    let Json(req) = payload?;

    tracing::info!(
        periods = req.spending.len(),
        "received solve request: spending={:?} income={:?}",
        req.spending,
        req.income
    );

    if req.code != RESOLVE_CODE {
        return Err(ApiError::Rejected);
    }

    let series = CashFlowSeries::new(req.spending, req.income)?;
    if series.len() > state.max_periods {
        return Err(ApiError::Validation(format!(
            "Number of income and outcome exceeds {}.",
            state.max_periods
        )));
    }

    // Cubic in the series length; keep it off the async workers.
    let solver = state.solver;
    let outcome = tokio::task::spawn_blocking(move || solver.solve(&series))
        .await
        .map_err(|e| ApiError::CalculationFailed(format!("Solver task failed: {e}")))??;

    if outcome.is_ambiguous() {
        tracing::warn!(
            candidates = ?outcome.candidates,
            "multiple discount factors in [0, 1); using the first"
        );
    }

    Ok(Json(IrrResponse::from(&outcome)))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::config::ServerConfig;
    use crate::dto::{IrrResponse, NAN_MESSAGE};
    use crate::server::create_router;
    use crate::state::AppState;

    fn create_test_server() -> TestServer {
        TestServer::new(create_router(AppState::new())).unwrap()
    }

    #[tokio::test]
    async fn test_solve_ten_percent() {
        let server = create_test_server();

        let response = server
            .post("/solve")
            .json(&json!({"spending": [100.0, 0.0], "income": [0.0, 110.0], "code": "resolve"}))
            .await;
        response.assert_status_ok();

        let body: IrrResponse = response.json();
        assert_eq!(body.status, 0);
        assert_relative_eq!(body.irr.unwrap(), 10.0, epsilon = 1e-9);
        assert!(body.error.is_empty());
    }

    #[tokio::test]
    async fn test_solve_nan_is_soft_failure() {
        let server = create_test_server();

        let response = server
            .post("/solve")
            .json(&json!({"spending": [100.0, 0.0], "income": [0.0, 90.0], "code": "resolve"}))
            .await;
        response.assert_status_ok();

        let body: IrrResponse = response.json();
        assert_eq!(body.status, 1);
        assert_eq!(body.irr, None);
        assert_eq!(body.error, NAN_MESSAGE);
    }

    #[tokio::test]
    async fn test_wrong_code_rejected() {
        let server = create_test_server();

        let response = server
            .post("/solve")
            .json(&json!({"spending": [100.0, 0.0], "income": [0.0, 110.0], "code": "other"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: IrrResponse = response.json();
        assert_eq!(body.status, 1);
        assert_eq!(body.error, "Your request is rejected.");
    }

    #[tokio::test]
    async fn test_length_mismatch() {
        let server = create_test_server();

        let response = server
            .post("/solve")
            .json(&json!({"spending": [100.0, 0.0], "income": [110.0], "code": "resolve"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: IrrResponse = response.json();
        assert_eq!(body.error, "Number of income and outcome is not equal.");
    }

    #[tokio::test]
    async fn test_too_few_periods() {
        let server = create_test_server();

        let response = server
            .post("/solve")
            .json(&json!({"spending": [100.0], "income": [110.0], "code": "resolve"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: IrrResponse = response.json();
        assert_eq!(body.error, "Number of income and outcome is less than 2.");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let server = create_test_server();

        let response = server
            .post("/solve")
            .json(&json!({"spending": "lots", "income": [], "code": "resolve"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: IrrResponse = response.json();
        assert_eq!(body.status, 1);
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_zero_final_flow_is_server_error() {
        let server = create_test_server();

        let response = server
            .post("/solve")
            .json(&json!({"spending": [100.0, 50.0], "income": [0.0, 50.0], "code": "resolve"}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: IrrResponse = response.json();
        assert_eq!(body.status, 1);
        assert!(body.error.contains("Leading coefficient"));
    }

    #[tokio::test]
    async fn test_max_periods_enforced() {
        let config = ServerConfig {
            max_periods: 3,
            ..ServerConfig::default()
        };
        let server = TestServer::new(create_router(AppState::from_config(&config))).unwrap();

        let response = server
            .post("/solve")
            .json(&json!({
                "spending": [100.0, 0.0, 0.0, 0.0],
                "income": [0.0, 30.0, 40.0, 50.0],
                "code": "resolve"
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_single_receipt_even_horizon() {
        let server = create_test_server();

        let mut spending = vec![0.0; 13];
        let mut income = vec![0.0; 13];
        spending[0] = 100.0;
        income[12] = 100.0001;

        let response = server
            .post("/solve")
            .json(&json!({"spending": spending, "income": income, "code": "resolve"}))
            .await;
        response.assert_status_ok();

        let body: IrrResponse = response.json();
        assert_eq!(body.status, 0);
        let expected = (1.000_001f64.powf(1.0 / 12.0) - 1.0) * 100.0;
        assert_relative_eq!(body.irr.unwrap(), expected, max_relative = 1e-4);
    }

    #[tokio::test]
    async fn test_get_not_allowed() {
        let server = create_test_server();

        let response = server.get("/solve").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
