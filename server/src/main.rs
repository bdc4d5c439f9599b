// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::env;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use server::SolveError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments to get the port number
    let args: Vec<String> = env::args().collect();
    let port: u16 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3000);

    let app = axum::Router::new()
        .fallback(axum::routing::get(|| async {
            "No route! Use /health or /solve."
        }))
        .route("/health", axum::routing::get(healthy))
        .route("/solve", axum::routing::post(solve))
        .layer(DefaultBodyLimit::disable());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("cannot bind port {}", port))?;
    tracing::info!(
        "Server running on port {} (http://localhost:{}/health)",
        port,
        port
    );
    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}

pub async fn healthy() -> &'static str {
    tracing::info!("Healthy");
    "Healthy"
}

type ErrorResponse = (StatusCode, axum::response::Json<serde_json::Value>);

fn error_response(status: StatusCode, message: String) -> ErrorResponse {
    tracing::error!(%status, "{}", message);
    (
        status,
        axum::response::Json(serde_json::json!({ "error": message })),
    )
}

pub async fn solve(
    axum::extract::Json(input_data): axum::extract::Json<serde_json::Value>,
) -> Result<axum::response::Json<serde_json::Value>, ErrorResponse> {
    tracing::info!("-------------------- New Request --------------------");
    // the search is sequential and blocking, every request gets its own oracle
    let result = tokio::task::spawn_blocking(move || server::solve_instance(input_data))
        .await
        .map_err(|error| error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string()))?;
    match result {
        Ok(output) => Ok(axum::response::Json(output)),
        Err(error @ SolveError::Model(_)) => Err(error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            error.to_string(),
        )),
        Err(error @ SolveError::Search(_)) => Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            error.to_string(),
        )),
    }
}
