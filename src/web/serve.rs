use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request, Response},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{MakeSpan, OnRequest, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::{App, AppState};

use super::{midware, routes::routes, REQUEST_ID_HEADER};

/// The core async function returning a future that will serve this application.
///
/// Accepts an `App` (the bound `TcpListener` and the `AppState`).
///
/// Might return an IO error from `axum::serve`.
pub async fn serve(app: App) -> std::io::Result<()> {
    let App {
        app_state,
        listener,
    } = app;

    axum::serve(listener, app_router(app_state)).await
}

/// All the routes wrapped in the request-id, tracing and response mapping middleware.
pub fn app_router(app_state: AppState) -> Router {
    with_middleware(routes(app_state))
}

fn with_middleware(router: Router) -> Router {
    let x_request_id: HeaderName = HeaderName::from_static(REQUEST_ID_HEADER);

    // Outermost first. The id is propagated outside the response mapper so that
    // the error responses the mapper builds carry it too.
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                x_request_id.clone(),
                MakeRequestUuid,
            ))
            .layer(PropagateRequestIdLayer::new(x_request_id))
            .layer(build_trace_layer())
            .layer(middleware::map_response(midware::response_mapper)),
    )
}

/// Opens a `request` span per request keyed by its id and logs the outcome:
/// server errors at `error`, client errors at `warn`, everything else at `info`.
fn build_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let req_id = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|id| id.to_str().ok())
                .unwrap_or_default();

            tracing::info_span!(
                "request",
                req_id,
                method = %req.method(),
                path = req.uri().path()
            )
        })
        .on_request(|_req: &Request<Body>, _s: &Span| tracing::debug!("received"))
        .on_response(|res: &Response<Body>, latency: Duration, _s: &Span| {
            let status = res.status();
            let millis = latency.as_millis() as u64;

            if status.is_server_error() {
                tracing::error!(%status, millis, "served")
            } else if status.is_client_error() {
                tracing::warn!(%status, millis, "served")
            } else {
                tracing::info!(%status, millis, "served")
            }
        })
}
