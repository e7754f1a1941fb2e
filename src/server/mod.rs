use std::any::Any;

use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql::parser::parse_query;
use async_graphql::parser::types::OperationType;
use async_graphql::{EmptySubscription, Request, Schema, ServerError};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::store::Store;

mod loaders;
mod schema;

use schema::{MutationRoot, QueryRoot};

pub const GRAPHQL_PATH: &str = "/graphql";

pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Store) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn execute(schema: &LibrarySchema, req: Request) -> GraphQLResponse {
    tracing::debug!(operation = ?req.operation_name, "executing request");

    let res = schema.execute(req).await;
    if res.is_err() {
        tracing::debug!(errors = res.errors.len(), "request finished with errors");
    }
    res.into()
}

#[axum::debug_handler]
async fn graphql_handler(
    State(schema): State<LibrarySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    execute(&schema, req.into_inner()).await
}

/// GET serves the console to browsers and to requests without a `query`
/// parameter; anything else runs as a read-only operation.
#[axum::debug_handler]
async fn graphql_get(
    State(schema): State<LibrarySchema>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return graphiql().await.into_response();
    };
    if accepts_html(&headers) {
        return graphiql().await.into_response();
    }

    let req = match parse_query_string(&raw) {
        Ok(req) => req,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    };
    if is_mutation(&req) {
        let mut res = error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Can only perform a mutation operation from a POST request.",
        );
        res.headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("POST"));
        return res;
    }

    execute(&schema, req).await.into_response()
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Whether the operation selected by `req` is a mutation. Documents that do
/// not parse are left for the executor to report.
fn is_mutation(req: &Request) -> bool {
    let Ok(doc) = parse_query(&req.query) else {
        return false;
    };
    doc.operations.iter().any(|(name, op)| {
        let selected = match req.operation_name.as_deref() {
            Some(wanted) => name.is_some_and(|name| name.as_str() == wanted),
            None => true,
        };
        selected && op.node.ty == OperationType::Mutation
    })
}

/// A GraphQL error body with a single message and the given status.
fn error_response(status: StatusCode, message: &str) -> Response {
    let body = async_graphql::Response::from_errors(vec![ServerError::new(message, None)]);
    let mut res = GraphQLResponse::from(body).into_response();
    *res.status_mut() = status;
    res
}

/// Turns a panic during request handling into a GraphQL error body, so the
/// caller sees the same response shape as for any other failure.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(%details, "request handler panicked");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// Request tracing and panic containment shared by every route.
pub fn with_http_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

pub fn make_app(store: Store) -> Router {
    let schema = build_schema(store);

    let router = Router::new().route(GRAPHQL_PATH, get(graphql_get).post(graphql_handler));
    with_http_layers(router).with_state(schema)
}
