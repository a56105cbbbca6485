use bytes::Bytes;
use http_body_util::Full;
use hyper::{
    header::{self, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
    http::HeaderValue,
    Method, Request, Response, StatusCode,
};
use log::error;
use serde::Serialize;
use serde_json::json;
use std::{collections::HashMap, convert::Infallible};

use super::AppState;

mod balances;
mod prices;
mod swap;

pub type ApiResponse = Result<Response<Full<Bytes>>, Infallible>;

pub async fn route<B>(req: Request<B>, state: AppState) -> ApiResponse {
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/api/v1/prices") => prices::handle_get_prices(state).await,
        (&Method::GET, "/api/v1/currencies") => prices::handle_get_currencies(state).await,
        (&Method::GET, "/api/v1/rate") => prices::handle_get_rate(req, state).await,
        (&Method::GET, "/api/v1/balances") => balances::handle_get_balances(state).await,
        (&Method::GET, "/api/v1/swap") => swap::handle_get_swap(req, state).await,
        _ => Ok(error_response(StatusCode::NOT_FOUND, "Not Found")),
    }
}

pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = serde_json::to_string(body).unwrap_or_else(|e| {
        error!("Error serializing response: {}", e);
        "null".to_string()
    });
    let mut response = Response::new(Full::new(Bytes::from(json)));

    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));

    response
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let res = json!({
        "code": -1,
        "message": message,
    });

    json_response(status, &res)
}

pub(crate) fn query_params<B>(req: &Request<B>) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use super::test_utils::{get, state_with};
    use super::*;

    #[tokio::test]
    async fn test_unknown_path() {
        let (status, body) = get("/api/v1/nope", state_with(&[])).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], -1);
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/prices")
            .body(())
            .unwrap();
        let response = route(req, state_with(&[])).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_query_params_decoding() {
        let req = Request::builder()
            .uri("/api/v1/swap?from=USD&to=b%4EEO&amount=1.5")
            .body(())
            .unwrap();
        let params = query_params(&req);

        assert_eq!(params.get("from").map(String::as_str), Some("USD"));
        assert_eq!(params.get("to").map(String::as_str), Some("bNEO"));
        assert_eq!(params.get("amount").map(String::as_str), Some("1.5"));
    }

    #[test]
    fn test_json_response_headers() {
        let response = json_response(StatusCode::OK, &json!({"ok": true}));

        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
