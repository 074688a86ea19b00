use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use lambda_http::{Context, Request};
use serde_json::{json, Value};

/// An API Gateway REST proxy event for `GET {path}` carrying the given authorizer.
pub(crate) fn rest_api_request(path: &str, authorizer: Option<Value>) -> Request {
    let mut request_context = json!({
        "accountId": "123456789012",
        "resourceId": "us4z18",
        "requestId": "41b45ea3-70b5-11e6-b7bd-69b5aaebc7d9",
        "identity": {
            "sourceIp": "203.0.113.10",
            "userAgent": "Mozilla/5.0"
        },
        "resourcePath": path,
        "httpMethod": "GET",
        "apiId": "wt6mne2s9k",
        "path": path,
        "requestTime": "19/Oct/2026:18:00:00 +0000",
        "requestTimeEpoch": 1792432800000_i64,
        "protocol": "HTTP/1.1"
    });
    if let Some(authorizer) = authorizer {
        request_context["authorizer"] = authorizer;
    }

    let event = json!({
        "resource": path,
        "path": path,
        "httpMethod": "GET",
        "headers": {
            "Host": "api.gonzalo-munoz.com",
            "X-Forwarded-Proto": "https",
            "Origin": "https://gonzalo-munoz.com"
        },
        "multiValueHeaders": {
            "Host": ["api.gonzalo-munoz.com"],
            "X-Forwarded-Proto": ["https"],
            "Origin": ["https://gonzalo-munoz.com"]
        },
        "queryStringParameters": null,
        "multiValueQueryStringParameters": null,
        "pathParameters": null,
        "stageVariables": null,
        "requestContext": request_context,
        "body": null,
        "isBase64Encoded": false
    });

    lambda_http::request::from_str(&event.to_string()).unwrap()
}

pub(crate) fn with_invocation_id(mut request: Request, id: &str) -> Request {
    let mut context = Context::default();
    context.request_id = id.to_string();
    request.extensions_mut().insert(context);
    request
}

/// Splits a handler response into status, headers and parsed JSON body.
pub(crate) async fn read_json(response: Response) -> (StatusCode, HeaderMap, Value) {
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (parts.status, parts.headers, body)
}
