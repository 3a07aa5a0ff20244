//! Resource client for the HBnB REST API.
//!
//! All requests go through [`ResourceClient::request`], which builds the
//! headers and classifies the response into the shared [`RequestError`]
//! taxonomy. The wire is behind [`Transport`] so pages can run against the
//! browser's fetch or an in-memory fake.

use leptos::logging::{log, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{RequestError, TransportError, VALIDATION_MESSAGE};
use crate::models::amenity::CreatedAmenity;
use crate::models::{AmenityRef, NewAmenity, NewReview, Place, Review, User};
use crate::session::bearer;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully prepared request, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ApiResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some(JSON_CONTENT_TYPE.to_string()),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct ResourceClient<T> {
    transport: T,
    api_base: String,
    places_path: String,
}

impl<T: Transport> ResourceClient<T> {
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self {
            transport,
            api_base: config.api_base.clone(),
            places_path: config.places_path.clone(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Sends one request and classifies the response.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value, RequestError> {
        let mut headers = vec![("Content-Type", JSON_CONTENT_TYPE.to_string())];
        if let Some(token) = token {
            headers.push(("Authorization", bearer(token)));
        }
        let request = ApiRequest {
            method,
            url: self.url(path),
            headers,
            body: body.map(Value::to_string),
        };
        log!("[Client] {} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|err| {
            warn!("[Client] {} {} failed: {}", method.as_str(), path, err);
            RequestError::from(err)
        })?;
        classify(response)
    }

    async fn request_as<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<R, RequestError> {
        let value = self.request(method, path, body, token).await?;
        serde_json::from_value(value)
            .map_err(|err| RequestError::format(format!("unexpected shape from {}: {}", path, err)))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, RequestError> {
        let body = to_body(&Credentials { email, password })?;
        self.request_as(Method::Post, "/auth/login", Some(&body), None)
            .await
    }

    /// All places. A `null` payload counts as an empty list.
    pub async fn places(&self, token: Option<&str>) -> Result<Vec<Place>, RequestError> {
        let places: Option<Vec<Place>> = self
            .request_as(Method::Get, &self.places_path, None, token)
            .await?;
        Ok(places.unwrap_or_default())
    }

    pub async fn place(&self, place_id: &str) -> Result<Place, RequestError> {
        let path = format!("/places/{}", urlencoding::encode(place_id));
        self.request_as(Method::Get, &path, None, None).await
    }

    pub async fn user(&self, user_id: &str, token: Option<&str>) -> Result<User, RequestError> {
        let path = format!("/users/{}", urlencoding::encode(user_id));
        self.request_as(Method::Get, &path, None, token).await
    }

    pub async fn create_review(
        &self,
        review: &NewReview,
        token: &str,
    ) -> Result<Review, RequestError> {
        let body = to_body(review)?;
        self.request_as(Method::Post, "/reviews/", Some(&body), Some(token))
            .await
    }

    pub async fn create_amenity(
        &self,
        amenity: &NewAmenity,
        token: &str,
    ) -> Result<AmenityRef, RequestError> {
        let body = to_body(amenity)?;
        let created: CreatedAmenity = self
            .request_as(Method::Post, "/amenities/", Some(&body), Some(token))
            .await?;
        Ok(created.into_inner())
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, RequestError> {
    serde_json::to_value(body).map_err(|err| RequestError::format(err.to_string()))
}

/// Maps a raw response onto the error taxonomy, or parses its JSON body.
pub fn classify(response: ApiResponse) -> Result<Value, RequestError> {
    match response.status {
        status if (200..300).contains(&status) => {
            if let Some(content_type) = response.content_type.as_deref() {
                if !is_json(content_type) {
                    return Err(RequestError::format(format!(
                        "status {} with content type {}",
                        status, content_type
                    )));
                }
            }
            if response.body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&response.body)
                .map_err(|err| RequestError::format(format!("invalid JSON body: {}", err)))
        }
        401 => Err(RequestError::Unauthorized {
            message: error_message(&response.body),
        }),
        400 => Err(RequestError::Validation(
            error_message(&response.body).unwrap_or_else(|| VALIDATION_MESSAGE.to_string()),
        )),
        status => Err(RequestError::Http { status }),
    }
}

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == JSON_CONTENT_TYPE || mime.ends_with("+json"))
}

/// `error` or `message` from a JSON error body.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(status: u16) -> ApiResponse {
        ApiResponse {
            status,
            content_type: Some("text/html; charset=utf-8".into()),
            body: "<html></html>".into(),
        }
    }

    #[test]
    fn test_success_parses_json() {
        let value = classify(ApiResponse::json(200, r#"{"id": "p1"}"#)).unwrap();
        assert_eq!(value["id"], "p1");
    }

    #[test]
    fn test_json_with_charset_is_accepted() {
        let response = ApiResponse {
            status: 201,
            content_type: Some("application/json; charset=utf-8".into()),
            body: "[]".into(),
        };
        assert_eq!(classify(response).unwrap(), Value::Array(vec![]));
    }

    #[test]
    fn test_success_with_html_is_format_error() {
        assert!(matches!(classify(html(200)), Err(RequestError::Format { .. })));
    }

    #[test]
    fn test_success_with_broken_json_is_format_error() {
        let response = ApiResponse::json(200, "{not json");
        assert!(matches!(classify(response), Err(RequestError::Format { .. })));
    }

    #[test]
    fn test_empty_success_body_is_null() {
        assert_eq!(classify(ApiResponse::json(204, "")).unwrap(), Value::Null);
    }

    #[test]
    fn test_unauthorized_keeps_server_message() {
        let err = classify(ApiResponse::json(401, r#"{"message": "Invalid credentials"}"#))
            .unwrap_err();
        assert_eq!(err, RequestError::unauthorized("Invalid credentials"));
    }

    #[test]
    fn test_unauthorized_without_body() {
        let err = classify(html(401)).unwrap_err();
        assert_eq!(err, RequestError::Unauthorized { message: None });
    }

    #[test]
    fn test_bad_request_prefers_error_field() {
        let err = classify(ApiResponse::json(
            400,
            r#"{"error": "You have already reviewed this place.", "message": "x"}"#,
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "You have already reviewed this place.");
    }

    #[test]
    fn test_bad_request_with_unparseable_body_falls_back() {
        let err = classify(html(400)).unwrap_err();
        assert_eq!(err, RequestError::Validation(VALIDATION_MESSAGE.to_string()));
    }

    #[test]
    fn test_other_status_is_http_error() {
        assert_eq!(classify(html(404)).unwrap_err(), RequestError::Http { status: 404 });
        assert_eq!(classify(html(503)).unwrap_err(), RequestError::Http { status: 503 });
    }
}
