//! Request body extraction shared by the write endpoints.
//!
//! Clients post either JSON or HTML-form bodies; [`JsonOrForm`] picks the
//! extractor from the `Content-Type` header so handlers see one typed value.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body extracted from either `application/json` or a urlencoded form.
///
/// Malformed bodies are rejected by the configured `JsonConfig` or
/// `FormConfig` error handler.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<T> JsonOrForm<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonOrForm<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type().eq_ignore_ascii_case(FORM_CONTENT_TYPE) {
            let form = web::Form::<T>::from_request(req, payload);
            Box::pin(async move { form.await.map(|body| Self(body.into_inner())) })
        } else {
            let json = web::Json::<T>::from_request(req, payload);
            Box::pin(async move { json.await.map(|body| Self(body.into_inner())) })
        }
    }
}

/// Numeric field accepted as a JSON number or as text (forms carry text).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    /// Raw text for domain parsing.
    pub fn into_raw(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}
