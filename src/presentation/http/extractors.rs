// src/presentation/http/extractors.rs
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::convert::Infallible;

/// Query string extractor that never rejects. A repeated key keeps its
/// first value, and a query that still fails to deserialize yields
/// `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct LenientQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for LenientQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(error = %rejection, "unreadable query string ignored");
                Vec::new()
            }
        };
        Ok(Self(first_values(pairs)))
    }
}

fn first_values<T>(pairs: Vec<(String, String)>) -> T
where
    T: DeserializeOwned + Default,
{
    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }
    serde_json::from_value(Value::Object(fields)).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "query parameters ignored");
        T::default()
    })
}
