use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON body extractor that ignores `Content-Type`.
///
/// Only the first JSON value of the body is decoded and anything after it is
/// ignored. Object keys are matched case-insensitively against the lowercase
/// payload field names; an exact lowercase key wins over its variants. A `null` body
/// decodes to `T::default()`. Unlike `axum::Json`, a body that fails to decode
/// is answered with 400 and a plain-text reason.
pub struct NotePayload<T>(pub T);

#[derive(Debug, thiserror::Error)]
pub enum PayloadRejection {
    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("empty note payload")]
    Empty,

    #[error("malformed note payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        tracing::warn!("rejected request: {self}");
        match self {
            Self::Body(rejection) => rejection.into_response(),
            Self::Empty => (StatusCode::BAD_REQUEST, "Empty note payload").into_response(),
            Self::Malformed(e) => {
                (StatusCode::BAD_REQUEST, format!("Malformed note payload: {e}")).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for NotePayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        Ok(Self(decode_payload(&bytes)?))
    }
}

fn decode_payload<T>(bytes: &[u8]) -> Result<T, PayloadRejection>
where
    T: DeserializeOwned + Default,
{
    let value = serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Value>()
        .next()
        .ok_or(PayloadRejection::Empty)??;

    match value {
        Value::Null => Ok(T::default()),
        Value::Object(fields) => Ok(serde_json::from_value(Value::Object(fold_keys(fields)))?),
        other => Ok(serde_json::from_value(other)?),
    }
}

fn fold_keys(fields: Map<String, Value>) -> Map<String, Value> {
    let (exact, variants): (Vec<_>, Vec<_>) = fields
        .into_iter()
        .partition(|(key, _)| key.chars().all(|c| !c.is_uppercase()));

    let mut folded = Map::new();
    for (key, value) in variants {
        folded.insert(key.to_lowercase(), value);
    }
    folded.extend(exact);

    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dto::CreateNoteRequest;

    fn decode(body: &str) -> Result<CreateNoteRequest, PayloadRejection> {
        decode_payload(body.as_bytes())
    }

    #[test]
    fn keys_match_regardless_of_case() {
        let request = decode(r#"{"Title":"A","DESCRIPTION":"B"}"#).unwrap();

        assert_eq!(request.title, "A");
        assert_eq!(request.description, "B");
    }

    #[test]
    fn exact_key_wins_over_case_variant() {
        let before = decode(r#"{"TITLE":"upper","title":"exact"}"#).unwrap();
        let after = decode(r#"{"title":"exact","Title":"mixed"}"#).unwrap();

        assert_eq!(before.title, "exact");
        assert_eq!(after.title, "exact");
    }

    #[test]
    fn null_body_is_empty_note() {
        let request = decode("null").unwrap();

        assert_eq!(request.title, "");
        assert_eq!(request.description, "");
    }

    #[test]
    fn data_after_first_value_is_ignored() {
        let trailing = decode(r#"{"title":"A"} trailing"#).unwrap();
        let second_value = decode(r#"{"title":"A"}{"title":"B"}"#).unwrap();

        assert_eq!(trailing.title, "A");
        assert_eq!(second_value.title, "A");
    }

    #[test]
    fn empty_and_broken_bodies_are_rejected() {
        assert!(matches!(decode(""), Err(PayloadRejection::Empty)));
        assert!(matches!(decode("   "), Err(PayloadRejection::Empty)));
        assert!(matches!(decode("{not json"), Err(PayloadRejection::Malformed(_))));
        assert!(matches!(decode("[1]"), Err(PayloadRejection::Malformed(_))));
        assert!(matches!(decode(r#"{"Title":1}"#), Err(PayloadRejection::Malformed(_))));
    }
}
