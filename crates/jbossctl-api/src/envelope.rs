// Management response envelope
//
// Every management operation answers with
// `{ "outcome": "success" | "failed", "result": ..., "failure-description": ... }`.
// `interpret` strips the envelope and classifies failures into the two
// error tiers before the caller sees anything.

use serde_json::Value;

use crate::error::Error;
use crate::transport::RawResponse;

const OUTCOME: &str = "outcome";
const RESULT: &str = "result";
const FAILURE_DESCRIPTION: &str = "failure-description";
const SUCCESS: &str = "success";

/// Classify a raw transport result, returning the `result` payload on success.
///
/// - HTTP status >= 400 with an empty body is a [`Error::Server`].
/// - A body that is not JSON, or JSON without `outcome`, is a protocol
///   violation reported as [`Error::Cli`] with the raw body in the message.
/// - `outcome != "success"` is an [`Error::Cli`] carrying the
///   server-supplied `failure-description` and the full envelope.
pub fn interpret(response: RawResponse) -> Result<Value, Error> {
    let RawResponse { status, body } = response;

    if status >= 400 && body.trim().is_empty() {
        return Err(Error::server(format!("Request responded a {status} code")));
    }

    let Ok(mut envelope) = serde_json::from_str::<Value>(&body) else {
        return Err(Error::cli(
            format!("Unknown error: {body}"),
            Value::String(body),
        ));
    };

    let outcome = match envelope.get(OUTCOME) {
        Some(Value::String(outcome)) => outcome.clone(),
        Some(other) => other.to_string(),
        None => return Err(Error::cli(format!("Unknown error: {body}"), envelope)),
    };

    if outcome != SUCCESS {
        let message = match envelope.get(FAILURE_DESCRIPTION) {
            Some(Value::String(description)) => description.clone(),
            Some(structured) => structured.to_string(),
            None => format!("outcome={outcome}"),
        };
        return Err(Error::cli(message, envelope));
    }

    Ok(envelope
        .get_mut(RESULT)
        .map(Value::take)
        .unwrap_or(Value::Null))
}
