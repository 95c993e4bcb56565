//! Wire layer: request validation, response encoding, and the request
//! pipeline that ties parsing, resolution, and encoding together.
//!
//! The pipeline mirrors a stateless service endpoint: a request body comes
//! in, and a payload plus status classification comes out. Client-input
//! errors short-circuit before the store is ever read; storage failures
//! are logged and surface as a generic message.

pub mod request;
pub mod response;

pub use request::{RequestError, parse_module_refs};
pub use response::InstallResponse;

use crate::resolve::{InstallSet, aggregate};
use crate::store::GraphSource;
use tracing::error;

/// Response encodings selectable per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Structured JSON with explicit (possibly empty) collections
    Json,
    /// Line-oriented text, one item value per CRLF-terminated line
    Text,
}

/// Classification of a served request, the non-HTTP analog of a status
/// code family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// Malformed or invalid request input; the store was never read.
    ClientError,
    /// The store failed; the cause is logged, not exposed.
    ServerError,
}

const GENERIC_SERVER_ERROR: &str = "Ups something went wrong";

/// Serve one resolution request end to end: parse the body, aggregate over
/// the store, encode the result. Always produces a payload; the status says
/// whether it carries data or an error message.
pub fn respond<S: GraphSource + ?Sized>(
    source: &S,
    body: &[u8],
    include_modules: bool,
    encoding: Encoding,
) -> (Status, String) {
    let refs = match parse_module_refs(body) {
        Ok(refs) => refs,
        Err(err) => return (Status::ClientError, encode_failure(&err.to_string(), encoding)),
    };

    let roots: Vec<i64> = refs.iter().map(|r| r.id).collect();
    let set = match aggregate(source, &roots, include_modules) {
        Ok(set) => set,
        Err(err) => {
            error!(cause = %err, "could not retrieve data from storage");
            return (Status::ServerError, encode_failure(GENERIC_SERVER_ERROR, encoding));
        }
    };

    match encode(&set, encoding) {
        Ok(payload) => (Status::Ok, payload),
        Err(err) => {
            error!(cause = %err, "could not encode response");
            (Status::ServerError, encode_failure(GENERIC_SERVER_ERROR, encoding))
        }
    }
}

/// Encode a successful aggregation result.
pub fn encode(set: &InstallSet, encoding: Encoding) -> Result<String, serde_json::Error> {
    match encoding {
        Encoding::Json => serde_json::to_string(&InstallResponse::success(set)),
        Encoding::Text => Ok(match &set.modules {
            Some(modules) => response::render_text_grouped(&set.items, modules),
            None => response::render_text(&set.items),
        }),
    }
}

/// Encode an error payload. Data collections stay present but empty.
pub fn encode_failure(message: &str, encoding: Encoding) -> String {
    match encoding {
        Encoding::Json => match serde_json::to_string(&InstallResponse::failure(message)) {
            Ok(payload) => payload,
            Err(err) => {
                error!(cause = %err, "could not encode error response");
                String::new()
            }
        },
        Encoding::Text => response::render_text_error(message),
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
