//! Resolution request parsing and validation
//!
//! A request body is a JSON array of module references. Validation happens
//! here, before any store access: an unparseable body or a reference
//! without an identity is a client-input error, distinct from storage
//! failure.

use crate::primitives::ModuleRef;
use thiserror::Error;

/// Client-input errors.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("could not decode JSON request body: {source}")]
    Malformed {
        #[from]
        source: serde_json::Error,
    },

    #[error("one or more module references lack an identity: {body}")]
    MissingIdentity { body: String },
}

/// Parse and validate a request body.
///
/// Every reference must carry a positive id; extra fields are ignored.
pub fn parse_module_refs(body: &[u8]) -> Result<Vec<ModuleRef>, RequestError> {
    let refs: Vec<ModuleRef> = serde_json::from_slice(body)?;

    for module_ref in &refs {
        if module_ref.id <= 0 {
            return Err(RequestError::MissingIdentity {
                body: String::from_utf8_lossy(body).into_owned(),
            });
        }
    }

    Ok(refs)
}

#[cfg(test)]
mod tests {
    include!("request.test.rs");
}
