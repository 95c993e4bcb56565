//! Response shapes and renderings
//!
//! Two encodings: a structured JSON body whose collections are always
//! explicit arrays (never null), and a line-oriented text body using the
//! CRLF terminator RFC 2046 prescribes for text/plain.

use crate::primitives::{Item, Module};
use crate::resolve::InstallSet;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Structured response body. `items` and `modules` serialize as explicit
/// empty arrays when no data is present; `error` is null on success, and
/// a populated `error` always comes with empty collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallResponse {
    pub items: Vec<Item>,
    pub modules: Vec<Module>,
    pub error: Option<String>,
}

impl InstallResponse {
    pub fn success(set: &InstallSet) -> Self {
        Self {
            items: set.items.clone(),
            modules: set.modules.clone().unwrap_or_default(),
            error: None,
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            items: Vec::new(),
            modules: Vec::new(),
            error: Some(message.to_string()),
        }
    }
}

// RFC 2046: the canonical line break of text/plain is CRLF.
const CRLF: &str = "\r\n";

fn separator() -> String {
    format!("{}{CRLF}", "-".repeat(20))
}

/// One line per item, each line the item's value.
pub fn render_text(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = write!(out, "{}{CRLF}", item.value);
    }
    out
}

/// Labeled, separator-wrapped groups: items by value, then modules by id.
pub fn render_text_grouped(items: &[Item], modules: &[Module]) -> String {
    let sep = separator();
    let mut out = String::new();

    let _ = write!(out, "items{CRLF}{sep}");
    for item in items {
        let _ = write!(out, "{}{CRLF}", item.value);
    }
    let _ = write!(out, "{sep}");

    let _ = write!(out, "modules{CRLF}{sep}");
    for module in modules {
        let _ = write!(out, "{}{CRLF}", module.id);
    }
    let _ = write!(out, "{sep}");

    out
}

/// A single error line.
pub fn render_text_error(message: &str) -> String {
    format!("{message}{CRLF}")
}

#[cfg(test)]
mod tests {
    include!("response.test.rs");
}
