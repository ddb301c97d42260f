//! `google.api.http` annotation resolution.
//!
//! A method's options are kept encoded in the request (see [`crate::wire`]);
//! this module decodes just the HTTP-rule extension out of them and maps the
//! rule's pattern onto [`HttpBinding`].

use prost::Message as _;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::wire::{http_rule_wire::Pattern, MethodOptionsWire};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The REST binding of a method: one verb and its raw URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBinding {
    Get(String),
    Post(String),
    Put(String),
    Patch(String),
    Delete(String),
}

impl HttpBinding {
    pub fn verb(&self) -> HttpVerb {
        match self {
            HttpBinding::Get(_) => HttpVerb::Get,
            HttpBinding::Post(_) => HttpVerb::Post,
            HttpBinding::Put(_) => HttpVerb::Put,
            HttpBinding::Patch(_) => HttpVerb::Patch,
            HttpBinding::Delete(_) => HttpVerb::Delete,
        }
    }

    pub fn url_template(&self) -> &str {
        match self {
            HttpBinding::Get(url)
            | HttpBinding::Post(url)
            | HttpBinding::Put(url)
            | HttpBinding::Patch(url)
            | HttpBinding::Delete(url) => url,
        }
    }
}

/// A resolved binding plus the rule's `body` selector (empty when unset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHttpRule {
    pub binding: HttpBinding,
    pub body: String,
}

/// Resolve the HTTP binding carried by a method's encoded options.
///
/// - no options, empty options, or options without the extension → `Ok(None)`
/// - extension with a `get`/`post`/`put`/`patch`/`delete` pattern → the binding
/// - extension with an unset or `custom` pattern → [`SchemaError::UnsupportedHttpVerb`]
/// - undecodable options or extension → [`SchemaError::MalformedHttpOptions`]
pub fn resolve_http_binding(
    method: &str,
    options: Option<&[u8]>,
) -> Result<Option<ResolvedHttpRule>> {
    let Some(bytes) = options.filter(|b| !b.is_empty()) else {
        return Ok(None);
    };

    let decoded =
        MethodOptionsWire::decode(bytes).map_err(|e| SchemaError::MalformedHttpOptions {
            method: method.to_string(),
            reason: e.to_string(),
        })?;
    let Some(rule) = decoded.http else {
        tracing::debug!(method, "options present without google.api.http");
        return Ok(None);
    };

    let binding = match rule.pattern {
        Some(Pattern::Get(url)) => HttpBinding::Get(url),
        Some(Pattern::Post(url)) => HttpBinding::Post(url),
        Some(Pattern::Put(url)) => HttpBinding::Put(url),
        Some(Pattern::Patch(url)) => HttpBinding::Patch(url),
        Some(Pattern::Delete(url)) => HttpBinding::Delete(url),
        Some(Pattern::Custom(custom)) => {
            return Err(SchemaError::UnsupportedHttpVerb {
                method: method.to_string(),
                found: format!("custom verb {:?}", custom.kind),
            })
        }
        None => {
            return Err(SchemaError::UnsupportedHttpVerb {
                method: method.to_string(),
                found: "no pattern".to_string(),
            })
        }
    };

    Ok(Some(ResolvedHttpRule {
        binding,
        body: rule.body,
    }))
}
