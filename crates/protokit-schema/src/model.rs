//! Template-ready model of the target schema file.
//!
//! Every name appears in up to three spellings: `original_name` as declared,
//! `name` (lower-camel) and `name_title` (title-case).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::http::HttpVerb;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtoModel {
    /// Output package name.
    pub package: String,
    pub import_path: String,
    pub proto_package: String,
    /// Schema file the model was built from.
    pub source_file: String,
    /// Plugin parameters, e.g. `appName`.
    pub parameters: BTreeMap<String, String>,
    pub services: Vec<ServiceModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceModel {
    pub original_name: String,
    pub name: String,
    pub name_title: String,
    pub methods: Vec<MethodModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodModel {
    pub original_name: String,
    pub name: String,
    pub name_title: String,
    pub request: MessageModel,
    pub response: MessageModel,
    pub client_streaming: bool,
    pub server_streaming: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageModel {
    pub name: String,
    pub name_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpModel {
    pub method: HttpVerb,
    pub url: String,
    /// `body` selector of the rule; empty when unset.
    #[serde(default)]
    pub body: String,
    pub vars: Vec<String>,
    pub vars_title: Vec<String>,
}

impl ProtoModel {
    pub fn method_count(&self) -> usize {
        self.services.iter().map(|s| s.methods.len()).sum()
    }

    pub fn http_method_count(&self) -> usize {
        self.services
            .iter()
            .flat_map(|s| &s.methods)
            .filter(|m| m.http.is_some())
            .count()
    }
}
