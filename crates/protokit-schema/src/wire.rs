//! Minimal protobuf mirrors of the plugin protocol messages.
//!
//! `prost-types` drops extension fields when it decodes
//! `google.protobuf.MethodOptions`, so the descriptor chain is mirrored here
//! with method options kept as raw bytes. The `google.api.http` extension is
//! decoded from those bytes separately (see [`crate::http`]), which lets a
//! malformed annotation be reported per method instead of failing the whole
//! request decode.
//!
//! Only the fields the model needs are declared; everything else is skipped
//! by prost as unknown.

/// Field number of the `google.api.http` extension on `MethodOptions`.
pub const HTTP_RULE_EXTENSION: u32 = 72_295_728;

/// `google.protobuf.compiler.CodeGeneratorRequest`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CodeGeneratorRequestWire {
    #[prost(string, repeated, tag = "1")]
    pub file_to_generate: Vec<String>,
    #[prost(string, optional, tag = "2")]
    pub parameter: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub compiler_version: Option<VersionWire>,
    #[prost(message, repeated, tag = "15")]
    pub proto_file: Vec<FileDescriptorWire>,
}

/// `google.protobuf.compiler.Version`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VersionWire {
    #[prost(int32, optional, tag = "1")]
    pub major: Option<i32>,
    #[prost(int32, optional, tag = "2")]
    pub minor: Option<i32>,
    #[prost(int32, optional, tag = "3")]
    pub patch: Option<i32>,
    #[prost(string, optional, tag = "4")]
    pub suffix: Option<String>,
}

/// `google.protobuf.FileDescriptorProto`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorWire {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,
    #[prost(string, repeated, tag = "3")]
    pub dependency: Vec<String>,
    #[prost(message, repeated, tag = "4")]
    pub message_type: Vec<DescriptorWire>,
    #[prost(message, repeated, tag = "6")]
    pub service: Vec<ServiceDescriptorWire>,
    #[prost(message, optional, tag = "8")]
    pub options: Option<FileOptionsWire>,
    #[prost(string, optional, tag = "12")]
    pub syntax: Option<String>,
}

/// `google.protobuf.FileOptions` (only `go_package`).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileOptionsWire {
    #[prost(string, optional, tag = "11")]
    pub go_package: Option<String>,
}

/// `google.protobuf.DescriptorProto` (names only, for type lookup).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescriptorWire {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "3")]
    pub nested_type: Vec<DescriptorWire>,
}

/// `google.protobuf.ServiceDescriptorProto`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceDescriptorWire {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(message, repeated, tag = "2")]
    pub method: Vec<MethodDescriptorWire>,
}

/// `google.protobuf.MethodDescriptorProto`, with `options` left encoded.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodDescriptorWire {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub input_type: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub output_type: Option<String>,
    #[prost(bytes = "vec", optional, tag = "4")]
    pub options: Option<Vec<u8>>,
    #[prost(bool, optional, tag = "5")]
    pub client_streaming: Option<bool>,
    #[prost(bool, optional, tag = "6")]
    pub server_streaming: Option<bool>,
}

/// `google.protobuf.MethodOptions`, reduced to the HTTP-rule extension.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodOptionsWire {
    #[prost(message, optional, tag = "72295728")]
    pub http: Option<HttpRuleWire>,
}

/// `google.api.HttpRule` (additional bindings are not read).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpRuleWire {
    #[prost(string, tag = "1")]
    pub selector: String,
    #[prost(oneof = "http_rule_wire::Pattern", tags = "2, 3, 4, 5, 6, 8")]
    pub pattern: Option<http_rule_wire::Pattern>,
    #[prost(string, tag = "7")]
    pub body: String,
    #[prost(string, tag = "12")]
    pub response_body: String,
}

pub mod http_rule_wire {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Pattern {
        #[prost(string, tag = "2")]
        Get(String),
        #[prost(string, tag = "3")]
        Put(String),
        #[prost(string, tag = "4")]
        Post(String),
        #[prost(string, tag = "5")]
        Delete(String),
        #[prost(string, tag = "6")]
        Patch(String),
        #[prost(message, tag = "8")]
        Custom(super::CustomHttpPatternWire),
    }
}

/// `google.api.CustomHttpPattern`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomHttpPatternWire {
    #[prost(string, tag = "1")]
    pub kind: String,
    #[prost(string, tag = "2")]
    pub path: String,
}
