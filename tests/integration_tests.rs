//! Integration tests for the complete protokit pipeline
//!
//! These tests drive the library the way the plugin does:
//! encoded `CodeGeneratorRequest` → decode → model → rendered output.
//!
//! Run with: cargo test --test integration_tests

use prost::Message as _;
use protokit_schema::wire::{
    http_rule_wire::Pattern, CodeGeneratorRequestWire, CustomHttpPatternWire, DescriptorWire,
    FileDescriptorWire, FileOptionsWire, HttpRuleWire, MethodDescriptorWire, MethodOptionsWire,
    ServiceDescriptorWire, HTTP_RULE_EXTENSION,
};
use protokit_schema::{
    model_from_bytes, HttpVerb, JsonModelRenderer, ProtoModel, Renderer, SchemaError,
};

// ============================================================================
// Fixtures
// ============================================================================

fn http(pattern: Pattern) -> Option<Vec<u8>> {
    Some(
        MethodOptionsWire {
            http: Some(HttpRuleWire {
                pattern: Some(pattern),
                ..Default::default()
            }),
        }
        .encode_to_vec(),
    )
}

fn rpc(name: &str, input: &str, output: &str, options: Option<Vec<u8>>) -> MethodDescriptorWire {
    MethodDescriptorWire {
        name: Some(name.to_string()),
        input_type: Some(input.to_string()),
        output_type: Some(output.to_string()),
        options,
        ..Default::default()
    }
}

/// A greeter method annotated with `pattern`.
fn hello_rpc(name: &str, pattern: Pattern) -> MethodDescriptorWire {
    rpc(name, ".greeter.v1.HelloRequest", ".greeter.v1.HelloReply", http(pattern))
}

fn message(name: &str) -> DescriptorWire {
    DescriptorWire {
        name: Some(name.to_string()),
        nested_type: vec![],
    }
}

/// `google/protobuf/empty.proto` stand-in, imported by the target file.
fn empty_dependency() -> FileDescriptorWire {
    FileDescriptorWire {
        name: Some("google/protobuf/empty.proto".to_string()),
        package: Some("google.protobuf".to_string()),
        message_type: vec![message("Empty")],
        ..Default::default()
    }
}

fn greeter_file(methods: Vec<MethodDescriptorWire>) -> FileDescriptorWire {
    FileDescriptorWire {
        name: Some("greeter/v1/greeter.proto".to_string()),
        package: Some("greeter.v1".to_string()),
        dependency: vec!["google/protobuf/empty.proto".to_string()],
        message_type: vec![message("HelloRequest"), message("HelloReply")],
        service: vec![ServiceDescriptorWire {
            name: Some("Greeter".to_string()),
            method: methods,
        }],
        options: Some(FileOptionsWire {
            go_package: Some("example.com/api/greeter/v1;greeterv1".to_string()),
        }),
        syntax: Some("proto3".to_string()),
    }
}

fn request(files: Vec<FileDescriptorWire>, parameter: Option<&str>) -> Vec<u8> {
    CodeGeneratorRequestWire {
        file_to_generate: files.last().and_then(|f| f.name.clone()).into_iter().collect(),
        parameter: parameter.map(str::to_string),
        compiler_version: None,
        proto_file: files,
    }
    .encode_to_vec()
}

fn say_hello_request() -> Vec<u8> {
    request(
        vec![
            empty_dependency(),
            greeter_file(vec![rpc(
                "SayHello",
                ".greeter.v1.HelloRequest",
                ".greeter.v1.HelloReply",
                http(Pattern::Post("/v1/greet/{name}".to_string())),
            )]),
        ],
        Some("appName=greeter"),
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_greeter_say_hello_model() {
    let model = model_from_bytes(&say_hello_request()).expect("should build");

    assert_eq!(model.package, "greeterv1");
    assert_eq!(model.import_path, "example.com/api/greeter");
    assert_eq!(model.proto_package, "greeter.v1");
    assert_eq!(model.source_file, "greeter/v1/greeter.proto");
    assert_eq!(model.parameters["appName"], "greeter");

    assert_eq!(model.services.len(), 1);
    let svc = &model.services[0];
    assert_eq!(svc.original_name, "Greeter");
    assert_eq!(svc.name, "greeter");
    assert_eq!(svc.name_title, "Greeter");

    assert_eq!(svc.methods.len(), 1);
    let m = &svc.methods[0];
    assert_eq!(m.name, "sayHello");
    assert_eq!(m.name_title, "SayHello");
    assert_eq!(m.request.name, "helloRequest");
    assert_eq!(m.response.name_title, "HelloReply");

    let http = m.http.as_ref().expect("http binding");
    assert_eq!(http.method, HttpVerb::Post);
    assert_eq!(http.url, "/v1/greet/{name}");
    assert_eq!(http.vars, ["name"]);
    assert_eq!(http.vars_title, ["Name"]);
}

#[test]
fn test_target_is_last_file() {
    let model = model_from_bytes(&say_hello_request()).expect("should build");
    // The dependency declares no services; only the greeter file is modeled.
    assert_eq!(model.source_file, "greeter/v1/greeter.proto");
    assert_eq!(model.method_count(), 1);
}

#[test]
fn test_empty_file_list_has_no_target() {
    let bytes = request(vec![], None);
    assert!(matches!(model_from_bytes(&bytes), Err(SchemaError::NoTargetFile)));
}

#[test]
fn test_malformed_request_bytes() {
    let err = model_from_bytes(&[0xff, 0xff, 0xff]).unwrap_err();
    assert!(matches!(err, SchemaError::Decode(_)));
}

#[test]
fn test_options_without_http_extension_builds() {
    // `deprecated = true`, no google.api.http
    let mut options = Vec::new();
    prost::encoding::encode_key(33, prost::encoding::WireType::Varint, &mut options);
    prost::encoding::encode_varint(1, &mut options);

    let bytes = request(
        vec![greeter_file(vec![
            rpc(
                "Legacy",
                ".greeter.v1.HelloRequest",
                ".greeter.v1.HelloReply",
                Some(options),
            ),
            rpc("Ping", ".google.protobuf.Empty", ".google.protobuf.Empty", None),
        ])],
        None,
    );

    let model = model_from_bytes(&bytes).expect("should build");
    let methods = &model.services[0].methods;
    assert_eq!(methods.len(), 2);
    assert!(methods.iter().all(|m| m.http.is_none()));
    assert_eq!(methods[1].request.name_title, "Empty");
}

#[test]
fn test_all_verbs_and_path_variables() {
    let bytes = request(
        vec![greeter_file(vec![
            hello_rpc(
                "GetUser",
                Pattern::Get("/v1/{user_id}/messages/{message_id=messages/*}".to_string()),
            ),
            hello_rpc("CreateUser", Pattern::Post("/v1/users".to_string())),
            hello_rpc("ReplaceUser", Pattern::Put("/v1/users/{user_id}".to_string())),
            hello_rpc("UpdateUser", Pattern::Patch("/v1/{name:update}".to_string())),
            hello_rpc("DeleteUser", Pattern::Delete("/v1/{name=threads/*}".to_string())),
        ])],
        None,
    );

    let model = model_from_bytes(&bytes).expect("should build");
    let got: Vec<_> = model.services[0]
        .methods
        .iter()
        .map(|m| {
            let h = m.http.as_ref().expect("http");
            (h.method, h.vars.clone(), h.vars_title.clone())
        })
        .collect();

    let s = |v: &[&str]| v.iter().map(|x| x.to_string()).collect::<Vec<_>>();
    assert_eq!(
        got,
        vec![
            (HttpVerb::Get, s(&["user_id", "message_id"]), s(&["User_id", "Message_id"])),
            (HttpVerb::Post, s(&[]), s(&[])),
            (HttpVerb::Put, s(&["user_id"]), s(&["User_id"])),
            (HttpVerb::Patch, s(&["name"]), s(&["Name"])),
            (HttpVerb::Delete, s(&["name"]), s(&["Name"])),
        ]
    );
}

#[test]
fn test_unsupported_verb_names_the_method() {
    let custom = Pattern::Custom(CustomHttpPatternWire {
        kind: "HEAD".to_string(),
        path: "/v1/greet".to_string(),
    });
    let bytes = request(
        vec![greeter_file(vec![
            hello_rpc("SayHello", Pattern::Post("/v1/greet/{name}".to_string())),
            hello_rpc("Peek", custom),
        ])],
        None,
    );

    let err = model_from_bytes(&bytes).unwrap_err();
    assert!(err.to_string().starts_with("method 'Peek' in service 'Greeter':"));
    assert!(matches!(
        err.root_cause(),
        SchemaError::UnsupportedHttpVerb { method, .. } if method == "Peek"
    ));
}

#[test]
fn test_malformed_http_extension_fails_build() {
    let mut options = Vec::new();
    prost::encoding::encode_key(
        HTTP_RULE_EXTENSION,
        prost::encoding::WireType::ThirtyTwoBit,
        &mut options,
    );
    options.extend_from_slice(&[0, 0, 0, 0]);

    let bytes = request(
        vec![greeter_file(vec![rpc(
            "SayHello",
            ".greeter.v1.HelloRequest",
            ".greeter.v1.HelloReply",
            Some(options),
        )])],
        None,
    );
    let err = model_from_bytes(&bytes).unwrap_err();
    assert!(matches!(err.root_cause(), SchemaError::MalformedHttpOptions { .. }));
}

#[test]
fn test_build_is_deterministic() {
    let bytes = say_hello_request();
    let a = model_from_bytes(&bytes).expect("first");
    let b = model_from_bytes(&bytes).expect("second");
    assert_eq!(a, b);

    let renderer = JsonModelRenderer::default();
    assert_eq!(renderer.render(&a).unwrap(), renderer.render(&b).unwrap());
}

#[test]
fn test_rendered_json_round_trips() {
    let model = model_from_bytes(&say_hello_request()).expect("should build");
    let files = JsonModelRenderer::default().render(&model).expect("render");
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "greeterv1.model.json");

    let value: serde_json::Value = serde_json::from_str(&files[0].content).expect("json");
    assert_eq!(value["services"][0]["methods"][0]["http"]["method"], "POST");

    let parsed: ProtoModel = serde_json::from_value(value).expect("model");
    assert_eq!(parsed, model);
}
