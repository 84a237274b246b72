//! Shared utilities for integration tests.
//!
//! Builders for the descriptor protos protoc would send to the plugin.

#![allow(dead_code)]

use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::{
    DescriptorProto, FileDescriptorProto, FileOptions, MethodDescriptorProto,
    ServiceDescriptorProto,
};

/// Builder for a single `.proto` file descriptor.
pub struct ProtoFile {
    proto: FileDescriptorProto,
}

impl ProtoFile {
    pub fn new(name: &str, package: &str) -> Self {
        Self {
            proto: FileDescriptorProto {
                name: Some(name.to_string()),
                package: Some(package.to_string()),
                syntax: Some("proto3".to_string()),
                ..Default::default()
            },
        }
    }

    pub fn go_package(mut self, go_package: &str) -> Self {
        self.proto.options = Some(FileOptions {
            go_package: Some(go_package.to_string()),
            ..Default::default()
        });
        self
    }

    pub fn import(mut self, dependency: &str) -> Self {
        self.proto.dependency.push(dependency.to_string());
        self
    }

    pub fn message(mut self, name: &str) -> Self {
        self.proto.message_type.push(DescriptorProto {
            name: Some(name.to_string()),
            ..Default::default()
        });
        self
    }

    /// Message with one nested message declared inside it.
    pub fn nested_message(mut self, name: &str, nested: &str) -> Self {
        self.proto.message_type.push(DescriptorProto {
            name: Some(name.to_string()),
            nested_type: vec![DescriptorProto {
                name: Some(nested.to_string()),
                ..Default::default()
            }],
            ..Default::default()
        });
        self
    }

    /// Service whose methods are `(name, input, output)` with fully-qualified
    /// type names (`.pkg.Message`).
    pub fn service(mut self, name: &str, methods: &[(&str, &str, &str)]) -> Self {
        self.proto.service.push(ServiceDescriptorProto {
            name: Some(name.to_string()),
            method: methods
                .iter()
                .map(|(method, input, output)| MethodDescriptorProto {
                    name: Some(method.to_string()),
                    input_type: Some(input.to_string()),
                    output_type: Some(output.to_string()),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        });
        self
    }

    /// Mark the last method of the last service as server streaming.
    pub fn server_streaming(mut self) -> Self {
        if let Some(method) = self
            .proto
            .service
            .last_mut()
            .and_then(|s| s.method.last_mut())
        {
            method.server_streaming = Some(true);
        }
        self
    }

    pub fn build(self) -> FileDescriptorProto {
        self.proto
    }
}

/// Request generating `targets` out of `files` (dependencies first).
pub fn request(
    files: Vec<FileDescriptorProto>,
    targets: &[&str],
    parameter: Option<&str>,
) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: targets.iter().map(|t| t.to_string()).collect(),
        parameter: parameter.map(str::to_string),
        proto_file: files,
        ..Default::default()
    }
}

/// Run the plugin over the wire encoding, as protoc would.
pub fn run_plugin(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let output = protoc_gen_go_client::plugin::run(&request.encode_to_vec())
        .expect("plugin should produce a response");
    CodeGeneratorResponse::decode(output.as_slice()).expect("response should decode")
}

/// The common types file shared by the service files.
pub fn common_proto() -> FileDescriptorProto {
    ProtoFile::new("api/common.proto", "example.common")
        .go_package("example.com/api/common;commonpb")
        .message("Empty")
        .build()
}

pub fn user_proto() -> FileDescriptorProto {
    ProtoFile::new("api/user.proto", "example.api")
        .go_package("example.com/api;apipb")
        .message("GetUserRequest")
        .message("User")
        .service(
            "UserService",
            &[("GetUser", ".example.api.GetUserRequest", ".example.api.User")],
        )
        .build()
}

pub fn order_proto() -> FileDescriptorProto {
    ProtoFile::new("api/order.proto", "example.api")
        .go_package("example.com/api;apipb")
        .import("api/common.proto")
        .message("CreateOrderRequest")
        .message("ListOrdersRequest")
        .message("ListOrdersResponse")
        .service(
            "OrderService",
            &[
                (
                    "CreateOrder",
                    ".example.api.CreateOrderRequest",
                    ".example.common.Empty",
                ),
                (
                    "ListOrders",
                    ".example.api.ListOrdersRequest",
                    ".example.api.ListOrdersResponse",
                ),
            ],
        )
        .build()
}
