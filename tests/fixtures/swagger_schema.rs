// This file was generated by specgen. DO NOT EDIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// This is the root document object for the API specification. It combines what
/// previously was the Resource Listing and API Declaration (version 1.2 and earlier)
/// together into one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Swagger {
    /// Specifies the Swagger Specification version being used.
    #[serde(rename = "swagger")]
    pub swagger: String,
    /// Provides metadata about the API.
    #[serde(rename = "info")]
    pub info: Box<Info>,
    /// The host (name or ip) serving the API.
    #[serde(rename = "host", default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// The base path on which the API is served.
    #[serde(rename = "basePath", default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// The transfer protocol of the API.
    #[serde(rename = "schemes", default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,
    /// A list of MIME types the APIs can consume.
    #[serde(rename = "consumes", default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,
    /// A list of MIME types the APIs can produce.
    #[serde(rename = "produces", default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    /// The available paths and operations for the API.
    #[serde(rename = "paths")]
    pub paths: Paths,
    /// An object to hold data types produced and consumed by operations.
    #[serde(rename = "definitions", default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Definitions>,
    /// Security scheme definitions that can be used across the specification.
    #[serde(rename = "securityDefinitions", default, skip_serializing_if = "Option::is_none")]
    pub security_definitions: Option<SecurityDefinitions>,
    /// A declaration of which security schemes are applied for the API as a whole.
    #[serde(rename = "security", default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
}

/// The object provides metadata about the API.
///
/// The metadata can be used by the clients if needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// The title of the application.
    #[serde(rename = "title")]
    pub title: String,
    /// A short description of the application.
    #[serde(rename = "description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The Terms of Service for the API.
    #[serde(rename = "termsOfService", default, skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    /// The contact information for the exposed API.
    #[serde(rename = "contact", default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Box<Contact>>,
    /// The license information for the exposed API.
    #[serde(rename = "license", default, skip_serializing_if = "Option::is_none")]
    pub license: Option<Box<License>>,
    /// Provides the version of the application API.
    #[serde(rename = "version")]
    pub version: String,
}

/// Contact information for the exposed API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// The identifying name of the contact person/organization.
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The URL pointing to the contact information.
    #[serde(rename = "url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The email address of the contact person/organization.
    #[serde(rename = "email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License information for the exposed API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// The license name used for the API.
    #[serde(rename = "name")]
    pub name: String,
    /// A URL to the license used for the API.
    #[serde(rename = "url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Describes the operations available on a single path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Allows for an external definition of this path item.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// A definition of a GET operation on this path.
    #[serde(rename = "get", default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Box<Operation>>,
    /// A definition of a POST operation on this path.
    #[serde(rename = "post", default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Box<Operation>>,
    /// A list of parameters that are applicable for all the operations.
    #[serde(rename = "parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

/// Describes a single API operation on a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// A list of tags for API documentation control.
    #[serde(rename = "tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// A short summary of what the operation does.
    #[serde(rename = "summary", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// A verbose explanation of the operation behavior.
    #[serde(rename = "description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unique string used to identify the operation.
    #[serde(rename = "operationId", default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// A list of MIME types the operation can produce.
    #[serde(rename = "produces", default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,
    /// The list of possible responses.
    #[serde(rename = "responses")]
    pub responses: Responses,
    /// Declares this operation to be deprecated.
    #[serde(rename = "deprecated", default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
}

/// Describes a single operation parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// The name of the parameter.
    #[serde(rename = "name")]
    pub name: String,
    /// The location of the parameter.
    #[serde(rename = "in")]
    pub r#in: String,
    /// Determines whether this parameter is mandatory.
    #[serde(rename = "required", default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// The type of the parameter.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The maximum value of the parameter.
    #[serde(rename = "maximum", default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

/// Describes a single response from an API Operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// A short description of the response.
    #[serde(rename = "description")]
    pub description: String,
    /// A definition of the response structure.
    #[serde(rename = "schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Box<Schema>>,
    /// A list of headers that are sent with the response.
    #[serde(rename = "headers", default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    /// An example of the response message.
    #[serde(rename = "examples", default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Example>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// A short description of the header.
    #[serde(rename = "description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The type of the object.
    #[serde(rename = "type")]
    pub r#type: String,
}

/// The Schema Object allows the definition of input and output data types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// A reference to another schema definition.
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// The type of the value.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// The schema of the array items.
    #[serde(rename = "items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// The names of the required properties.
    #[serde(rename = "required", default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Declares the property as "read only".
    #[serde(rename = "readOnly", default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// A free-form property to include an example of an instance.
    #[serde(rename = "example", default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

/// Allows the definition of a security scheme that can be used by the operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    /// The type of the security scheme.
    #[serde(rename = "type")]
    pub r#type: String,
    /// The name of the header or query parameter to be used.
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The location of the API key.
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub r#in: Option<String>,
    /// The available scopes for the OAuth2 security scheme.
    #[serde(rename = "scopes", default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Scopes>,
}

pub type Definitions = BTreeMap<String, Schema>;

pub type Example = BTreeMap<String, serde_json::Value>;

/// Holds the relative paths to the individual endpoints.
pub type Paths = BTreeMap<String, PathItem>;

pub type ParametersDefinitions = BTreeMap<String, Parameter>;

/// A container for the expected responses of an operation.
pub type Responses = BTreeMap<String, Response>;

pub type ResponsesDefinitions = BTreeMap<String, Response>;

pub type Scopes = BTreeMap<String, String>;

pub type SecurityDefinitions = BTreeMap<String, SecurityScheme>;

/// Lists the required security schemes to execute this operation.
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

pub type Headers = BTreeMap<String, Header>;
