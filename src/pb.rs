//! Hand-declared protobuf messages for the aapt2 compiled-artifact schemas.
//!
//! An app bundle stores its manifest and resource table in the protobuf
//! schemas from aapt2's `Resources.proto` and `Configuration.proto`. Only
//! the fields this crate actually reads are declared here, with the field
//! tags of the upstream schemas; prost skips everything else on the wire,
//! which is exactly the behaviour we want for qualifier fields and value
//! kinds the resolver does not interpret.

/// A node in a compiled XML document: an element or a text run.
#[derive(Clone, PartialEq, prost::Message)]
pub struct XmlNode {
    #[prost(oneof = "xml_node::Node", tags = "2, 3")]
    pub node: Option<xml_node::Node>,
}

pub mod xml_node {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Node {
        #[prost(message, tag = "2")]
        Element(super::XmlElement),
        #[prost(string, tag = "3")]
        Text(String),
    }
}

impl XmlNode {
    /// The element payload, if this node is an element.
    pub fn element(&self) -> Option<&XmlElement> {
        match &self.node {
            Some(xml_node::Node::Element(element)) => Some(element),
            _ => None,
        }
    }
}

/// A compiled XML element with its attributes and child nodes in
/// document order.
#[derive(Clone, PartialEq, prost::Message)]
pub struct XmlElement {
    #[prost(message, repeated, tag = "1")]
    pub namespace_declaration: Vec<XmlNamespace>,
    #[prost(string, tag = "2")]
    pub namespace_uri: String,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(message, repeated, tag = "4")]
    pub attribute: Vec<XmlAttribute>,
    #[prost(message, repeated, tag = "5")]
    pub child: Vec<XmlNode>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct XmlNamespace {
    #[prost(string, tag = "1")]
    pub prefix: String,
    #[prost(string, tag = "2")]
    pub uri: String,
}

/// An attribute carries both the raw string value and, when aapt2 compiled
/// it, a typed [`Item`] (which is how resource references reach us).
#[derive(Clone, PartialEq, prost::Message)]
pub struct XmlAttribute {
    #[prost(string, tag = "1")]
    pub namespace_uri: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub value: String,
    #[prost(uint32, tag = "5")]
    pub resource_id: u32,
    #[prost(message, optional, tag = "6")]
    pub compiled_item: Option<Item>,
}

/// A compiled value. The upstream oneof has more arms (raw strings, styled
/// strings, ids, primitives); those decode as absent here and resolve to
/// nothing downstream.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Item {
    #[prost(oneof = "item::Value", tags = "1, 2, 5")]
    pub value: Option<item::Value>,
}

pub mod item {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Ref(super::Reference),
        #[prost(message, tag = "2")]
        Str(super::Str),
        #[prost(message, tag = "5")]
        File(super::FileReference),
    }
}

/// A reference to another resource. `name` is emitted by aapt2 in
/// `"type/name"` form, e.g. `mipmap/ic_launcher`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Reference {
    #[prost(uint32, tag = "2")]
    pub id: u32,
    #[prost(string, tag = "3")]
    pub name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Str {
    #[prost(string, tag = "1")]
    pub value: String,
}

/// A value that lives in another archive member, e.g. a drawable PNG.
/// The path is relative to the module root (`res/...`).
#[derive(Clone, PartialEq, prost::Message)]
pub struct FileReference {
    #[prost(string, tag = "1")]
    pub path: String,
}

/// The compiled resource table: packages, each with typed entries and
/// per-configuration values.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ResourceTable {
    #[prost(message, repeated, tag = "2")]
    pub package: Vec<Package>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Package {
    #[prost(string, tag = "2")]
    pub package_name: String,
    #[prost(message, repeated, tag = "3")]
    pub r#type: Vec<Type>,
}

/// A resource type such as `string`, `drawable` or `mipmap`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Type {
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, repeated, tag = "3")]
    pub entry: Vec<Entry>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Entry {
    #[prost(string, tag = "5")]
    pub name: String,
    #[prost(message, repeated, tag = "6")]
    pub config_value: Vec<ConfigValue>,
}

/// One value of an entry under one device configuration.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConfigValue {
    #[prost(message, optional, tag = "1")]
    pub config: Option<Configuration>,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
}

/// The upstream `Value` is a oneof of an [`Item`] or a compound value;
/// compound values are not interpreted and decode as absent.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Value {
    #[prost(message, optional, tag = "4")]
    pub item: Option<Item>,
}

/// Device configuration qualifiers. Density (in dpi) is the only field the
/// resolver interprets; the rest are declared so callers can build full
/// configurations, and are accepted but ignored during matching.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Configuration {
    #[prost(uint32, tag = "1")]
    pub mcc: u32,
    #[prost(uint32, tag = "2")]
    pub mnc: u32,
    #[prost(string, tag = "3")]
    pub locale: String,
    #[prost(uint32, tag = "18")]
    pub density: u32,
    #[prost(uint32, tag = "24")]
    pub sdk_version: u32,
}
