//! Extraction of package identity and icon/label references from a
//! compiled (protobuf-encoded) `AndroidManifest.xml` document.

use crate::pb;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Application metadata lifted from the manifest root element.
///
/// Built once per bundle by [`Manifest::from_document`] and immutable
/// afterwards. Missing attributes keep their defaults (`0` / empty).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub package: String,
    pub version_code: i64,
    pub version_name: String,
    pub application: Application,
}

/// The `<application>` element's icon and label resource references, each
/// a raw `"type/name"` string (e.g. `mipmap/ic_launcher`) or empty when
/// the manifest carries no reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub icon: String,
    pub label: String,
}

impl Application {
    /// Both references present.
    pub fn is_filled(&self) -> bool {
        !self.icon.is_empty() && !self.label.is_empty()
    }
}

/// A `"type/name"` resource reference split into its two halves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub kind: String,
    pub name: String,
}

impl ResourceRef {
    /// Splits a raw reference on `/`. Anything other than exactly two
    /// parts is treated as absent, never as an error.
    pub fn parse(raw: &str) -> Option<ResourceRef> {
        let mut parts = raw.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(kind), Some(name), None) => Some(ResourceRef {
                kind: kind.to_string(),
                name: name.to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

impl Manifest {
    /// Walks a decoded manifest document once.
    ///
    /// Never fails: a missing `<application>` element or absent icon/label
    /// references leave the corresponding fields empty. A `versionCode`
    /// that does not parse as base-10 is ignored rather than rejected.
    pub fn from_document(document: &pb::XmlNode) -> Manifest {
        let mut manifest = Manifest::default();
        let root = match document.element() {
            Some(root) => root,
            None => return manifest,
        };

        for attribute in &root.attribute {
            match attribute.name.as_str() {
                "package" => manifest.package = attribute.value.clone(),
                "versionCode" => match attribute.value.parse::<i64>() {
                    Ok(code) => manifest.version_code = code,
                    Err(_) => warn!("ignoring unparseable versionCode {:?}", attribute.value),
                },
                "versionName" => manifest.version_name = attribute.value.clone(),
                _ => {}
            }
        }

        'children: for child in &root.child {
            let element = match child.element() {
                Some(element) => element,
                None => continue,
            };
            if element.name != "application" {
                continue;
            }
            for attribute in &element.attribute {
                // Only reference-typed compiled values carry a resource
                // name; literal icon/label attributes are not references.
                let reference = match &attribute.compiled_item {
                    Some(pb::Item {
                        value: Some(pb::item::Value::Ref(reference)),
                    }) => reference,
                    _ => continue,
                };
                match attribute.name.as_str() {
                    "icon" => manifest.application.icon = reference.name.clone(),
                    "label" => manifest.application.label = reference.name.clone(),
                    _ => {}
                }
                if manifest.application.is_filled() {
                    break 'children;
                }
            }
        }

        manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pb;

    fn attr(name: &str, value: &str) -> pb::XmlAttribute {
        pb::XmlAttribute {
            name: name.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }

    fn ref_attr(name: &str, target: &str) -> pb::XmlAttribute {
        pb::XmlAttribute {
            name: name.to_string(),
            compiled_item: Some(pb::Item {
                value: Some(pb::item::Value::Ref(pb::Reference {
                    name: target.to_string(),
                    ..Default::default()
                })),
            }),
            ..Default::default()
        }
    }

    fn element_node(element: pb::XmlElement) -> pb::XmlNode {
        pb::XmlNode {
            node: Some(pb::xml_node::Node::Element(element)),
        }
    }

    fn manifest_document(children: Vec<pb::XmlNode>) -> pb::XmlNode {
        element_node(pb::XmlElement {
            name: "manifest".to_string(),
            attribute: vec![
                attr("package", "com.example.app"),
                attr("versionCode", "42"),
                attr("versionName", "1.2.3"),
            ],
            child: children,
            ..Default::default()
        })
    }

    fn application(attributes: Vec<pb::XmlAttribute>) -> pb::XmlNode {
        element_node(pb::XmlElement {
            name: "application".to_string(),
            attribute: attributes,
            ..Default::default()
        })
    }

    #[test]
    fn extracts_identity_and_references() {
        let document = manifest_document(vec![application(vec![
            ref_attr("icon", "mipmap/ic_launcher"),
            ref_attr("label", "string/app_name"),
        ])]);
        let manifest = Manifest::from_document(&document);
        assert_eq!(manifest.package, "com.example.app");
        assert_eq!(manifest.version_code, 42);
        assert_eq!(manifest.version_name, "1.2.3");
        assert_eq!(manifest.application.icon, "mipmap/ic_launcher");
        assert_eq!(manifest.application.label, "string/app_name");
        assert!(manifest.application.is_filled());
    }

    #[test]
    fn ignores_unparseable_version_code() {
        let mut document = manifest_document(vec![]);
        if let Some(pb::xml_node::Node::Element(root)) = &mut document.node {
            root.attribute[1] = attr("versionCode", "not-a-number");
        }
        let manifest = Manifest::from_document(&document);
        assert_eq!(manifest.version_code, 0);
        assert_eq!(manifest.package, "com.example.app");
    }

    #[test]
    fn missing_application_is_not_an_error() {
        let manifest = Manifest::from_document(&manifest_document(vec![]));
        assert_eq!(manifest.application, Application::default());
        assert!(!manifest.application.is_filled());
    }

    #[test]
    fn literal_attributes_are_not_references() {
        let document = manifest_document(vec![application(vec![
            attr("icon", "not-a-reference"),
            ref_attr("label", "string/app_name"),
        ])]);
        let manifest = Manifest::from_document(&document);
        assert_eq!(manifest.application.icon, "");
        assert_eq!(manifest.application.label, "string/app_name");
    }

    #[test]
    fn first_filled_application_wins() {
        let document = manifest_document(vec![
            application(vec![
                ref_attr("icon", "mipmap/first"),
                ref_attr("label", "string/first"),
            ]),
            application(vec![
                ref_attr("icon", "mipmap/second"),
                ref_attr("label", "string/second"),
            ]),
        ]);
        let manifest = Manifest::from_document(&document);
        assert_eq!(manifest.application.icon, "mipmap/first");
        assert_eq!(manifest.application.label, "string/first");
    }

    #[test]
    fn non_element_children_are_skipped() {
        let document = manifest_document(vec![
            pb::XmlNode {
                node: Some(pb::xml_node::Node::Text("whitespace".to_string())),
            },
            application(vec![ref_attr("icon", "mipmap/ic_launcher")]),
        ]);
        let manifest = Manifest::from_document(&document);
        assert_eq!(manifest.application.icon, "mipmap/ic_launcher");
    }

    #[test]
    fn parses_resource_references() {
        let reference = ResourceRef::parse("mipmap/ic_launcher").unwrap();
        assert_eq!(reference.kind, "mipmap");
        assert_eq!(reference.name, "ic_launcher");
        assert_eq!(reference.to_string(), "mipmap/ic_launcher");

        assert_eq!(ResourceRef::parse("ic_launcher"), None);
        assert_eq!(ResourceRef::parse("res/mipmap/ic_launcher"), None);
    }
}
