//! Object and brand detection shapes.
//!
//! [`ObjectHierarchy`] refers to itself through `parent`. The chain is owned and
//! boxed, so each node has a finite size; its length is decided by the service.
//! Walking and dropping it are iterative, and serializing it grows the stack as
//! needed. Parse deep chains with [`json::from_str`](crate::json::from_str).

use crate::json::{RED_ZONE, STACK_SIZE};
use crate::{BoundingRect, ImageMetadata};
use serde::{Deserialize, Serialize, Serializer};

/// A node in the object taxonomy, optionally linked to a broader parent.
///
/// # Examples
///
/// ```
/// use iris_core::ObjectHierarchy;
///
/// let json = r#"{"object":"dog","parent":{"object":"mammal","parent":{"object":"animal"}}}"#;
/// let node: ObjectHierarchy = serde_json::from_str(json).unwrap();
/// assert_eq!(node.depth(), 3);
/// let names: Vec<_> = node.ancestors().filter_map(|n| n.object.as_deref()).collect();
/// assert_eq!(names, ["mammal", "animal"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectHierarchy {
    /// Label for the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Confidence score of having observed the object, from 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// The parent object, from a higher level of the hierarchy.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_parent"
    )]
    pub parent: Option<Box<ObjectHierarchy>>,
}

fn serialize_parent<S: Serializer>(
    parent: &Option<Box<ObjectHierarchy>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    stacker::maybe_grow(RED_ZONE, STACK_SIZE, || parent.serialize(serializer))
}

impl Drop for ObjectHierarchy {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(mut node) = next {
            next = node.parent.take();
        }
    }
}

impl ObjectHierarchy {
    /// Creates a leaf node.
    pub fn new(object: impl Into<String>, confidence: f64) -> Self {
        Self {
            object: Some(object.into()),
            confidence: Some(confidence),
            parent: None,
        }
    }

    /// Sets the parent node.
    pub fn with_parent(mut self, parent: ObjectHierarchy) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Iterates over the parents of this node, nearest first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent.as_deref(),
        }
    }

    /// Number of nodes in the chain, counting this one.
    pub fn depth(&self) -> usize {
        1 + self.ancestors().count()
    }
}

/// Iterator over the parents of an [`ObjectHierarchy`] node.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a ObjectHierarchy>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ObjectHierarchy;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

/// An object detected inside an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    /// Location of the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<BoundingRect>,
    /// Label for the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Confidence score of having observed the object, from 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// The parent object, from a higher level of the hierarchy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ObjectHierarchy>,
}

impl DetectedObject {
    /// Iterates over the object's parents, nearest first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent.as_ref(),
        }
    }
}

/// A brand detected in an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedBrand {
    /// Label for the brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Confidence score of having observed the brand, from 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Location of the brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rectangle: Option<BoundingRect>,
}

/// Result of the detect operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResult {
    /// An array of detected objects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objects: Vec<DetectedObject>,
    /// Id of the REST API request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Image metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(depth: usize) -> ObjectHierarchy {
        (1..depth).fold(ObjectHierarchy::new("root", 1.0), |parent, level| {
            ObjectHierarchy::new(format!("n{}", level), 0.5).with_parent(parent)
        })
    }

    #[test]
    fn long_chain_serializes_and_drops() {
        let node = chain(50_000);
        assert_eq!(node.depth(), 50_000);

        let text = serde_json::to_string(&node).unwrap();
        assert!(text.starts_with(r#"{"object":"n49999","confidence":0.5,"parent":{"#));
        drop(node);

        let reparsed: ObjectHierarchy = crate::json::from_str(&text).unwrap();
        assert_eq!(reparsed.ancestors().last().and_then(|n| n.object.as_deref()), Some("root"));
    }

    #[test]
    fn leaf_has_no_ancestors() {
        let leaf = ObjectHierarchy::new("animal", 0.9);
        assert_eq!(leaf.depth(), 1);
        assert!(leaf.ancestors().next().is_none());
    }

    #[test]
    fn detected_object_walks_parent_chain() {
        let object = DetectedObject {
            object: Some("beagle".into()),
            parent: Some(
                ObjectHierarchy::new("dog", 0.8).with_parent(ObjectHierarchy::new("mammal", 0.7)),
            ),
            ..Default::default()
        };
        let names: Vec<_> = object
            .ancestors()
            .filter_map(|n| n.object.as_deref())
            .collect();
        assert_eq!(names, ["dog", "mammal"]);
    }
}
