#![forbid(unsafe_code)]

//! The renderable node contract.

use dragline_core::Rect;
use serde::{Deserialize, Serialize};

/// A draggable, resizable element inside the container.
///
/// The engine only reads `rect` and `disabled`; `payload` is an opaque
/// render/extension value passed through to the rendering collaborator
/// unvalidated and uninspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<P> {
    /// Stable identifier assigned by the consumer.
    pub id: String,
    /// Current geometry in container-local pixels.
    pub rect: Rect,
    /// Disabled nodes cannot start a drag or resize gesture.
    #[serde(default)]
    pub disabled: bool,
    /// Opaque render/extension payload.
    pub payload: P,
}

impl<P> Node<P> {
    /// Create an enabled node.
    pub fn new(id: impl Into<String>, rect: Rect, payload: P) -> Self {
        Self {
            id: id.into(),
            rect,
            disabled: false,
            payload,
        }
    }
}

/// Run a consumer-supplied props mapper, absorbing its failure.
///
/// A misbehaving mapper must not abort the alignment pass: an `Err` is
/// logged and treated as "no extra props for this element".
pub fn map_node_props<P, T, E, F>(node: &Node<P>, index: usize, mapper: F) -> Option<T>
where
    E: std::fmt::Display,
    F: FnOnce(&Node<P>, usize) -> Result<T, E>,
{
    match mapper(node, index) {
        Ok(props) => Some(props),
        Err(err) => {
            tracing::warn!(node = %node.id, index, %err, "node props mapper failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, map_node_props};
    use dragline_core::Rect;

    fn node() -> Node<()> {
        Node::new("a", Rect::new(0.0, 0.0, 10.0, 10.0), ())
    }

    #[test]
    fn mapper_result_passes_through() {
        let props = map_node_props(&node(), 0, |node, index| {
            Ok::<_, String>(format!("{}-{index}", node.id))
        });
        assert_eq!(props.as_deref(), Some("a-0"));
    }

    #[test]
    fn mapper_failure_yields_no_props() {
        let props: Option<String> =
            map_node_props(&node(), 0, |_, _| Err("boom".to_string()));
        assert_eq!(props, None);
    }

    #[test]
    fn node_serde_round_trip() {
        let node = Node::new("panel", Rect::new(1.0, 2.0, 3.0, 4.0), 42u32);
        let json = serde_json::to_string(&node).unwrap();
        let back: Node<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
