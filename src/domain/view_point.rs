//! View point result type.

use serde::{Deserialize, Serialize};

use super::element::Element;
use super::id::ElementId;

/// A local maximum of the mesh height field.
///
/// Serializes as `{"element_id": <id>, "value": <height>}`, matching the
/// `values` records of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPoint {
    element_id: ElementId,
    #[serde(rename = "value")]
    height: f64,
}

impl ViewPoint {
    #[must_use]
    pub const fn new(element_id: ElementId, height: f64) -> Self {
        Self { element_id, height }
    }

    #[must_use]
    pub const fn element_id(&self) -> ElementId {
        self.element_id
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl From<&Element> for ViewPoint {
    fn from(element: &Element) -> Self {
        Self::new(element.id(), element.height())
    }
}
