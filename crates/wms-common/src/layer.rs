//! Layer names discovered from a WMS GetCapabilities document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable WMS layer, identified only by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name as used in the `layers=` GetMap parameter
    pub name: String,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Layers in document order.
///
/// Duplicates are kept. Once handed back from a parse the list belongs to
/// the caller; nothing in these crates holds on to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerList(Vec<Layer>);

impl LayerList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a layer at the end of the list.
    pub fn push(&mut self, layer: Layer) {
        self.0.push(layer);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
        self.0.iter()
    }

    /// Layer names in document order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(Layer::name).collect()
    }

    /// Index of the first layer with this name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|l| l.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn into_inner(self) -> Vec<Layer> {
        self.0
    }
}

impl From<Vec<Layer>> for LayerList {
    fn from(layers: Vec<Layer>) -> Self {
        Self(layers)
    }
}

impl FromIterator<Layer> for LayerList {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LayerList {
    type Item = Layer;
    type IntoIter = std::vec::IntoIter<Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LayerList {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
