//! Per-item trait data.

use serde::{Deserialize, Serialize};

/// One entry of the traits document, indexed positionally by item id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemTraits {
    pub specie: String,
    pub eyes: String,
    pub eyewear: String,
    pub outerwear: String,
    pub headwear: String,
    pub body: String,
    pub feathers: String,
    pub background: String,
    pub beak: String,
}

/// A `{ trait_type, value }` pair as shown alongside an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl ItemTraits {
    /// Attribute list in document field order, with lowercase trait types.
    pub fn attributes(&self) -> Vec<Attribute> {
        [
            ("specie", &self.specie),
            ("eyes", &self.eyes),
            ("eyewear", &self.eyewear),
            ("outerwear", &self.outerwear),
            ("headwear", &self.headwear),
            ("body", &self.body),
            ("feathers", &self.feathers),
            ("background", &self.background),
            ("beak", &self.beak),
        ]
        .into_iter()
        .map(|(trait_type, value)| Attribute {
            trait_type: trait_type.to_string(),
            value: value.clone(),
        })
        .collect()
    }
}
