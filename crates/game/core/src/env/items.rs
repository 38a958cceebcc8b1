use crate::state::ItemId;

pub trait ItemOracle: Send + Sync {
    fn item(&self, id: ItemId) -> Option<&ItemDefinition>;

    fn all_items(&self) -> &[ItemDefinition];
}

/// Item definition with display data and optional use effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<ItemEffect>,
}

impl ItemDefinition {
    /// Returns the effect applied when the item is used up, if any.
    pub fn consumable_effect(&self) -> Option<ItemEffect> {
        match self.kind {
            ItemKind::Consumable => self.effect,
            ItemKind::Key | ItemKind::Collectible => None,
        }
    }

    pub fn is_consumable(&self) -> bool {
        self.kind == ItemKind::Consumable
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    /// Used up on use.
    Consumable,
    Key,
    /// Kept forever; using it only shows its description.
    Collectible,
}

/// Signed stat changes applied directly by a consumable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemEffect {
    pub health: i32,
    pub energy: i32,
    pub awareness: i32,
}
