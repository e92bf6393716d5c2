//! Name-to-definition map for names that resolve outside the current file.

use std::collections::HashMap;

use super::ast::Name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TyConFlavour {
    Data,
    Class,
    Synonym,
    Family,
}

/// The defining entity of a name, reduced to what classification needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Id {
        function_type: bool,
        class_method: bool,
        record_selector: bool,
    },
    DataCon,
    PatSyn,
    TyCon(TyConFlavour),
}

impl Entity {
    /// A plain value binding.
    pub fn value() -> Self {
        Entity::Id {
            function_type: false,
            class_method: false,
            record_selector: false,
        }
    }

    /// A function-typed value binding.
    pub fn function() -> Self {
        Entity::Id {
            function_type: true,
            class_method: false,
            record_selector: false,
        }
    }
}

/// Lookup from a name's unique to its defining entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMap {
    entities: HashMap<u64, Entity>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &Name, entity: Entity) {
        self.entities.insert(name.unique, entity);
    }

    pub fn with(mut self, name: &Name, entity: Entity) -> Self {
        self.insert(name, entity);
        self
    }

    pub fn lookup(&self, name: &Name) -> Option<Entity> {
        self.entities.get(&name.unique).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
