//! Field definition storage, kept in declaration order.

use crate::types::FlagSet;

/// A declared field: its name and the flags that shape its resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub flags: FlagSet,
}

/// Ordered set of field definitions.
///
/// Redeclaring a name replaces its flags but keeps its original position, so
/// enumeration order is always first-declaration order. Both read passes walk
/// definitions in this order, which decides which definition claims a token
/// first.
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    defs: Vec<FieldDef>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str, flags: FlagSet) {
        match self.defs.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.flags = flags,
            None => self.defs.push(FieldDef {
                name: name.to_string(),
                flags,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.defs.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldStore {
    type Item = &'a FieldDef;
    type IntoIter = std::slice::Iter<'a, FieldDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
