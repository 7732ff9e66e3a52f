//! The global class catalog.

use indexmap::IndexMap;

use crate::{ClassRecord, NO_CODEGEN_MODULE};

/// All known classes keyed by their globally unique name.
///
/// The catalog is filled once by the metadata front end and only read
/// afterwards, so it can be shared freely across ordering runs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    classes: IndexMap<String, ClassRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a class, returning the record it replaced if the name was
    /// already taken.
    pub fn insert(&mut self, class: ClassRecord) -> Option<ClassRecord> {
        self.classes.insert(class.name.clone(), class)
    }

    pub fn get(&self, name: &str) -> Option<&ClassRecord> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassRecord> {
        self.classes.values()
    }

    /// Classes whose owning module is `module`, in insertion order.
    pub fn classes_in<'a>(&'a self, module: &str) -> impl Iterator<Item = &'a ClassRecord> {
        self.classes.values().filter(move |c| c.module == module)
    }

    /// Whether `name` is a class of the no-codegen marker module.
    pub fn is_marker(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(|class| class.module == NO_CODEGEN_MODULE)
    }

    /// Distinct module names in first-seen order.
    pub fn modules(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for class in self.classes.values() {
            if !seen.contains(&class.module.as_str()) {
                seen.push(&class.module);
            }
        }
        seen
    }
}

impl FromIterator<ClassRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = ClassRecord>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for class in iter {
            catalog.insert(class);
        }
        catalog
    }
}
