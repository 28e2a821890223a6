use std::collections::HashMap;

use tracing::debug;

use crate::{
    constants::{Association, AssociationMap},
    parser::ast::{walk, walk_mut, Constant, ConstantValue, Identifier, Node, Visitor, VisitorMut},
};

/// State threaded through one walk of the tree.
#[derive(Debug, Default)]
pub struct AssociationContext {
    /// Identifier waiting for the next constant. Cleared once paired.
    pub last_identifier: Option<String>,
    /// Identifier text -> times it has been paired beyond the first.
    pub occurrences: HashMap<String, usize>,
    pub associations: AssociationMap,
}

impl AssociationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn see_identifier(&mut self, identifier: &Identifier) {
        self.last_identifier = Some(identifier.get_string());
    }

    /// Pairs the constant with the pending identifier, if any, and returns
    /// the key the pair was stored under. Parameter markers are not values
    /// and leave the pending identifier in place.
    pub fn see_constant(&mut self, constant: &Constant) -> Option<String> {
        if let ConstantValue::Placeholder(_) = constant.value {
            return None;
        }
        let identifier = self.last_identifier.take()?;

        let key = match self.occurrences.get_mut(&identifier) {
            Some(counter) => {
                *counter += 1;
                format!("{}{}", identifier, counter)
            },
            None => {
                self.occurrences.insert(identifier.clone(), 0);
                identifier.clone()
            },
        };

        self.associations.insert(key.clone(), Association::new(identifier, constant.value.clone()));
        Some(key)
    }
}

/// Collects constant/identifier pairs and, when replacements are given,
/// turns the matching constants into `@name` placeholders.
pub struct ConstantAssociator<'a> {
    pub context: AssociationContext,
    replacements: Option<&'a HashMap<String, String>>,
}

impl<'a> ConstantAssociator<'a> {
    pub fn new() -> Self {
        Self { context: AssociationContext::new(), replacements: None }
    }

    pub fn with_replacements(replacements: &'a HashMap<String, String>) -> Self {
        Self { context: AssociationContext::new(), replacements: Some(replacements) }
    }

    pub fn into_associations(self) -> AssociationMap {
        self.context.associations
    }
}

impl Default for ConstantAssociator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for ConstantAssociator<'_> {
    fn visit(&mut self, node: &Node) {
        match node {
            Node::Identifier(identifier) => self.context.see_identifier(identifier),
            Node::Constant(constant) => {
                self.context.see_constant(constant);
            },
            _ => {},
        }
    }
}

impl VisitorMut for ConstantAssociator<'_> {
    fn visit_mut(&mut self, node: &mut Node) {
        match node {
            Node::Identifier(identifier) => self.context.see_identifier(identifier),
            Node::Constant(constant) => {
                let Some(key) = self.context.see_constant(constant) else {
                    return;
                };
                if let Some(name) = self.replacements.and_then(|replacements| replacements.get(&key)) {
                    constant.value = ConstantValue::placeholder(name);
                }
            },
            _ => {},
        }
    }
}

/// Read-only pass: the tree is left untouched.
pub fn find_constants(node: &Node) -> AssociationMap {
    let mut associator = ConstantAssociator::new();
    walk(node, &mut associator);
    associator.into_associations()
}

/// Substitution pass. Mutates `node` in place: every constant whose derived
/// key appears in `replacements` becomes `@<replacements[key]>`. The
/// returned map still holds the original values.
pub fn replace_constants(node: &mut Node, replacements: &HashMap<String, String>) -> AssociationMap {
    let mut associator = ConstantAssociator::with_replacements(replacements);
    walk_mut(node, &mut associator);
    let associations = associator.into_associations();

    for key in replacements.keys().filter(|key| !associations.contains_key(*key)) {
        debug!(key = %key, "replacement key matches no constant, skipped");
    }

    associations
}
