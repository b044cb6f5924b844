// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name-based layer lookup for one capability.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::capability::Layer;

/// Errors from [`LayerRegistry::find_by_name`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No registered layer carries the requested name.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
    /// More than one registered layer carries the requested name.
    Duplicate {
        /// The ambiguous name.
        name: String,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "layer {name:?} was not found"),
            Self::Duplicate { name } => {
                write!(f, "layer {name:?} was found more than once")
            }
        }
    }
}

impl core::error::Error for LookupError {}

/// The set of constructed layer instances of one capability, searchable by
/// name.
///
/// Registration is explicit: whatever module constructs a layer registers it
/// (and deregisters it before dropping its last handle elsewhere, if it wants
/// the name to stop resolving). Names need not be unique across capabilities,
/// but must be unique within one registry for lookup to succeed.
pub struct LayerRegistry<A> {
    entries: Vec<Rc<dyn Layer<A>>>,
}

impl<A> fmt::Debug for LayerRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerRegistry")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<A> Default for LayerRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> LayerRegistry<A> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a layer to the registry.
    ///
    /// No uniqueness check happens here; a name collision surfaces as
    /// [`LookupError::Duplicate`] at lookup time.
    pub fn register(&mut self, layer: Rc<dyn Layer<A>>) {
        self.entries.push(layer);
    }

    /// Removes a layer, identified by handle identity rather than name.
    ///
    /// Returns whether the layer was present. If the same handle was
    /// registered more than once, only the first entry is removed.
    pub fn deregister(&mut self, layer: &Rc<dyn Layer<A>>) -> bool {
        match self.entries.iter().position(|e| Rc::ptr_eq(e, layer)) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Resolves `name` to exactly one registered layer.
    ///
    /// The full set is scanned so that an ambiguous name is always detected,
    /// regardless of registration order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] for zero matches and
    /// [`LookupError::Duplicate`] for more than one; neither selects a layer.
    pub fn find_by_name(&self, name: &str) -> Result<Rc<dyn Layer<A>>, LookupError> {
        let mut found = None;
        for layer in &self.entries {
            if layer.name() == name {
                if found.is_some() {
                    return Err(LookupError::Duplicate { name: name.into() });
                }
                found = Some(layer.clone());
            }
        }
        found.ok_or_else(|| LookupError::NotFound { name: name.into() })
    }

    /// Returns an iterator over the registered layers, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn Layer<A>>> {
        self.entries.iter()
    }

    /// Returns the number of registered layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
