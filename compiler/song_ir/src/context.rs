//! Immutable name -> value environment.
//!
//! Every operation returns a new `Context`; the receiver is never changed.
//! Backed by `im::HashMap`, so extending a context shares structure with
//! its parent and cloning is O(1).

use std::fmt;

use crate::{Expression, Name};

/// Which side wins when two contexts bind the same name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Precedence {
    /// Bindings of the receiver win.
    Ours,
    /// Bindings of the argument win.
    Theirs,
}

/// A persistent map from names to expressions.
#[derive(Clone, Default, PartialEq)]
pub struct Context {
    bindings: im::HashMap<Name, Expression>,
}

impl Context {
    pub fn empty() -> Self {
        Context::default()
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Expression> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// A context with `name` bound to `value`, replacing any previous binding.
    #[must_use]
    pub fn extend(&self, name: impl Into<Name>, value: Expression) -> Context {
        Context {
            bindings: self.bindings.update(name.into(), value),
        }
    }

    /// A context without `name`. Removing an absent name is a no-op.
    #[must_use]
    pub fn without(&self, name: &str) -> Context {
        Context {
            bindings: self.bindings.without(name),
        }
    }

    /// The union of both contexts; on conflicts `precedence` picks the winner.
    #[must_use]
    pub fn merge(&self, other: &Context, precedence: Precedence) -> Context {
        let (winner, loser) = match precedence {
            Precedence::Ours => (self, other),
            Precedence::Theirs => (other, self),
        };
        // `im::HashMap::union` keeps the larger map's values on conflict.
        let mut bindings = loser.bindings.clone();
        for (name, value) in &winner.bindings {
            bindings.insert(name.clone(), value.clone());
        }
        Context { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in sorted order.
    pub fn keys(&self) -> Vec<Name> {
        let mut keys: Vec<Name> = self.bindings.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Expression)> {
        self.bindings.iter()
    }

    /// One `name = value` line per binding, sorted by name.
    pub fn describe(&self) -> String {
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
            .into_iter()
            .map(|(name, value)| format!("{name} = {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<(Name, Expression)> for Context {
    fn from_iter<I: IntoIterator<Item = (Name, Expression)>>(iter: I) -> Self {
        Context {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        f.debug_map().entries(entries).finish()
    }
}
