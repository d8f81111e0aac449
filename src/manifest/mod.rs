//! Per-kind registries of canonical definitions.
//!
//! A [`Manifest`] owns the canonical instance of every definition of one kind.
//! Identity is the definition's key (OID, or rule number for structure
//! rules) and is unique within a manifest: inserting a second definition with
//! the same key leaves the registry untouched. Members remember the order in
//! which they were inserted and every iteration follows that order.
//!
//! All reads and writes go through one lock per manifest. Distinct manifests
//! are independent of each other.

mod macros;
mod refresh;

pub use macros::Macros;

use crate::definitions::{Definition, Shared};
use crate::error::{SchemaError, SchemaResult};
use crate::serializer::{Formatter, Unmarshal};
use crate::value_objects::Oid;
use indexmap::IndexMap;
use log::{debug, warn};
use parking_lot::Mutex;
use std::fmt;

struct Member<T> {
    sequence: usize,
    definition: Shared<T>,
}

struct Inner<T> {
    members: IndexMap<String, Member<T>>,
    next_sequence: usize,
    formatter: Option<Formatter<T>>,
}

/// Registry of canonical definitions of one kind.
///
/// ## Examples
///
/// ```rust
/// use dirschema::definitions::LdapSyntax;
/// use dirschema::manifest::Manifest;
/// use dirschema::value_objects::{Description, Oid};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let syntaxes: Manifest<LdapSyntax> = Manifest::new();
///     let syntax = LdapSyntax::new(
///         Oid::new("1.3.6.1.4.1.1466.115.121.1.15")?,
///         Description::new("Directory String")?,
///     );
///     assert!(syntaxes.set(syntax.clone()));
///     assert!(!syntaxes.set(syntax));
///
///     assert!(syntaxes.exists("1.3.6.1.4.1.1466.115.121.1.15", None));
///     assert!(syntaxes.exists("Directory String Syntax", None));
///     assert_eq!(syntaxes.len(), 1);
///     Ok(())
/// }
/// ```
pub struct Manifest<T: Definition> {
    inner: Mutex<Inner<T>>,
}

impl<T: Definition> Default for Manifest<T> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                members: IndexMap::new(),
                next_sequence: 0,
                formatter: None,
            }),
        }
    }
}

impl<T: Definition> Manifest<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition unless a member already holds its key.
    ///
    /// Returns `true` when the definition was inserted. Uninitialized and
    /// self-superior definitions are refused, as are definitions sharing a
    /// name with another member.
    pub fn set(&self, definition: impl Into<Shared<T>>) -> bool {
        self.insert(definition).unwrap_or_else(|e| {
            warn!("{}", e);
            false
        })
    }

    /// Like [`set`](Self::set), but a name already used by another member
    /// is reported as [`SchemaError::DuplicateName`].
    ///
    /// Names identify a single member so that a reference rendered by name
    /// scans back to the same definition.
    pub fn insert(&self, definition: impl Into<Shared<T>>) -> SchemaResult<bool> {
        let definition = definition.into();
        let (key, names) = {
            let def = definition.read();
            if def.is_zero() {
                warn!("Refused uninitialized {} definition", T::KIND);
                return Ok(false);
            }
            if def.is_self_referential() {
                warn!("Refused self-superior {} '{}'", T::KIND, def.key());
                return Ok(false);
            }
            let names: Vec<String> = def
                .name()
                .map(|name| name.iter().map(str::to_string).collect())
                .unwrap_or_default();
            (def.key(), names)
        };

        let mut inner = self.inner.lock();
        if inner.members.contains_key(&key) {
            warn!("{} '{}' is already registered; keeping the existing definition", T::KIND, key);
            return Ok(false);
        }

        for (existing, member) in &inner.members {
            let member = member.definition.read();
            let Some(taken) = member.name() else {
                continue;
            };
            if let Some(name) = names.iter().find(|name| taken.contains(name)) {
                return Err(SchemaError::DuplicateName {
                    kind: T::KIND,
                    name: name.clone(),
                    existing: existing.clone(),
                });
            }
        }

        let sequence = inner.next_sequence;
        inner.next_sequence += 1;
        inner.members.insert(
            key.clone(),
            Member {
                sequence,
                definition,
            },
        );
        debug!("Registered {} '{}' at sequence {}", T::KIND, key, sequence);
        Ok(true)
    }

    /// Insert every definition in turn. Returns how many were inserted.
    pub fn extend<I>(&self, definitions: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Shared<T>>,
    {
        definitions
            .into_iter()
            .map(|definition| self.set(definition))
            .filter(|inserted| *inserted)
            .count()
    }

    /// Look a definition up by any term that identifies it.
    ///
    /// Tried in order: the key itself, a macro alias resolving to a key,
    /// a case-insensitive name (or a syntax description), and finally the
    /// kind's loose match.
    pub fn get(&self, term: &str, macros: Option<&Macros>) -> Option<Shared<T>> {
        let inner = self.inner.lock();
        if let Some(member) = inner.members.get(term) {
            return Some(member.definition.clone());
        }

        if !Oid::is_numeric_oid(term) {
            if let Some(oid) = macros.and_then(|macros| macros.resolve(term).ok()) {
                if let Some(member) = inner.members.get(oid.as_str()) {
                    return Some(member.definition.clone());
                }
            }
        }

        let members = || inner.members.values().map(|member| &member.definition);
        members()
            .find(|definition| definition.read().matches_term(term))
            .or_else(|| members().find(|definition| definition.read().loosely_matches_term(term)))
            .cloned()
    }

    pub fn exists(&self, term: &str, macros: Option<&Macros>) -> bool {
        self.get(term, macros).is_some()
    }

    /// Whether a member holds exactly this key.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().members.contains_key(key)
    }

    pub fn by_key(&self, key: &str) -> Option<Shared<T>> {
        self.inner
            .lock()
            .members
            .get(key)
            .map(|member| member.definition.clone())
    }

    /// The member inserted at the given position.
    pub fn index(&self, position: usize) -> Option<Shared<T>> {
        self.inner
            .lock()
            .members
            .get_index(position)
            .map(|(_, member)| member.definition.clone())
    }

    /// Insertion sequence number of the member holding `key`.
    pub fn sequence_of(&self, key: &str) -> Option<usize> {
        self.inner
            .lock()
            .members
            .get(key)
            .map(|member| member.sequence)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().members.is_empty()
    }

    /// Handles to every member in insertion order.
    pub fn snapshot(&self) -> Vec<Shared<T>> {
        self.inner
            .lock()
            .members
            .values()
            .map(|member| member.definition.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Shared<T>> {
        self.snapshot().into_iter()
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().members.keys().cloned().collect()
    }

    /// Same cardinality and every member deep-equal to the counterpart
    /// holding the same key.
    pub fn equals(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        let ours = self.keyed_snapshot();
        let theirs = other.keyed_snapshot();
        ours.len() == theirs.len()
            && ours.iter().all(|(key, definition)| {
                theirs
                    .get(key)
                    .is_some_and(|counterpart| definition == counterpart)
            })
    }

    // Comparisons run on a copy so no two manifest locks are ever held at once.
    fn keyed_snapshot(&self) -> IndexMap<String, Shared<T>> {
        self.inner
            .lock()
            .members
            .iter()
            .map(|(key, member)| (key.clone(), member.definition.clone()))
            .collect()
    }

    /// Render every member with this formatter instead of its own.
    pub fn set_formatter(&self, formatter: Formatter<T>) {
        self.inner.lock().formatter = Some(formatter);
    }

    pub fn clear_formatter(&self) {
        self.inner.lock().formatter = None;
    }
}

impl<T: Unmarshal> Manifest<T> {
    /// Render every member in insertion order.
    ///
    /// The manifest formatter wins when one is set; otherwise each member is
    /// rendered with its own formatter or canonically.
    pub fn unmarshal_all(&self) -> SchemaResult<Vec<String>> {
        let (members, formatter) = {
            let inner = self.inner.lock();
            let members: Vec<Shared<T>> = inner
                .members
                .values()
                .map(|member| member.definition.clone())
                .collect();
            (members, inner.formatter.clone())
        };

        members
            .iter()
            .map(|definition| {
                let definition = definition.read();
                match &formatter {
                    Some(formatter) => formatter.format(&definition),
                    None => definition.unmarshal(),
                }
            })
            .collect()
    }
}

impl<T: Definition> PartialEq for Manifest<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Definition> fmt::Debug for Manifest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manifest")
            .field("kind", &T::KIND)
            .field("len", &self.len())
            .finish()
    }
}
