//! LDAP syntax definitions.
//!
//! A syntax has no `NAME`; it is identified by OID and described by its
//! mandatory `DESC`. Because of that, registry lookups by a textual term
//! fall back to matching the description.

use super::{Definition, DefinitionKind, Shared};
use crate::serializer::Formatter;
use crate::value_objects::{Description, Extensions, Flags, Oid};

/// Extension that marks a syntax as carrying binary values.
pub const NOT_HUMAN_READABLE: &str = "X-NOT-HUMAN-READABLE";

pub type LdapSyntaxRef = Shared<LdapSyntax>;

/// An `ldapSyntaxes` definition.
///
/// ```rust
/// use dirschema::definitions::{Definition, LdapSyntax};
/// use dirschema::value_objects::{Description, Oid};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut syntax = LdapSyntax::new(
///     Oid::new("1.3.6.1.4.1.1466.115.121.1.40")?,
///     Description::new("Octet String")?,
/// );
/// assert!(syntax.is_human_readable());
/// syntax.set_human_readable(false);
/// assert!(syntax.extensions().contains("X-NOT-HUMAN-READABLE"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LdapSyntax {
    pub(crate) oid: Oid,
    pub(crate) description: Description,
    pub(crate) flags: Flags,
    pub(crate) extensions: Extensions,
    pub(crate) formatter: Option<Formatter<LdapSyntax>>,
}

impl Default for LdapSyntax {
    fn default() -> Self {
        Self {
            oid: Oid::default(),
            description: Description::default(),
            flags: Flags::HUMAN_READABLE,
            extensions: Extensions::new(),
            formatter: None,
        }
    }
}

impl LdapSyntax {
    pub fn new(oid: Oid, description: Description) -> Self {
        Self {
            oid,
            description,
            ..Self::default()
        }
    }

    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    pub fn is_human_readable(&self) -> bool {
        self.flags.contains(Flags::HUMAN_READABLE)
    }

    /// Toggle human readability, keeping the `X-NOT-HUMAN-READABLE`
    /// extension in step with the flag.
    pub fn set_human_readable(&mut self, readable: bool) {
        self.flags.set(Flags::HUMAN_READABLE, readable);
        self.sync_extension();
    }

    /// Derive the flag from the extension, as done after scanning.
    pub(crate) fn sync_flag_from_extension(&mut self) {
        let not_readable = self
            .extensions
            .get(NOT_HUMAN_READABLE)
            .is_some_and(|values| values.iter().any(|v| v.eq_ignore_ascii_case("TRUE")));
        self.flags.set(Flags::HUMAN_READABLE, !not_readable);
    }

    fn sync_extension(&mut self) {
        if self.is_human_readable() {
            self.extensions.remove(NOT_HUMAN_READABLE);
        } else if !self.extensions.contains(NOT_HUMAN_READABLE) {
            // Label is a constant in the valid X- form.
            let _ = self.extensions.set(NOT_HUMAN_READABLE, ["TRUE"]);
        }
    }

    /// Lowercase the text and strip the word "syntax" and all whitespace.
    fn normalize(text: &str) -> String {
        text.to_lowercase()
            .replace("syntax", "")
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

impl PartialEq for LdapSyntax {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid && self.flags == other.flags && self.extensions == other.extensions
    }
}

impl Definition for LdapSyntax {
    const KIND: DefinitionKind = DefinitionKind::LdapSyntax;

    fn key(&self) -> String {
        self.oid.to_string()
    }

    fn is_zero(&self) -> bool {
        self.oid.is_zero()
    }

    fn description(&self) -> &Description {
        &self.description
    }

    fn set_description(&mut self, description: Description) {
        self.description = description;
    }

    fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }

    fn flags(&self) -> Flags {
        self.flags
    }

    fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    fn legal_flags() -> Flags {
        Flags::SYNTAX_LEGAL
    }

    fn matches_term(&self, term: &str) -> bool {
        let term = Self::normalize(term);
        !term.is_empty() && Self::normalize(self.description.as_str()) == term
    }

    fn loosely_matches_term(&self, term: &str) -> bool {
        let term = Self::normalize(term);
        !term.is_empty() && Self::normalize(self.description.as_str()).contains(&term)
    }

    fn reference_term(&self) -> String {
        self.key()
    }

    fn on_flag_change(&mut self, flag: Flags, _on: bool) {
        if flag.contains(Flags::HUMAN_READABLE) {
            self.sync_extension();
        }
    }
}
