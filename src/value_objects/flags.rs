//! Boolean definition flags.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Bare boolean markers a definition may carry.
    ///
    /// Each definition kind accepts only a legal subset; see
    /// [`Definition::legal_flags`](crate::definitions::Definition::legal_flags).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Flags: u8 {
        /// `OBSOLETE`
        const OBSOLETE = 1 << 0;
        /// `SINGLE-VALUE`
        const SINGLE_VALUE = 1 << 1;
        /// `COLLECTIVE`
        const COLLECTIVE = 1 << 2;
        /// `NO-USER-MODIFICATION`
        const NO_USER_MODIFICATION = 1 << 3;
        /// Syntax values are human readable. Driven by `X-NOT-HUMAN-READABLE`.
        const HUMAN_READABLE = 1 << 4;
    }
}

impl Flags {
    /// Flags valid on an LDAP syntax.
    pub const SYNTAX_LEGAL: Flags = Flags::OBSOLETE.union(Flags::HUMAN_READABLE);

    /// Flags valid on an attribute type.
    pub const ATTRIBUTE_TYPE_LEGAL: Flags = Flags::OBSOLETE
        .union(Flags::SINGLE_VALUE)
        .union(Flags::COLLECTIVE)
        .union(Flags::NO_USER_MODIFICATION);

    /// Flags valid on every other kind.
    pub const OBSOLETE_ONLY: Flags = Flags::OBSOLETE;

    /// The bare token for a single flag, if it has one.
    pub fn token(self) -> Option<&'static str> {
        [
            (Flags::OBSOLETE, "OBSOLETE"),
            (Flags::SINGLE_VALUE, "SINGLE-VALUE"),
            (Flags::COLLECTIVE, "COLLECTIVE"),
            (Flags::NO_USER_MODIFICATION, "NO-USER-MODIFICATION"),
        ]
        .into_iter()
        .find(|(flag, _)| *flag == self)
        .map(|(_, token)| token)
    }

    /// Render as a `|`-separated list of names for error messages.
    pub fn describe(self) -> String {
        self.iter_names()
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
            .join("|")
    }
}
