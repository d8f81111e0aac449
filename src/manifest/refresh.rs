//! Derivation of matching rule uses from registered attribute types.

use super::Manifest;
use crate::definitions::{AttributeType, MatchingRuleUse, Shared};
use log::debug;

impl Manifest<MatchingRuleUse> {
    /// Bring every use up to date with the attribute types that reference
    /// its matching rule.
    ///
    /// For each equality, ordering and substring rule named by an attribute
    /// type, the use keyed by that rule's OID is created when missing and the
    /// attribute type is added to its `APPLIES` list. Existing entries are
    /// never removed or duplicated, so running this twice has the same
    /// effect as running it once. Returns how many `APPLIES` entries were
    /// added.
    pub fn refresh(&self, attribute_types: &Manifest<AttributeType>) -> usize {
        let mut added = 0;

        for attribute in attribute_types.iter() {
            let rules: Vec<_> = {
                let at = attribute.read();
                [&at.equality, &at.ordering, &at.substring]
                    .into_iter()
                    .flatten()
                    .cloned()
                    .collect()
            };

            for rule in rules {
                let key = rule.key();
                let usage = match self.by_key(&key) {
                    Some(existing) => existing,
                    None => {
                        let created = Shared::new(MatchingRuleUse::for_rule(&rule.read()));
                        if !self.set(created.clone()) {
                            continue;
                        }
                        debug!("Derived matchingRuleUse '{}'", key);
                        created
                    }
                };

                if usage.write().add_applies(attribute.clone()) {
                    added += 1;
                }
            }
        }

        added
    }
}
