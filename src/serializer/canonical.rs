//! Default rendering for every definition kind.

use super::{DefinitionMap, Formatter, Unmarshal};
use crate::definitions::{
    AttributeType, Definition, DefinitionKind, DitContentRule, DitStructureRule, LdapSyntax, MatchingRule,
    MatchingRuleUse, NameForm, ObjectClass, Shared, Usage,
};
use crate::value_objects::{Description, Extensions, Flags, Name, escape_qdstring};

/// Line layout for rendered definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Everything on one line, fields separated by single spaces.
    #[default]
    SingleLine,
    /// One field per line, indented.
    MultiLine,
}

impl Layout {
    fn separator(&self) -> &'static str {
        match self {
            Self::SingleLine => " ",
            Self::MultiLine => "\n    ",
        }
    }

    fn closing(&self) -> &'static str {
        match self {
            Self::SingleLine => " )",
            Self::MultiLine => "\n )",
        }
    }
}

/// Accumulates one definition's fields.
struct Line {
    buf: String,
    layout: Layout,
}

impl Line {
    fn open(identifier: &str, layout: Layout) -> Self {
        Self {
            buf: format!("( {}", identifier),
            layout,
        }
    }

    fn field(&mut self, label: &str, value: &str) {
        self.buf.push_str(self.layout.separator());
        self.buf.push_str(label);
        if !value.is_empty() {
            self.buf.push(' ');
            self.buf.push_str(value);
        }
    }

    fn names(mut self, name: &Name) -> Self {
        let quoted: Vec<String> = name.iter().map(quote).collect();
        if !quoted.is_empty() {
            self.field("NAME", &wrap(&quoted, " "));
        }
        self
    }

    fn description(mut self, description: &Description) -> Self {
        if !description.is_empty() {
            self.field("DESC", &quote(description.as_str()));
        }
        self
    }

    fn flag(mut self, flags: Flags, flag: Flags) -> Self {
        if flags.contains(flag) {
            if let Some(token) = flag.token() {
                self.field(token, "");
            }
        }
        self
    }

    fn bare(mut self, token: &str) -> Self {
        self.field(token, "");
        self
    }

    fn term(mut self, label: &str, term: Option<String>) -> Self {
        if let Some(term) = term {
            self.field(label, &term);
        }
        self
    }

    fn terms<T: Definition>(mut self, label: &str, refs: &[Shared<T>]) -> Self {
        let terms: Vec<String> = refs.iter().map(Shared::reference_term).collect();
        if !terms.is_empty() {
            self.field(label, &wrap(&terms, " $ "));
        }
        self
    }

    fn extensions(mut self, extensions: &Extensions) -> Self {
        for (label, values) in extensions.iter() {
            let quoted: Vec<String> = values.iter().map(|v| quote(v)).collect();
            let value = if quoted.is_empty() {
                "( )".to_string()
            } else {
                wrap(&quoted, " ")
            };
            self.field(label, &value);
        }
        self
    }

    fn close(mut self) -> String {
        self.buf.push_str(self.layout.closing());
        self.buf
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", escape_qdstring(value))
}

/// A lone value stays bare; several are parenthesized and joined.
fn wrap(values: &[String], joiner: &str) -> String {
    match values {
        [single] => single.clone(),
        many => format!("( {} )", many.join(joiner)),
    }
}

/// Builds the flattened table shared by every kind.
struct MapBuilder(DefinitionMap);

impl MapBuilder {
    fn new<T: Definition>(definition: &T) -> Self {
        let mut map = DefinitionMap::new();
        map.insert("TYPE".to_string(), vec![T::KIND.to_string()]);
        let identity = if T::KIND == DefinitionKind::DitStructureRule {
            "RULEID"
        } else {
            "OID"
        };
        map.insert(identity.to_string(), vec![definition.key()]);
        if let Some(name) = definition.name() {
            if !name.is_empty() {
                map.insert("NAME".to_string(), name.iter().map(str::to_string).collect());
            }
        }
        if !definition.description().is_empty() {
            map.insert(
                "DESC".to_string(),
                vec![definition.description().as_str().to_string()],
            );
        }
        for flag in definition.flags().iter() {
            if let Some(token) = flag.token() {
                map.insert(token.to_string(), vec!["TRUE".to_string()]);
            }
        }
        for (label, values) in definition.extensions().iter() {
            map.insert(label.to_string(), values.to_vec());
        }
        Self(map)
    }

    fn value(mut self, label: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.0.insert(label.to_string(), vec![value]);
        }
        self
    }

    fn refs<T: Definition>(mut self, label: &str, refs: &[Shared<T>]) -> Self {
        if !refs.is_empty() {
            self.0
                .insert(label.to_string(), refs.iter().map(Shared::key).collect());
        }
        self
    }

    fn build(self) -> DefinitionMap {
        self.0
    }
}

impl Unmarshal for LdapSyntax {
    fn formatter(&self) -> Option<&Formatter<Self>> {
        self.formatter.as_ref()
    }

    fn set_formatter(&mut self, formatter: Option<Formatter<Self>>) {
        self.formatter = formatter;
    }

    fn render(&self, layout: Layout) -> String {
        Line::open(self.oid.as_str(), layout)
            .description(&self.description)
            .flag(self.flags, Flags::OBSOLETE)
            .extensions(&self.extensions)
            .close()
    }

    fn map(&self) -> DefinitionMap {
        MapBuilder::new(self)
            .value(
                "HUMAN-READABLE",
                Some(if self.is_human_readable() { "TRUE" } else { "FALSE" }.to_string()),
            )
            .build()
    }
}

impl Unmarshal for MatchingRule {
    fn formatter(&self) -> Option<&Formatter<Self>> {
        self.formatter.as_ref()
    }

    fn set_formatter(&mut self, formatter: Option<Formatter<Self>>) {
        self.formatter = formatter;
    }

    fn render(&self, layout: Layout) -> String {
        Line::open(self.oid.as_str(), layout)
            .names(&self.name)
            .description(&self.description)
            .flag(self.flags, Flags::OBSOLETE)
            .term("SYNTAX", self.syntax.as_ref().map(Shared::key))
            .extensions(&self.extensions)
            .close()
    }

    fn map(&self) -> DefinitionMap {
        MapBuilder::new(self)
            .value("SYNTAX", self.syntax.as_ref().map(Shared::key))
            .build()
    }
}

impl Unmarshal for AttributeType {
    fn formatter(&self) -> Option<&Formatter<Self>> {
        self.formatter.as_ref()
    }

    fn set_formatter(&mut self, formatter: Option<Formatter<Self>>) {
        self.formatter = formatter;
    }

    fn render(&self, layout: Layout) -> String {
        let syntax = self.syntax.as_ref().map(|syntax| match self.mub {
            Some(mub) => format!("{}{{{}}}", syntax.key(), mub),
            None => syntax.key(),
        });
        let usage = (self.usage != Usage::UserApplications).then(|| self.usage.to_string());

        Line::open(self.oid.as_str(), layout)
            .names(&self.name)
            .description(&self.description)
            .flag(self.flags, Flags::OBSOLETE)
            .term("SUP", self.sup.as_ref().map(Shared::reference_term))
            .term("EQUALITY", self.equality.as_ref().map(Shared::reference_term))
            .term("ORDERING", self.ordering.as_ref().map(Shared::reference_term))
            .term("SUBSTR", self.substring.as_ref().map(Shared::reference_term))
            .term("SYNTAX", syntax)
            .flag(self.flags, Flags::SINGLE_VALUE)
            .flag(self.flags, Flags::COLLECTIVE)
            .flag(self.flags, Flags::NO_USER_MODIFICATION)
            .term("USAGE", usage)
            .extensions(&self.extensions)
            .close()
    }

    fn map(&self) -> DefinitionMap {
        MapBuilder::new(self)
            .value("SUP", self.sup.as_ref().map(Shared::key))
            .value("EQUALITY", self.equality.as_ref().map(Shared::key))
            .value("ORDERING", self.ordering.as_ref().map(Shared::key))
            .value("SUBSTR", self.substring.as_ref().map(Shared::key))
            .value("SYNTAX", self.syntax.as_ref().map(Shared::key))
            .value("MUB", self.mub.map(|mub| mub.to_string()))
            .value("USAGE", Some(self.usage.to_string()))
            .build()
    }
}

impl Unmarshal for ObjectClass {
    fn formatter(&self) -> Option<&Formatter<Self>> {
        self.formatter.as_ref()
    }

    fn set_formatter(&mut self, formatter: Option<Formatter<Self>>) {
        self.formatter = formatter;
    }

    fn render(&self, layout: Layout) -> String {
        Line::open(self.oid.as_str(), layout)
            .names(&self.name)
            .description(&self.description)
            .flag(self.flags, Flags::OBSOLETE)
            .terms("SUP", &self.sup)
            .bare(self.kind.as_str())
            .terms("MUST", &self.must)
            .terms("MAY", &self.may)
            .extensions(&self.extensions)
            .close()
    }

    fn map(&self) -> DefinitionMap {
        MapBuilder::new(self)
            .value("KIND", Some(self.kind.to_string()))
            .refs("SUP", &self.sup)
            .refs("MUST", &self.must)
            .refs("MAY", &self.may)
            .build()
    }
}

impl Unmarshal for MatchingRuleUse {
    fn formatter(&self) -> Option<&Formatter<Self>> {
        self.formatter.as_ref()
    }

    fn set_formatter(&mut self, formatter: Option<Formatter<Self>>) {
        self.formatter = formatter;
    }

    fn render(&self, layout: Layout) -> String {
        Line::open(self.oid.as_str(), layout)
            .names(&self.name)
            .description(&self.description)
            .flag(self.flags, Flags::OBSOLETE)
            .terms("APPLIES", &self.applies)
            .extensions(&self.extensions)
            .close()
    }

    fn map(&self) -> DefinitionMap {
        MapBuilder::new(self).refs("APPLIES", &self.applies).build()
    }
}

impl Unmarshal for DitContentRule {
    fn formatter(&self) -> Option<&Formatter<Self>> {
        self.formatter.as_ref()
    }

    fn set_formatter(&mut self, formatter: Option<Formatter<Self>>) {
        self.formatter = formatter;
    }

    fn render(&self, layout: Layout) -> String {
        Line::open(self.oid.as_str(), layout)
            .names(&self.name)
            .description(&self.description)
            .flag(self.flags, Flags::OBSOLETE)
            .terms("AUX", &self.aux)
            .terms("MUST", &self.must)
            .terms("MAY", &self.may)
            .terms("NOT", &self.not)
            .extensions(&self.extensions)
            .close()
    }

    fn map(&self) -> DefinitionMap {
        MapBuilder::new(self)
            .refs("AUX", &self.aux)
            .refs("MUST", &self.must)
            .refs("MAY", &self.may)
            .refs("NOT", &self.not)
            .build()
    }
}

impl Unmarshal for NameForm {
    fn formatter(&self) -> Option<&Formatter<Self>> {
        self.formatter.as_ref()
    }

    fn set_formatter(&mut self, formatter: Option<Formatter<Self>>) {
        self.formatter = formatter;
    }

    fn render(&self, layout: Layout) -> String {
        Line::open(self.oid.as_str(), layout)
            .names(&self.name)
            .description(&self.description)
            .flag(self.flags, Flags::OBSOLETE)
            .term("OC", self.oc.as_ref().map(Shared::reference_term))
            .terms("MUST", &self.must)
            .terms("MAY", &self.may)
            .extensions(&self.extensions)
            .close()
    }

    fn map(&self) -> DefinitionMap {
        MapBuilder::new(self)
            .value("OC", self.oc.as_ref().map(Shared::key))
            .refs("MUST", &self.must)
            .refs("MAY", &self.may)
            .build()
    }
}

impl Unmarshal for DitStructureRule {
    fn formatter(&self) -> Option<&Formatter<Self>> {
        self.formatter.as_ref()
    }

    fn set_formatter(&mut self, formatter: Option<Formatter<Self>>) {
        self.formatter = formatter;
    }

    fn render(&self, layout: Layout) -> String {
        Line::open(&self.key(), layout)
            .names(&self.name)
            .description(&self.description)
            .flag(self.flags, Flags::OBSOLETE)
            .term("FORM", self.form.as_ref().map(Shared::reference_term))
            .terms("SUP", &self.superiors)
            .extensions(&self.extensions)
            .close()
    }

    fn map(&self) -> DefinitionMap {
        MapBuilder::new(self)
            .value("FORM", self.form.as_ref().map(Shared::key))
            .refs("SUP", &self.superiors)
            .build()
    }
}
