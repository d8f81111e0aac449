//! Error types for schema marshaling, validation and registry operations.
//!
//! Two layers mirror the two halves of the crate: [`SchemaError`] covers the
//! scanner, serializer and registries, while [`ValidationError`] carries the
//! structural rules checked once a definition is fully assembled.

use crate::definitions::DefinitionKind;

/// Main error type for schema operations.
///
/// Every failure in the scanner or the validator aborts the whole operation
/// and surfaces as one of these variants; nothing is ever partially
/// committed to a registry.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Validation errors raised after a definition was assembled
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The raw definition was empty or whitespace only
    #[error("Empty definition input")]
    EmptyInput,

    /// Missing parentheses or bad spacing around the definition body
    #[error("Malformed definition framing: {reason}")]
    InvalidFraming { reason: String },

    /// A label the target kind does not recognize, or a repeated label
    #[error("Invalid or unrecognized label '{label}'")]
    InvalidLabel { label: String },

    /// A recognized label carried a value that could not be parsed
    #[error("Invalid value '{value}' for label '{label}': {reason}")]
    InvalidValue {
        label: String,
        value: String,
        reason: String,
    },

    /// Not a numeric object identifier
    #[error("Invalid OID '{value}'")]
    InvalidOid { value: String },

    /// Alias portion of a macro key is not registered
    #[error("Unresolvable OID alias '{alias}'")]
    UnresolvedAlias { alias: String },

    /// Non-numeric identifier given without an alias registry to resolve it
    #[error("Non-numeric identifier '{token}' requires an alias registry")]
    MissingAliasRegistry { token: String },

    /// A cross-reference needs a registry the scan context does not carry
    #[error("No {kind} registry available to resolve '{term}'")]
    MissingRegistry { kind: DefinitionKind, term: String },

    /// A cross-reference named a definition absent from its registry
    #[error("Unresolved {label} reference '{term}'")]
    UnresolvedReference { label: String, term: String },

    /// A DIT structure rule identifier was not a non-negative integer
    #[error("Invalid rule ID '{value}'")]
    InvalidRuleId { value: String },

    /// A name already identifies another member of the registry
    #[error("{kind} name '{name}' is already used by '{existing}'")]
    DuplicateName {
        kind: DefinitionKind,
        name: String,
        existing: String,
    },

    /// A definition was used before its identity was set
    #[error("Uninitialized {kind} instance used where a populated one was required")]
    ZeroInstance { kind: DefinitionKind },

    /// The requested operation does not apply to the target kind
    #[error("Unsupported target type: {kind}")]
    UnsupportedTarget { kind: String },

    /// A custom formatter strategy failed
    #[error("Formatting failed: {message}")]
    Format { message: String },

    /// JSON conversion errors from the flattened representation
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for assembled schema definitions.
///
/// These describe a structurally complete definition that breaks one of the
/// per-kind rules: flag exclusivity, mandatory references, inheritance kinds.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Definition has no OID or rule ID
    #[error("{kind} definition is missing its identifier")]
    MissingIdentifier { kind: DefinitionKind },

    /// A flag outside the legal subset for the kind
    #[error("Flags {flags} are not permitted on a {kind} definition")]
    InvalidFlags { kind: DefinitionKind, flags: String },

    /// COLLECTIVE and SINGLE-VALUE set together
    #[error("Attribute type '{oid}' cannot be both COLLECTIVE and SINGLE-VALUE")]
    CollectiveSingleValue { oid: String },

    /// COLLECTIVE on an operational attribute
    #[error("Collective attribute type '{oid}' must have userApplications usage")]
    CollectiveOperational { oid: String },

    /// NO-USER-MODIFICATION on a user attribute
    #[error("Attribute type '{oid}' is NO-USER-MODIFICATION but not operational")]
    UserModifiableUsage { oid: String },

    /// Name with bad characters or length
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Description too long or not UTF-8
    #[error("Invalid description: {reason}")]
    InvalidDescription { reason: String },

    /// A kind that requires a description has none
    #[error("{kind} '{oid}' requires a description")]
    MissingDescription { kind: DefinitionKind, oid: String },

    /// Matching rule without a syntax
    #[error("{kind} '{oid}' is missing its syntax")]
    MissingSyntax { kind: DefinitionKind, oid: String },

    /// Attribute type with no syntax anywhere on its supertype chain
    #[error("Attribute type '{oid}' has no syntax on its supertype chain")]
    UnresolvedSyntaxChain { oid: String },

    /// Minimum upper bound given without a local syntax
    #[error("Attribute type '{oid}' declares a length bound without a syntax")]
    BoundWithoutSyntax { oid: String },

    /// Matching rule referenced from the wrong slot
    #[error("Matching rule '{rule}' cannot be used as {slot} rule")]
    MatchingRuleKindMismatch { rule: String, slot: String },

    /// Name form violations
    #[error("Invalid name form '{oid}': {reason}")]
    InvalidNameForm { oid: String, reason: String },

    /// Structure rule without a name form
    #[error("DIT structure rule '{rule_id}' is missing its name form")]
    MissingForm { rule_id: String },

    /// Definition that names itself as a superior
    #[error("{kind} '{id}' cannot be its own superior")]
    SelfSuperior { kind: DefinitionKind, id: String },

    /// Superior chain loops back on itself
    #[error("{kind} '{id}' has a cyclic superior chain")]
    CyclicSuperior { kind: DefinitionKind, id: String },

    /// Superior class of a kind incompatible with the subclass
    #[error("Object class '{oid}' ({kind}) cannot inherit from '{superior}' ({superior_kind})")]
    SuperiorKindConflict {
        oid: String,
        kind: String,
        superior: String,
        superior_kind: String,
    },

    /// Content rule AUX entry that is not an auxiliary class
    #[error("Content rule '{oid}' lists non-auxiliary class '{class}'")]
    InvalidAuxiliaryClass { oid: String, class: String },

    /// Content rule whose OID does not name a structural class
    #[error("Content rule '{oid}' does not correspond to a structural object class")]
    NonStructuralContentRule { oid: String },

    /// Matching rule use without any applicable attributes
    #[error("Matching rule use '{oid}' applies to no attribute types")]
    EmptyApplies { oid: String },

    /// Extension label not of the X- form
    #[error("Invalid extension label '{label}'")]
    InvalidExtensionLabel { label: String },

    /// Extension value that cannot be rendered and scanned back unchanged
    #[error("Invalid value for extension '{label}': {reason}")]
    InvalidExtensionValue { label: String, reason: String },

    /// General validation error with custom message
    #[error("Validation failed: {message}")]
    Custom { message: String },
}

// Convenience methods for creating common errors
impl SchemaError {
    /// Create a framing error
    pub fn framing(reason: impl Into<String>) -> Self {
        Self::InvalidFraming {
            reason: reason.into(),
        }
    }

    /// Create an invalid value error for a label
    pub fn invalid_value(
        label: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            label: label.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an unresolved reference error
    pub fn unresolved(label: impl Into<String>, term: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            label: label.into(),
            term: term.into(),
        }
    }

    /// Create a formatter failure
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}

impl ValidationError {
    /// Create an invalid name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid name form error
    pub fn invalid_name_form(oid: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNameForm {
            oid: oid.into(),
            reason: reason.into(),
        }
    }

    /// Create a custom validation error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
