//! Restricted enumerations: closed sets of named values declared per type.
//!
//! A type opts in by implementing [`EnumDefinition`], usually through the
//! [`restricted_enum!`](crate::restricted_enum) macro, and is then used as
//! `Enum<MyType>`.

mod macros;

use std::{fmt, hash::Hash, marker::PhantomData};

use ddd_primitives_shared_kernel::{
    DomainError, DomainResult,
    inflector::{camelize, camelize_constant},
};

/// Registration table of a restricted enumeration.
pub trait EnumDefinition: 'static {
    type Value: PartialEq + Clone + fmt::Debug + fmt::Display + 'static;

    /// Short type name used in display tokens and error messages.
    const TYPE_NAME: &'static str;

    /// Declared `(name, value)` pairs in declaration order.
    const CONSTANTS: &'static [(&'static str, Self::Value)];

    /// Whether the unset sentinel passes validation.
    const UNSET_ALLOWED: bool = true;

    fn is_valid(value: Option<&Self::Value>) -> bool {
        match value {
            None => Self::UNSET_ALLOWED,
            Some(value) => Self::CONSTANTS.iter().any(|(_, declared)| declared == value),
        }
    }

    fn lookup(name: &str) -> Option<&'static Self::Value> {
        Self::CONSTANTS.iter().find(|(declared, _)| *declared == name).map(|(_, value)| value)
    }

    fn name_of(value: &Self::Value) -> Option<&'static str> {
        Self::CONSTANTS.iter().find(|(_, declared)| declared == value).map(|(name, _)| *name)
    }
}

/// Immutable value restricted to the constants declared by `D`.
pub struct Enum<D: EnumDefinition> {
    value: Option<D::Value>,
    marker: PhantomData<fn() -> D>,
}

impl<D: EnumDefinition> Enum<D> {
    /// Builds an instance, checking the value against `D` when `validate` is set.
    pub fn with_validation(value: Option<D::Value>, validate: bool) -> DomainResult<Self> {
        if validate && !D::is_valid(value.as_ref()) {
            return Err(DomainError::InvalidValue {
                type_name: D::TYPE_NAME,
                value: value.map_or_else(|| "null".to_string(), |v| v.to_string()),
            });
        }
        if !validate {
            tracing::debug!(type_name = D::TYPE_NAME, value = ?value, "enumeration built without validation");
        }
        Ok(Self::wrap(value))
    }

    pub fn new(value: D::Value) -> DomainResult<Self> {
        Self::with_validation(Some(value), true)
    }

    pub fn unset() -> DomainResult<Self> {
        Self::with_validation(None, true)
    }

    /// Accepts any value as-is, for trusted callers such as storage hydration.
    pub fn new_unchecked(value: D::Value) -> Self {
        tracing::debug!(type_name = D::TYPE_NAME, value = %value, "enumeration built without validation");
        Self::wrap(Some(value))
    }

    /// Named factory resolved at runtime from a constant identifier.
    pub fn of(constant: &str) -> DomainResult<Self> {
        D::lookup(constant).map(|value| Self::wrap(Some(value.clone()))).ok_or_else(|| {
            DomainError::UnknownConstant { constant: constant.to_string(), type_name: D::TYPE_NAME }
        })
    }

    #[doc(hidden)]
    pub fn from_declared(value: D::Value) -> Self {
        debug_assert!(D::is_valid(Some(&value)));
        Self::wrap(Some(value))
    }

    fn wrap(value: Option<D::Value>) -> Self {
        Self { value, marker: PhantomData }
    }

    #[inline]
    pub fn get(&self) -> Option<&D::Value> {
        self.value.as_ref()
    }

    #[inline]
    pub fn into_inner(self) -> Option<D::Value> {
        self.value
    }

    #[inline]
    pub fn is(&self, candidate: &D::Value) -> bool {
        self.value.as_ref() == Some(candidate)
    }

    #[inline]
    pub fn is_unset(&self) -> bool {
        self.value.is_none()
    }

    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }

    pub fn is_one_of(&self, candidates: &[D::Value]) -> bool {
        self.value.as_ref().is_some_and(|value| candidates.contains(value))
    }

    /// First declared constant bound to the wrapped value.
    pub fn constant_name(&self) -> Option<&'static str> {
        self.value.as_ref().and_then(D::name_of)
    }

    pub fn values() -> impl Iterator<Item = &'static D::Value> {
        D::CONSTANTS.iter().map(|(_, value)| value)
    }

    pub fn constant_names() -> impl Iterator<Item = &'static str> {
        D::CONSTANTS.iter().map(|(name, _)| *name)
    }

    /// Strict counterpart of `Display`: unmatched values are an error instead
    /// of rendering with an empty constant segment.
    pub fn display_token(&self) -> DomainResult<String> {
        match (&self.value, self.constant_name()) {
            (None, _) => Ok(String::new()),
            (Some(_), Some(name)) => Ok(token(D::TYPE_NAME, name)),
            (Some(value), None) => {
                Err(DomainError::UnmatchedValue { type_name: D::TYPE_NAME, value: value.to_string() })
            }
        }
    }
}

fn token(type_name: &str, constant: &str) -> String {
    format!("{}.{}", camelize(type_name), camelize_constant(constant))
}

impl<D: EnumDefinition> Clone for Enum<D> {
    fn clone(&self) -> Self {
        Self::wrap(self.value.clone())
    }
}

impl<D: EnumDefinition> fmt::Debug for Enum<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(D::TYPE_NAME).field(&self.value).finish()
    }
}

impl<D: EnumDefinition> PartialEq for Enum<D> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<D: EnumDefinition> Eq for Enum<D> where D::Value: Eq {}

impl<D: EnumDefinition> Hash for Enum<D>
where
    D::Value: Hash,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<D: EnumDefinition> fmt::Display for Enum<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_none() {
            return Ok(());
        }
        f.write_str(&token(D::TYPE_NAME, self.constant_name().unwrap_or_default()))
    }
}
