// crates/shared-kernel/src/error.rs
use std::fmt;

use thiserror::Error;

use crate::value_objects::CurrencyCode;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<KernelError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, KernelError>;

/// Where two currencies were found to disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchSite {
    /// Lower and upper bound of a single range.
    Bounds,
    /// A range and the range it was asked to contain.
    Ranges,
    /// Two amounts being compared.
    Amounts,
}

impl MismatchSite {
    pub fn left_label(self) -> &'static str {
        match self {
            Self::Bounds => "min",
            Self::Ranges => "range",
            Self::Amounts => "left",
        }
    }

    pub fn right_label(self) -> &'static str {
        match self {
            Self::Bounds => "max",
            Self::Ranges => "given",
            Self::Amounts => "right",
        }
    }
}

impl fmt::Display for MismatchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = match self {
            Self::Bounds => "Min and max objects",
            Self::Ranges => "Ranges",
            Self::Amounts => "Amounts",
        };
        f.write_str(subject)
    }
}

/// Domain-layer specific errors. All of them are caller errors and never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Given value \"{value}\" is invalid for {type_name}")]
    InvalidValue { type_name: &'static str, value: String },

    #[error("Undefined class constant \"{constant}\" in \"{type_name}\"")]
    UnknownConstant { constant: String, type_name: &'static str },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: String },

    #[error(
        "{site} must have same currencies, {} is {left} and {} is {right}",
        .site.left_label(),
        .site.right_label()
    )]
    CurrencyMismatch {
        left: CurrencyCode,
        right: CurrencyCode,
        site: MismatchSite,
    },

    #[error("Invalid currency code '{code}': expected three ASCII letters")]
    InvalidCurrencyCode { code: String },

    #[error("Value \"{value}\" matches no constant declared on {type_name}")]
    UnmatchedValue { type_name: &'static str, value: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<KernelError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| KernelError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| KernelError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

impl KernelError {
    /// Walks through context layers down to the domain failure.
    pub fn domain(&self) -> &DomainError {
        match self {
            Self::Context { source, .. } => source.domain(),
            Self::Domain(err) => err,
        }
    }
}
