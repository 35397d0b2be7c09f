use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::client::DocumentClientError;

// ---------------------------------------------------------------------------
// FailureKind
// ---------------------------------------------------------------------------

/// The concrete kind of a raised failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// A failure reported by the data store client, with status metadata.
    DocumentClient,
    /// A caller passed an invalid argument.
    IllegalArgument,
    /// An operation was attempted in an invalid state.
    IllegalState,
    /// Transport or file-system failure.
    Io,
    /// Any other failure, identified by its type name.
    Other(String),
}

impl FailureKind {
    /// Returns `true` for kinds that signal programming errors rather than
    /// store-reported failures.
    pub fn is_runtime(&self) -> bool {
        matches!(self, Self::IllegalArgument | Self::IllegalState)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentClient => write!(f, "DocumentClientError"),
            Self::IllegalArgument => write!(f, "IllegalArgument"),
            Self::IllegalState => write!(f, "IllegalState"),
            Self::Io => write!(f, "Io"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// KindTag
// ---------------------------------------------------------------------------

/// A tag a failure's kind is matched against.
///
/// Tags form a shallow hierarchy: [`KindTag::Any`] matches every failure,
/// [`KindTag::Runtime`] matches the runtime kinds, and [`KindTag::Exact`]
/// matches one kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KindTag {
    Any,
    Runtime,
    Exact(FailureKind),
}

impl KindTag {
    /// Returns `true` if `kind` falls under this tag.
    pub fn matches(&self, kind: &FailureKind) -> bool {
        match self {
            Self::Any => true,
            Self::Runtime => kind.is_runtime(),
            Self::Exact(expected) => expected == kind,
        }
    }
}

impl From<FailureKind> for KindTag {
    fn from(kind: FailureKind) -> Self {
        Self::Exact(kind)
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any failure"),
            Self::Runtime => write!(f, "runtime failure"),
            Self::Exact(kind) => write!(f, "{kind}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure
// ---------------------------------------------------------------------------

/// A raised failure, as observed by a test after exercising the store.
///
/// Causes are shared through `Arc` so that a test can hold on to the exact
/// instance it expects to see again.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Failure {
    #[error(transparent)]
    DocumentClient(DocumentClientError),

    #[error("{message}")]
    IllegalArgument {
        message: String,
        #[source]
        cause: Option<Arc<Failure>>,
    },

    #[error("{message}")]
    IllegalState {
        message: String,
        #[source]
        cause: Option<Arc<Failure>>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        cause: Option<Arc<Failure>>,
    },

    #[error("{type_name}: {message}")]
    Other {
        type_name: String,
        message: String,
        #[source]
        cause: Option<Arc<Failure>>,
    },
}

impl Failure {
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::IllegalArgument {
            message: message.into(),
            cause: None,
        }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
            cause: None,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            cause: None,
        }
    }

    pub fn other(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Other {
            type_name: type_name.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Replace the cause of this failure.
    pub fn with_cause(mut self, new_cause: Arc<Failure>) -> Self {
        match &mut self {
            Self::DocumentClient(e) => e.cause = Some(new_cause),
            Self::IllegalArgument { cause, .. }
            | Self::IllegalState { cause, .. }
            | Self::Io { cause, .. }
            | Self::Other { cause, .. } => *cause = Some(new_cause),
        }
        self
    }

    /// The concrete kind of this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::DocumentClient(_) => FailureKind::DocumentClient,
            Self::IllegalArgument { .. } => FailureKind::IllegalArgument,
            Self::IllegalState { .. } => FailureKind::IllegalState,
            Self::Io { .. } => FailureKind::Io,
            Self::Other { type_name, .. } => FailureKind::Other(type_name.clone()),
        }
    }

    /// Returns `true` if this failure's kind falls under `tag`.
    pub fn is_a(&self, tag: &KindTag) -> bool {
        tag.matches(&self.kind())
    }

    /// The human-readable message, without the type prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::DocumentClient(e) => &e.message,
            Self::IllegalArgument { message, .. }
            | Self::IllegalState { message, .. }
            | Self::Io { message, .. }
            | Self::Other { message, .. } => message,
        }
    }

    /// The failure that caused this one, if any.
    pub fn cause(&self) -> Option<&Failure> {
        match self {
            Self::DocumentClient(e) => e.cause.as_deref(),
            Self::IllegalArgument { cause, .. }
            | Self::IllegalState { cause, .. }
            | Self::Io { cause, .. }
            | Self::Other { cause, .. } => cause.as_deref(),
        }
    }

    /// View this failure as a store client error, if it is one.
    pub fn as_client(&self) -> Option<&DocumentClientError> {
        match self {
            Self::DocumentClient(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DocumentClientError> for Failure {
    fn from(error: DocumentClientError) -> Self {
        Self::DocumentClient(error)
    }
}
