use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Error kinds for Mangrove operations.
///
/// Each kind describes one category of failure, enabling precise error
/// handling at call sites without string matching.
///
/// # Examples
///
/// ```rust,ignore
/// use mangrove::errors::{ErrorKind, MangroveError, MangroveResult};
///
/// fn example() -> MangroveResult<()> {
///     Err(MangroveError::new("collection not bound", ErrorKind::NotInitialized))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A data operation was invoked before a collection was bound
    NotInitialized,
    /// A malformed or out-of-range input was supplied
    InvalidArgument,
    /// The supplied identifier is not a valid ObjectId
    InvalidId,
    /// A single-result query matched zero records
    NotFound,
    /// A single-result query matched more than one record
    MultipleMatches,
    /// Failure while listing or creating an index
    IndexingError,
    /// Error mapping an entity to/from its document representation
    ObjectMappingError,
    /// Any failure surfaced by the underlying store, propagated unchanged
    StoreError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::NotInitialized => write!(f, "Not initialized"),
            ErrorKind::InvalidArgument => write!(f, "Invalid argument"),
            ErrorKind::InvalidId => write!(f, "Invalid ID"),
            ErrorKind::NotFound => write!(f, "Not found"),
            ErrorKind::MultipleMatches => write!(f, "Multiple matches"),
            ErrorKind::IndexingError => write!(f, "Indexing error"),
            ErrorKind::ObjectMappingError => write!(f, "Object mapping error"),
            ErrorKind::StoreError => write!(f, "Store error"),
        }
    }
}

/// Custom Mangrove error type.
///
/// `MangroveError` carries the error message, its kind, and an optional
/// cause. Store failures keep the driver error as the cause so callers can
/// inspect the original failure through `source()`.
pub struct MangroveError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl MangroveError {
    /// Creates a new `MangroveError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        MangroveError {
            message: message.to_string(),
            error_kind,
            cause: None,
        }
    }

    /// Creates a new `MangroveError` with a cause error attached.
    ///
    /// The cause is preserved for debugging and is reachable through
    /// `std::error::Error::source`.
    pub fn with_cause(
        message: &str,
        error_kind: ErrorKind,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        MangroveError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync)> {
        self.cause.as_deref()
    }
}

impl Display for MangroveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for MangroveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{} ({})\nCaused by: {:?}", self.message, self.error_kind, cause),
            None => write!(f, "{} ({})", self.message, self.error_kind),
        }
    }
}

impl Error for MangroveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

/// A result type alias for Mangrove operations.
///
/// All fallible operations in this crate return `MangroveResult<T>`.
pub type MangroveResult<T> = Result<T, MangroveError>;

// From trait implementations for automatic error conversion
impl From<mongodb::error::Error> for MangroveError {
    fn from(err: mongodb::error::Error) -> Self {
        MangroveError::with_cause(
            &format!("Store error: {}", err),
            ErrorKind::StoreError,
            err,
        )
    }
}

impl From<bson::oid::Error> for MangroveError {
    fn from(err: bson::oid::Error) -> Self {
        MangroveError::with_cause(
            &format!("Invalid ObjectId: {}", err),
            ErrorKind::InvalidId,
            err,
        )
    }
}

impl From<bson::ser::Error> for MangroveError {
    fn from(err: bson::ser::Error) -> Self {
        MangroveError::with_cause(
            &format!("BSON serialization error: {}", err),
            ErrorKind::ObjectMappingError,
            err,
        )
    }
}

impl From<bson::de::Error> for MangroveError {
    fn from(err: bson::de::Error) -> Self {
        MangroveError::with_cause(
            &format!("BSON deserialization error: {}", err),
            ErrorKind::ObjectMappingError,
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mangrove_error_new_creates_error() {
        let error = MangroveError::new("An error occurred", ErrorKind::StoreError);
        assert_eq!(error.message(), "An error occurred");
        assert_eq!(error.kind(), &ErrorKind::StoreError);
        assert!(error.cause().is_none());
    }

    #[test]
    fn mangrove_error_with_cause_creates_error() {
        let cause = std::io::Error::other("connection reset");
        let error = MangroveError::with_cause("Store unreachable", ErrorKind::StoreError, cause);
        assert_eq!(error.message(), "Store unreachable");
        assert_eq!(error.kind(), &ErrorKind::StoreError);
        assert!(error.cause().is_some());
    }

    #[test]
    fn mangrove_error_display_formats_correctly() {
        let error = MangroveError::new("collection not bound", ErrorKind::NotInitialized);
        assert_eq!(format!("{}", error), "collection not bound");
    }

    #[test]
    fn mangrove_error_debug_formats_with_cause() {
        let cause = std::io::Error::other("connection reset");
        let error = MangroveError::with_cause("Store unreachable", ErrorKind::StoreError, cause);
        let formatted = format!("{:?}", error);
        assert!(formatted.contains("Store unreachable"));
        assert!(formatted.contains("Caused by:"));
    }

    #[test]
    fn mangrove_error_source_returns_cause() {
        let cause = std::io::Error::other("connection reset");
        let error = MangroveError::with_cause("Store unreachable", ErrorKind::StoreError, cause);
        assert!(error.source().is_some());
    }

    #[test]
    fn mangrove_error_source_returns_none_when_no_cause() {
        let error = MangroveError::new("not found", ErrorKind::NotFound);
        assert!(error.source().is_none());
    }

    #[test]
    fn error_kind_display_is_human_readable() {
        assert_eq!(format!("{}", ErrorKind::NotInitialized), "Not initialized");
        assert_eq!(format!("{}", ErrorKind::MultipleMatches), "Multiple matches");
        assert_eq!(format!("{}", ErrorKind::StoreError), "Store error");
    }

    #[test]
    fn error_kind_equality() {
        let error1 = MangroveError::new("Error 1", ErrorKind::NotFound);
        let error2 = MangroveError::new("Error 2", ErrorKind::NotFound);
        let error3 = MangroveError::new("Error 3", ErrorKind::MultipleMatches);

        assert_eq!(error1.kind(), error2.kind());
        assert_ne!(error1.kind(), error3.kind());
    }

    #[test]
    fn from_oid_error_maps_to_invalid_id() {
        let oid_err = bson::oid::ObjectId::parse_str("not-an-object-id").unwrap_err();
        let error: MangroveError = oid_err.into();
        assert_eq!(error.kind(), &ErrorKind::InvalidId);
        assert!(error.cause().is_some());
    }

    #[test]
    fn from_bson_de_error_maps_to_object_mapping() {
        let doc = bson::doc! { "count": "not a number" };
        let result: Result<i64, _> = bson::from_bson(doc.get("count").unwrap().clone());
        let error: MangroveError = result.unwrap_err().into();
        assert_eq!(error.kind(), &ErrorKind::ObjectMappingError);
    }

    #[test]
    fn question_mark_operator_with_from() {
        fn parse_id(raw: &str) -> MangroveResult<bson::oid::ObjectId> {
            let id = bson::oid::ObjectId::parse_str(raw)?;
            Ok(id)
        }

        assert!(parse_id("507f1f77bcf86cd799439011").is_ok());
        let err = parse_id("zzz").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidId);
    }
}
