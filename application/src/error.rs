//! [`Error`]-related definitions.

use std::fmt;

use derive_more::Error as StdError;
use itertools::Itertools as _;
use serde_json::json;
use service::command::{publish_listing, save_listing_draft, unpublish_listing};
use tracerr::{Trace, Traced};

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[exit = $exit_code:literal]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        #[repr(u16)]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            exit_code: $exit_code,
                            message: $message.to_string(),
                            details: None,
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

define_error! {
    enum InputError {
        #[code = "CANNOT_READ_INPUT"]
        #[exit = 2]
        #[message = "Cannot read the input"]
        Read,

        #[code = "MALFORMED_INPUT"]
        #[exit = 2]
        #[message = "Input is not a valid JSON document of the expected shape"]
        Malformed,

        #[code = "CANNOT_WRITE_OUTPUT"]
        #[exit = 2]
        #[message = "Cannot write the output"]
        Write,
    }
}

define_error! {
    enum StartupError {
        #[code = "INVALID_CONFIG"]
        #[exit = 78]
        #[message = "Configuration is invalid"]
        InvalidConfig,
    }
}

/// Command line [`Error`].
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// Process exit code of this [`Error`].
    pub exit_code: u8,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,

    /// Machine-readable details of this [`Error`].
    pub details: Option<serde_json::Value>,
}

impl Error {
    /// Create a new [`Error`] representing an internal error.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: "INTERNAL_ERROR",
            exit_code: 70,
            message: msg.to_string(),
            details: None,
            backtrace: None,
        }
    }

    /// Converts this [`Error`] into its JSON report.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut report = json!({
            "code": self.code,
            "message": self.message,
            "backtrace": self
                .backtrace
                .iter()
                .flat_map(|trace| trace.iter())
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
        });
        if let (Some(details), Some(obj)) =
            (&self.details, report.as_object_mut())
        {
            drop(obj.insert("details".to_owned(), details.clone()));
        }
        report
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            exit_code: _,
            backtrace,
            message,
            details: _,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for save_listing_draft::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        let Self::Invalid(errors) = self;
        Some(Error {
            code: "INVALID_DRAFT",
            exit_code: 1,
            message: self.to_string(),
            details: serde_json::to_value(errors).ok(),
            backtrace: None,
        })
    }
}

impl AsError for publish_listing::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        let Self::PublishGateNotPassed(_, failures) = self;
        Some(Error {
            code: "PUBLISH_GATE_NOT_PASSED",
            exit_code: 1,
            message: self.to_string(),
            details: serde_json::to_value(failures).ok(),
            backtrace: None,
        })
    }
}

impl AsError for unpublish_listing::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error {
            code: "LISTING_NOT_ACTIVE",
            exit_code: 1,
            message: self.to_string(),
            details: None,
            backtrace: None,
        })
    }
}

#[cfg(test)]
mod spec {
    use service::{
        command::{publish_listing, save_listing_draft},
        domain::listing::{self, Draft},
    };

    use super::{AsError as _, Error, InputError};

    #[test]
    fn reports_invalid_draft() {
        let errors = Draft::default().validate();
        let err = tracerr::new!(save_listing_draft::ExecutionError::Invalid(
            errors.clone()
        ))
        .into_error();

        assert_eq!(err.code, "INVALID_DRAFT");
        assert_eq!(err.exit_code, 1);
        assert!(err.backtrace.is_some());

        let report = err.to_json();
        assert_eq!(report["code"], "INVALID_DRAFT");
        assert_eq!(report["details"]["roomName"], "ROOM_NAME_REQUIRED");
        assert_eq!(
            report["details"].as_object().map(serde_json::Map::len),
            Some(errors.len()),
        );
    }

    #[test]
    fn reports_failed_checks() {
        let draft = Draft::default();
        let err = publish_listing::ExecutionError::PublishGateNotPassed(
            listing::Id::new(),
            draft.publish_gate().to_failures(),
        )
        .into_error();

        assert_eq!(err.code, "PUBLISH_GATE_NOT_PASSED");
        let report = err.to_json();
        assert_eq!(report["details"][0], "roomName");
        assert!(report["backtrace"].as_array().is_some_and(Vec::is_empty));
    }

    #[test]
    fn converts_defined_errors() {
        let err = Error::from(InputError::Malformed);

        assert_eq!(err.code, "MALFORMED_INPUT");
        assert_eq!(err.exit_code, 2);
        assert_eq!(
            err.to_string(),
            "[MALFORMED_INPUT]: Input is not a valid JSON document of the \
             expected shape",
        );
        assert!(err.to_json().get("details").is_none());
    }
}
