use std::fmt;

use tracing::error;

/// Enum representing errors in the Bemtron system. It can be either a `CriticalError` or a `GeneralError`,
/// each wrapping a specific type of error information.
///
/// Class derivation itself never fails; errors only come from the ambient surface
/// (loading options from disk, preparing the log sink).
#[derive(Clone, PartialEq, Debug)]
pub enum BemtronError {
    /// A critical error, the caller cannot continue with the requested setup.
    CriticalError(BemtronErrorType),
    /// A general error, usually recoverable by fixing the input and retrying.
    GeneralError(BemtronErrorType),
}

impl fmt::Display for BemtronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TYPE: {:?}\nKIND: {:?}\nACTION: {:?}\nMESSAGE: {}",
            self.get_type(),
            self.get_kind(),
            self.get_action(),
            self.get_message()
        )
    }
}

impl std::error::Error for BemtronError {}

impl BemtronError {
    /// Checks if the error is a critical error.
    pub fn is_critical(&self) -> bool {
        matches!(self, BemtronError::CriticalError(_))
    }

    /// Checks if the error is a general error.
    pub fn is_general(&self) -> bool {
        matches!(self, BemtronError::GeneralError(_))
    }

    /// Returns the action associated with this error.
    pub fn get_action(&self) -> ErrorAction {
        match self {
            BemtronError::CriticalError(err) => err.get_action(),
            BemtronError::GeneralError(err) => err.get_action(),
        }
    }

    /// Retrieves the error message associated with the error.
    pub fn get_message(&self) -> String {
        match self {
            BemtronError::CriticalError(err) => err.get_message(),
            BemtronError::GeneralError(err) => err.get_message(),
        }
    }

    /// Retrieves the kind of the error.
    pub fn get_kind(&self) -> ErrorKind {
        match self {
            BemtronError::CriticalError(err) => err.get_kind(),
            BemtronError::GeneralError(err) => err.get_kind(),
        }
    }

    /// Retrieves the type of the error.
    pub fn get_type(&self) -> ErrorType {
        match self {
            BemtronError::CriticalError(err) => err.get_type(),
            BemtronError::GeneralError(err) => err.get_type(),
        }
    }

    /// Raises a critical error related to the logging setup.
    ///
    /// # Parameters
    /// - `kind`: The specific kind of error.
    /// - `message`: A message describing the error.
    /// - `action`: The action to be taken for this error.
    pub fn raise_critical_logging_error(
        kind: ErrorKind,
        message: &str,
        action: ErrorAction,
    ) -> Self {
        error!(
            "Critical Logging Error raised. Kind: {:?}, Message: '{}', Action: {:?}",
            kind, message, action
        );

        BemtronError::CriticalError(BemtronErrorType::LoggingError {
            kind,
            message: message.to_string(),
            action,
        })
    }

    /// Raises a general error related to loading naming options.
    ///
    /// # Parameters
    /// - `kind`: The specific kind of error.
    /// - `message`: A message describing the error.
    /// - `action`: The action to be taken for this error.
    pub fn raise_general_configuration_error(
        kind: ErrorKind,
        message: &str,
        action: ErrorAction,
    ) -> Self {
        error!(
            "General Configuration Error raised. Kind: {:?}, Message: '{}', Action: {:?}",
            kind, message, action
        );

        BemtronError::GeneralError(BemtronErrorType::ConfigurationError {
            kind,
            message: message.to_string(),
            action,
        })
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum BemtronErrorType {
    ConfigurationError {
        kind: ErrorKind,
        message: String,
        action: ErrorAction,
    },
    LoggingError {
        kind: ErrorKind,
        message: String,
        action: ErrorAction,
    },
}

impl BemtronErrorType {
    pub fn get_action(&self) -> ErrorAction {
        match self {
            BemtronErrorType::ConfigurationError { action, .. } => action.clone(),
            BemtronErrorType::LoggingError { action, .. } => action.clone(),
        }
    }

    pub fn get_message(&self) -> String {
        match self {
            BemtronErrorType::ConfigurationError { message, .. } => message.clone(),
            BemtronErrorType::LoggingError { message, .. } => message.clone(),
        }
    }

    pub fn get_kind(&self) -> ErrorKind {
        match self {
            BemtronErrorType::ConfigurationError { kind, .. } => kind.clone(),
            BemtronErrorType::LoggingError { kind, .. } => kind.clone(),
        }
    }

    pub fn get_type(&self) -> ErrorType {
        match self {
            BemtronErrorType::ConfigurationError { .. } => ErrorType::ConfigurationError,
            BemtronErrorType::LoggingError { .. } => ErrorType::LoggingError,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ErrorAction {
    Notify,
    Fix,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ErrorType {
    ConfigurationError,
    LoggingError,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ErrorKind {
    ConfigFileReadError,
    ConfigFileParsingError,
    LogFileAppenderInitializationFailed,
}
