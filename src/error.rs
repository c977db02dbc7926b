//! Error types for the Toolcrib engine

use thiserror::Error;

/// Stable numeric codes for engine failures.
///
/// The embedding transport maps each code to its own outward signal, so every
/// failure kind the engine can raise gets a distinct value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NotAuthorized = 2,
    NoSuchEquipment = 3,
    NoSuchCheckout = 4,
    NoSuchRequest = 5,
    NoSuchStagedRequest = 6,
    NoSuchUser = 7,
    DuplicateClaim = 8,
    AlreadyCheckedOut = 9,
    NotCheckedOut = 10,
    WaiverNotSigned = 11,
    IdentityMismatch = 12,
    AlreadyExists = 13,
    BadValue = 14,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No equipment found matching equipment_id: {0}")]
    EquipmentNotFound(i32),

    #[error("Could not find active checkout for equipment item with id: {0}")]
    CheckoutNotFound(i32),

    #[error("Could not find checkout request for {model} from pid {pid}")]
    RequestNotFound { model: String, pid: i32 },

    #[error("Could not find staged checkout request for {model} from pid {pid}")]
    StagedRequestNotFound { model: String, pid: i32 },

    #[error("Could not find user with pid: {0}")]
    UserNotFound(i32),

    #[error("You already have an active checkout or checkout request for {0}")]
    DuplicateClaim(String),

    #[error("Equipment item with id: {0} is already checked out")]
    AlreadyCheckedOut(i32),

    #[error("The equipment you are trying to return is not checked out")]
    NotActive(i32),

    #[error("You must sign the liability waiver before you can request an equipment checkout")]
    WaiverNotSigned,

    #[error("Not authorized: {0}")]
    PermissionDenied(String),

    #[error("Identity mismatch: {0}")]
    IdentityMismatch(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// The wire-stable code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::EquipmentNotFound(_) => ErrorCode::NoSuchEquipment,
            AppError::CheckoutNotFound(_) => ErrorCode::NoSuchCheckout,
            AppError::RequestNotFound { .. } => ErrorCode::NoSuchRequest,
            AppError::StagedRequestNotFound { .. } => ErrorCode::NoSuchStagedRequest,
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::DuplicateClaim(_) => ErrorCode::DuplicateClaim,
            AppError::AlreadyCheckedOut(_) => ErrorCode::AlreadyCheckedOut,
            AppError::NotActive(_) => ErrorCode::NotCheckedOut,
            AppError::WaiverNotSigned => ErrorCode::WaiverNotSigned,
            AppError::PermissionDenied(_) => ErrorCode::NotAuthorized,
            AppError::IdentityMismatch(_) => ErrorCode::IdentityMismatch,
            AppError::Conflict(_) => ErrorCode::AlreadyExists,
            AppError::Validation(_) => ErrorCode::BadValue,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
