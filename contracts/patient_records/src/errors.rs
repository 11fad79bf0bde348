/// Error categories for classifying contract failures
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Record fields failed validation (e.g. empty patient id)
    Validation = 1,
    /// Wrong arity or malformed positional arguments
    Argument = 2,
    /// The record could not be encoded
    Serialization = 3,
    /// The ledger read or write primitive reported a failure
    Storage = 4,
    /// No record is stored under the requested key
    NotFound = 5,
    /// Stored bytes are not a well-formed record
    CorruptRecord = 6,
    /// The requested operation name is not routed by this contract
    UnknownFunction = 7,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    InvalidPatientId = 1,
    WrongArgumentCount = 2,
    InvalidAge = 3,
    InvalidArgumentEncoding = 4,
    SerializationFailed = 5,
    StorageReadFailed = 6,
    StorageWriteFailed = 7,
    RecordNotFound = 8,
    CorruptRecord = 9,
    UnknownFunction = 10,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidPatientId => ErrorCategory::Validation,
            ContractError::WrongArgumentCount
            | ContractError::InvalidAge
            | ContractError::InvalidArgumentEncoding => ErrorCategory::Argument,
            ContractError::SerializationFailed => ErrorCategory::Serialization,
            ContractError::StorageReadFailed | ContractError::StorageWriteFailed => {
                ErrorCategory::Storage
            }
            ContractError::RecordNotFound => ErrorCategory::NotFound,
            ContractError::CorruptRecord => ErrorCategory::CorruptRecord,
            ContractError::UnknownFunction => ErrorCategory::UnknownFunction,
        }
    }

    /// Returns a human-readable error message for this error.
    /// The host only sees the numeric code, so this text is what ends up in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::InvalidPatientId => "Invalid Patient ID provided",
            ContractError::WrongArgumentCount => "Incorrect number of arguments passed",
            ContractError::InvalidAge => "String to int conversion failed",
            ContractError::InvalidArgumentEncoding => "Argument is not valid UTF-8",
            ContractError::SerializationFailed => "Error converting Patient record",
            ContractError::StorageReadFailed => "Error retrieving patient record",
            ContractError::StorageWriteFailed => "Error storing Patient record",
            ContractError::RecordNotFound => "Patient record not found",
            ContractError::CorruptRecord => "Corrupt patient record",
            ContractError::UnknownFunction => "Received unknown function invocation",
        }
    }
}
