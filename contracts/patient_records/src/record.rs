//! The patient record and its canonical JSON encoding.
//!
//! Field names and order are part of the stored format:
//! `{"patientId":..,"age":..,"gender":..,"illness":..}`.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::errors::ContractError;

/// Patient record structure
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub patient_id: String,
    pub age: i64,
    pub gender: String,
    pub illness: String,
}

impl PatientRecord {
    pub fn new(patient_id: &str, age: i64, gender: &str, illness: &str) -> Self {
        Self {
            patient_id: patient_id.into(),
            age,
            gender: gender.into(),
            illness: illness.into(),
        }
    }

    /// Encodes the record into the bytes written to the ledger.
    pub fn encode(&self) -> Result<Vec<u8>, ContractError> {
        serde_json::to_vec(self).map_err(|_| ContractError::SerializationFailed)
    }

    /// Decodes ledger bytes. Unknown fields are ignored, missing ones are not.
    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        serde_json::from_slice(bytes).map_err(|_| ContractError::CorruptRecord)
    }
}
