//! Host-agnostic patient registry.
//!
//! Owns a [`LedgerStore`] and a [`ContractLogger`]; the contract shell in
//! `lib.rs` wires both to the Soroban environment.

use alloc::string::String;
use alloc::vec::Vec;

use crate::args::parse_age;
use crate::errors::ContractError;
use crate::logger::ContractLogger;
use crate::record::PatientRecord;
use crate::store::LedgerStore;

/// Operation routed by the state-changing entry point.
pub const CREATE_PATIENT: &str = "create_patient";
/// Operation routed by the read-only entry point.
pub const GET_PATIENT_RECORD: &str = "getPatientRecord";

const CREATE_ARITY: usize = 4;
const QUERY_ARITY: usize = 1;

pub struct PatientRegistry<S, L> {
    store: S,
    logger: L,
}

impl<S: LedgerStore, L: ContractLogger> PatientRegistry<S, L> {
    pub fn new(store: S, logger: L) -> Self {
        Self { store, logger }
    }

    /// Deployment hook. Does no work.
    pub fn init(&self, _args: &[String]) -> Result<Vec<u8>, ContractError> {
        self.logger.log("INIT: patient records contract deployed", "");
        Ok(Vec::new())
    }

    /// State-changing entry point: `create_patient [id, age, gender, illness]`.
    ///
    /// Arity is checked first, then the age, then the operation name.
    pub fn invoke(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ContractError> {
        if args.len() != CREATE_ARITY {
            return Err(self.fail(
                "INVOKE: expecting 4 arguments",
                function,
                ContractError::WrongArgumentCount,
            ));
        }

        let age = parse_age(&args[1])
            .map_err(|err| self.fail("INVOKE: age is not an integer", &args[1], err))?;

        if function == CREATE_PATIENT {
            self.create_patient(&args[0], age, &args[2], &args[3])?;
            return Ok(Vec::new());
        }

        Err(self.fail(
            "INVOKE: function doesn't exist",
            function,
            ContractError::UnknownFunction,
        ))
    }

    /// Read-only entry point: `getPatientRecord [id]`.
    pub fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>, ContractError> {
        self.logger.log("QUERY: function", function);

        if args.len() != QUERY_ARITY {
            return Err(self.fail(
                "QUERY: expecting 1 argument",
                function,
                ContractError::WrongArgumentCount,
            ));
        }

        if function == GET_PATIENT_RECORD {
            return self.get_patient_record(&args[0]);
        }

        Err(self.fail(
            "QUERY: received unknown function invocation",
            function,
            ContractError::UnknownFunction,
        ))
    }

    /// Validates and writes a record, replacing whatever is stored under the same id.
    pub fn create_patient(
        &self,
        patient_id: &str,
        age: i64,
        gender: &str,
        illness: &str,
    ) -> Result<(), ContractError> {
        if patient_id.is_empty() {
            return Err(self.fail(
                "CREATE_PATIENT: invalid patient id",
                patient_id,
                ContractError::InvalidPatientId,
            ));
        }

        let record = PatientRecord::new(patient_id, age, gender, illness);
        self.save_changes(&record)
    }

    /// Reads and decodes the record stored under `patient_id`.
    pub fn get_patient(&self, patient_id: &str) -> Result<PatientRecord, ContractError> {
        let bytes = match self.store.get_state(patient_id) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                return Err(self.fail(
                    "GET_PATIENT: no record for patient id",
                    patient_id,
                    ContractError::RecordNotFound,
                ));
            }
            Err(_) => {
                return Err(self.fail(
                    "GET_PATIENT: failed to read patient record",
                    patient_id,
                    ContractError::StorageReadFailed,
                ));
            }
        };

        PatientRecord::decode(&bytes)
            .map_err(|err| self.fail("GET_PATIENT: corrupt patient record", patient_id, err))
    }

    /// Returns the canonical encoding of the record stored under `patient_id`.
    pub fn get_patient_record(&self, patient_id: &str) -> Result<Vec<u8>, ContractError> {
        let record = self.get_patient(patient_id)?;
        record.encode().map_err(|err| {
            self.fail("GET_PATIENT_RECORD: invalid patient object", patient_id, err)
        })
    }

    fn save_changes(&self, record: &PatientRecord) -> Result<(), ContractError> {
        let bytes = record.encode().map_err(|err| {
            self.fail(
                "SAVE_CHANGES: error converting patient record",
                &record.patient_id,
                err,
            )
        })?;

        self.store.put_state(&record.patient_id, &bytes).map_err(|_| {
            self.fail(
                "SAVE_CHANGES: error storing patient record",
                &record.patient_id,
                ContractError::StorageWriteFailed,
            )
        })
    }

    fn fail(&self, message: &'static str, subject: &str, err: ContractError) -> ContractError {
        self.logger.log(message, subject);
        err
    }
}
