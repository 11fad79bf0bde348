#![no_std]
extern crate alloc;

pub mod args;
pub mod errors;
pub mod logger;
pub mod record;
pub mod registry;
pub mod store;

use soroban_sdk::{contract, contractimpl, Bytes, Env, String, Vec};

use args::{collect, to_utf8};
pub use errors::{ContractError, ErrorCategory};
pub use logger::{ContractLogger, EnvLogger, NoopLogger};
pub use record::PatientRecord;
pub use registry::{PatientRegistry, CREATE_PATIENT, GET_PATIENT_RECORD};
pub use store::{DataKey, LedgerStore, PersistentLedger, StoreError};

/// Wires the registry to this invocation's persistent storage and diagnostic log.
fn patient_registry(env: &Env) -> PatientRegistry<PersistentLedger<'_>, EnvLogger<'_>> {
    PatientRegistry::new(PersistentLedger::new(env), EnvLogger::new(env))
}

#[contract]
pub struct PatientRecordsContract;

#[contractimpl]
impl PatientRecordsContract {
    /// Deployment hook. Performs no work and always succeeds.
    pub fn init(env: Env, args: Vec<String>) -> Result<Bytes, ContractError> {
        let args = collect(&args).unwrap_or_default();
        let payload = patient_registry(&env).init(&args)?;
        Ok(Bytes::from_slice(&env, &payload))
    }

    /// State-changing entry point.
    ///
    /// Only `create_patient` with `[id, age, gender, illness]` is routed. The
    /// name and arguments are decoded as UTF-8 before the arity check runs.
    pub fn invoke(env: Env, function: String, args: Vec<String>) -> Result<Bytes, ContractError> {
        let function = to_utf8(&function)?;
        let args = collect(&args)?;

        let payload = patient_registry(&env).invoke(&function, &args)?;
        Ok(Bytes::from_slice(&env, &payload))
    }

    /// Read-only entry point.
    ///
    /// Only `getPatientRecord` with `[id]` is routed; returns the record's JSON encoding.
    pub fn query(env: Env, function: String, args: Vec<String>) -> Result<Bytes, ContractError> {
        let function = to_utf8(&function)?;
        let args = collect(&args)?;

        let payload = patient_registry(&env).query(&function, &args)?;
        Ok(Bytes::from_slice(&env, &payload))
    }

    /// Create or overwrite a patient record without going through string dispatch
    pub fn create_patient(
        env: Env,
        patient_id: String,
        age: i64,
        gender: String,
        illness: String,
    ) -> Result<(), ContractError> {
        patient_registry(&env).create_patient(
            &to_utf8(&patient_id)?,
            age,
            &to_utf8(&gender)?,
            &to_utf8(&illness)?,
        )?;
        Ok(())
    }

    /// Get the JSON encoding of a patient record
    pub fn get_patient_record(env: Env, patient_id: String) -> Result<Bytes, ContractError> {
        let payload = patient_registry(&env).get_patient_record(&to_utf8(&patient_id)?)?;
        Ok(Bytes::from_slice(&env, &payload))
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}
