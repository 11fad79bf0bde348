#![allow(dead_code)]
use soroban_sdk::{Bytes, Env, String, Vec};
use patient_records::{PatientRecordsContract, PatientRecordsContractClient};

pub struct TestContext {
    pub env: Env,
    pub client: PatientRecordsContractClient<'static>,
}

/// Creates a Soroban environment, deploys the contract and runs its init hook.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();

    let contract_id = env.register(PatientRecordsContract, ());
    let client = PatientRecordsContractClient::new(&env, &contract_id);
    client.init(&Vec::new(&env));

    TestContext { env, client }
}

/// Builds a positional argument list.
pub fn args(env: &Env, items: &[&str]) -> Vec<String> {
    let mut args = Vec::new(env);
    for item in items {
        args.push_back(String::from_str(env, item));
    }
    args
}

/// Invokes `create_patient` through the string dispatcher.
pub fn create_patient(ctx: &TestContext, id: &str, age: &str, gender: &str, illness: &str) {
    ctx.client.invoke(
        &String::from_str(&ctx.env, "create_patient"),
        &args(&ctx.env, &[id, age, gender, illness]),
    );
}

/// Queries `getPatientRecord` through the string dispatcher.
pub fn get_patient_record(ctx: &TestContext, id: &str) -> Bytes {
    ctx.client.query(
        &String::from_str(&ctx.env, "getPatientRecord"),
        &args(&ctx.env, &[id]),
    )
}

/// Copies contract bytes out of the environment.
pub fn to_vec(bytes: &Bytes) -> std::vec::Vec<u8> {
    let mut buf = vec![0u8; bytes.len() as usize];
    bytes.copy_into_slice(&mut buf);
    buf
}
