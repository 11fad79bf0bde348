//! Property-based tests for the dispatch entry points.
//!
//! Invariants tested:
//! - `getPatientRecord` returns exactly the fields written by `create_patient`
//! - an empty id never produces a stored record
//! - any arity other than 4 (create) or 1 (query) is an argument error
//! - any non-integer age is rejected before anything is written

use proptest::prelude::*;
use soroban_sdk::String;
use patient_records::{ContractError, PatientRecord};

use crate::common::{args, get_patient_record, setup_test_env, to_vec};

proptest! {
    /// Whatever was created can be read back field for field.
    #[test]
    fn prop_create_query_round_trip(
        id in "[A-Za-z0-9_-]{1,24}",
        age in any::<i64>(),
        gender in "[ -~]{0,16}",
        illness in "[ -~]{0,48}",
    ) {
        let ctx = setup_test_env();
        let age_arg = age.to_string();

        ctx.client.invoke(
            &String::from_str(&ctx.env, "create_patient"),
            &args(
                &ctx.env,
                &[id.as_str(), age_arg.as_str(), gender.as_str(), illness.as_str()],
            ),
        );

        let record = PatientRecord::decode(&to_vec(&get_patient_record(&ctx, &id))).unwrap();
        prop_assert_eq!(record, PatientRecord::new(&id, age, &gender, &illness));
    }

    /// An empty id is always a validation error, whatever the other fields.
    #[test]
    fn prop_empty_id_never_written(age in any::<i32>(), illness in "[a-z ]{0,20}") {
        let ctx = setup_test_env();
        let age_arg = age.to_string();

        let result = ctx.client.try_invoke(
            &String::from_str(&ctx.env, "create_patient"),
            &args(&ctx.env, &["", age_arg.as_str(), "F", illness.as_str()]),
        );
        prop_assert_eq!(result, Err(Ok(ContractError::InvalidPatientId)));

        let lookup = ctx.client.try_query(
            &String::from_str(&ctx.env, "getPatientRecord"),
            &args(&ctx.env, &[""]),
        );
        prop_assert_eq!(lookup, Err(Ok(ContractError::RecordNotFound)));
    }

    /// `create_patient` needs exactly four arguments.
    #[test]
    fn prop_create_arity(n in 0usize..8usize) {
        prop_assume!(n != 4);
        let ctx = setup_test_env();
        let items: std::vec::Vec<&str> = std::iter::repeat("1").take(n).collect();

        let result = ctx.client.try_invoke(
            &String::from_str(&ctx.env, "create_patient"),
            &args(&ctx.env, &items),
        );
        prop_assert_eq!(result, Err(Ok(ContractError::WrongArgumentCount)));
    }

    /// `getPatientRecord` needs exactly one argument.
    #[test]
    fn prop_query_arity(n in 0usize..8usize) {
        prop_assume!(n != 1);
        let ctx = setup_test_env();
        let items: std::vec::Vec<&str> = std::iter::repeat("p1").take(n).collect();

        let result = ctx.client.try_query(
            &String::from_str(&ctx.env, "getPatientRecord"),
            &args(&ctx.env, &items),
        );
        prop_assert_eq!(result, Err(Ok(ContractError::WrongArgumentCount)));
    }

    /// Ages that are not decimal integers are rejected.
    #[test]
    fn prop_non_integer_age_rejected(age in "[a-zA-Z .]{1,12}") {
        let ctx = setup_test_env();

        let result = ctx.client.try_invoke(
            &String::from_str(&ctx.env, "create_patient"),
            &args(&ctx.env, &["p1", age.as_str(), "F", "flu"]),
        );
        prop_assert_eq!(result, Err(Ok(ContractError::InvalidAge)));

        let lookup = ctx.client.try_query(
            &String::from_str(&ctx.env, "getPatientRecord"),
            &args(&ctx.env, &["p1"]),
        );
        prop_assert_eq!(lookup, Err(Ok(ContractError::RecordNotFound)));
    }
}
