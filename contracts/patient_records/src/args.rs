//! Conversion of host argument values into plain Rust strings.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use soroban_sdk::{String as HostString, Vec as HostVec};

use crate::errors::ContractError;

/// Copies a host string out of the environment, rejecting invalid UTF-8.
pub fn to_utf8(value: &HostString) -> Result<String, ContractError> {
    let mut buf = vec![0u8; value.len() as usize];
    value.copy_into_slice(&mut buf);
    String::from_utf8(buf).map_err(|_| ContractError::InvalidArgumentEncoding)
}

/// Converts positional arguments, preserving order.
pub fn collect(args: &HostVec<HostString>) -> Result<Vec<String>, ContractError> {
    args.iter().map(|arg| to_utf8(&arg)).collect()
}

/// Parses the decimal age argument. A sign is accepted, whitespace is not.
pub fn parse_age(value: &str) -> Result<i64, ContractError> {
    value.parse::<i64>().map_err(|_| ContractError::InvalidAge)
}
