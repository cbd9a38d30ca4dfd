#![no_std]

//! Building blocks shared by the vault and governance contracts: role-based
//! access control, restricted external call dispatch, and the error messages
//! both contracts fail with.

pub mod access_control;
pub mod errors;
pub mod external_call;
pub mod types;
