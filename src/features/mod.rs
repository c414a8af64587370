//! The login and registration screens, each an instance of [`FormController`](crate::FormController).

pub mod login;
pub mod register;
