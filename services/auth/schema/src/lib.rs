//! sea-orm entities for the auth service's Postgres schema.

pub mod otp_codes;
pub mod users;
