#[path = "integration/admin_test.rs"]
mod admin_test;
#[path = "integration/helpers.rs"]
mod helpers;
#[path = "integration/otp_test.rs"]
mod otp_test;
#[path = "integration/token_test.rs"]
mod token_test;
