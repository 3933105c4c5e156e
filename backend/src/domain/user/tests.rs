//! Tests for the domain user model.

use super::*;
use rstest::rstest;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_serialises_as_string() {
    let id = UserId::new(VALID_ID).expect("valid id");
    let value = serde_json::to_value(id).expect("serialise id");
    assert_eq!(value, serde_json::json!(VALID_ID));
}

#[rstest]
fn username_is_trimmed() {
    let username = Username::new("  alice ").expect("valid username");
    assert_eq!(username.as_ref(), "alice");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn username_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(Username::new(raw), Err(UserValidationError::EmptyUsername));
}

#[rstest]
fn username_accepts_long_values() {
    let name = "a".repeat(1024);
    let username = Username::new(name.clone()).expect("long username");
    assert_eq!(username.as_ref(), name);
}

#[rstest]
fn try_from_strings_builds_user() {
    let user = User::try_from_strings(VALID_ID, "alice").expect("valid user");
    assert_eq!(user.id().to_string(), VALID_ID);
    assert_eq!(user.username().as_ref(), "alice");
}
