//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn valid_user() -> User {
    User::try_from_strings(VALID_ID, "Лев_Толстой").expect("fixture user is valid")
}

#[rstest]
#[case("")]
#[case("not-a-uuid")]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6")]
fn user_id_rejects_malformed_values(#[case] raw: &str) {
    assert!(UserId::new(raw).is_err());
}

#[rstest]
fn user_id_round_trips_through_uuid() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(UserId::from_uuid(*id.as_uuid()), id);
    assert_eq!(id.to_string(), VALID_ID);
}

#[rstest]
#[case("  reader  ", "reader")]
#[case("mimo.krokodil", "mimo.krokodil")]
#[case("Читатель", "Читатель")]
#[case("a+b@c-d_e", "a+b@c-d_e")]
fn username_accepts_permitted_alphabet(#[case] raw: &str, #[case] expected: &str) {
    let username = Username::new(raw).expect("username should be valid");
    assert_eq!(username.as_ref(), expected);
}

#[rstest]
#[case("   ", UserValidationError::EmptyUsername)]
#[case("two words", UserValidationError::UsernameInvalidCharacters)]
#[case("semi;colon", UserValidationError::UsernameInvalidCharacters)]
fn username_rejects_invalid_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
fn username_enforces_maximum_length() {
    let raw = "u".repeat(USERNAME_MAX + 1);
    assert_eq!(
        Username::new(raw),
        Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX })
    );
    assert!(Username::new("u".repeat(USERNAME_MAX)).is_ok());
}

#[rstest]
fn user_serialises_to_camel_case(valid_user: User) {
    let value = serde_json::to_value(&valid_user).expect("user serialises");
    assert_eq!(value, json!({"id": VALID_ID, "username": "Лев_Толстой"}));
}

#[rstest]
fn user_deserialisation_validates_fields() {
    let result: Result<User, _> =
        serde_json::from_value(json!({"id": "nope", "username": "reader"}));
    assert!(result.is_err());
}
