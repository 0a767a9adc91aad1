//! Validates a signup form loaded from JSON and prints the outcome.

use serde_json::Value;
use sift_validator::prelude::*;

const RULES: &str = r#"{
    "username": [{ "validator": "regexp", "regexp": "^[a-zA-Z]{2}[a-zA-Z0-9_]{0,22}$" }],
    "name":     [{ "validator": "notEmpty", "message": "Please tell us your name" }],
    "password": [{ "validator": "same", "field": "password_match" }],
    "gender":   [{ "validator": "enum", "values": ["m", "f"] }],
    "email":    [{ "validator": "email" }],
    "website":  [{ "validator": "url" }],
    "zip":      [{ "validator": "postcode" }]
}"#;

const FORM: &str = r#"{
    "username": "jd12",
    "name": "   ",
    "password": "password",
    "password_match": "pa55word",
    "gender": "f",
    "email": "john.doe@example.com",
    "website": "http://example.com/",
    "zip": "1234"
}"#;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    add_validator_fn("postcode", |value: &Value, _: &Params, _: &Record| {
        let ok = value
            .as_str()
            .is_some_and(|s| s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit()));
        Ok(Outcome::check(ok, "Invalid postcode"))
    });

    let validator = RecordValidator::new(Record::from_json(FORM)?, RuleSet::from_json(RULES)?);
    validator.check_rules()?;

    match validator.validate().await? {
        Validation::Valid => println!("form is valid"),
        Validation::Invalid(errors) => {
            println!("{}", serde_json::to_string_pretty(&errors)?);
        }
    }
    Ok(())
}
