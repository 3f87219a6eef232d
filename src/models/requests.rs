//! Request DTOs for the student API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Result, StudentError};
use crate::store::StudentFields;

/// Request body for create (POST /students) and update (PUT /students/:id)
///
/// Every field is required; `id` is never accepted from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRequest {
    pub name: String,
    pub email: String,
    pub course: String,
    pub department: String,
    pub fees: String,
}

impl StudentRequest {
    /// Validates the request and converts it into storable fields.
    ///
    /// Values are stored as submitted, except that the email's domain is
    /// lowercased. Trimming only applies to the emptiness check on `name`.
    pub fn validate(self) -> Result<StudentFields> {
        if self.name.trim().is_empty() {
            return Err(StudentError::Validation("Name cannot be empty".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(StudentError::Validation(
                "Invalid email address".to_string(),
            ));
        }

        Ok(StudentFields {
            name: self.name,
            email: normalize_email(&self.email),
            course: self.course,
            department: self.department,
            fees: self.fees,
        })
    }
}

/// Checks dot-atom `local@domain.tld` syntax.
///
/// Domain labels are alphanumeric with inner hyphens; the TLD is at least
/// two letters.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(concat!(
                r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
                r"@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
            ))
            .expect("email pattern is valid")
        })
        .is_match(email)
}

/// Lowercases the domain; the local part is kept as given.
pub fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_ascii_lowercase()),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str) -> StudentRequest {
        StudentRequest {
            name: name.to_string(),
            email: email.to_string(),
            course: "CS".to_string(),
            department: "Eng".to_string(),
            fees: "100".to_string(),
        }
    }

    #[test]
    fn test_student_request_deserialize() {
        let json = r#"{"name":"Ann","email":"a@x.com","course":"CS","department":"Eng","fees":"100"}"#;
        let req: StudentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Ann");
        assert_eq!(req.fees, "100");
    }

    #[test]
    fn test_student_request_missing_field() {
        let json = r#"{"name":"Ann","email":"a@x.com"}"#;
        assert!(serde_json::from_str::<StudentRequest>(json).is_err());
    }

    #[test]
    fn test_validate_empty_name() {
        let result = request("", "a@x.com").validate();
        assert!(matches!(result, Err(StudentError::Validation(_))));

        let result = request("   \t", "a@x.com").validate();
        assert_eq!(
            result,
            Err(StudentError::Validation("Name cannot be empty".to_string()))
        );
    }

    #[test]
    fn test_validate_keeps_values_as_given() {
        let fields = request("  Ann ", "a@x.com").validate().unwrap();
        assert_eq!(fields.name, "  Ann ");
        assert_eq!(fields.email, "a@x.com");
    }

    #[test]
    fn test_validate_bad_email() {
        let result = request("Ann", "not-an-email").validate();
        assert!(matches!(result, Err(StudentError::Validation(_))));
    }

    #[test]
    fn test_validate_lowercases_domain() {
        let fields = request("Ann", "Ann.Lee@Dept.X.COM").validate().unwrap();
        assert_eq!(fields.email, "Ann.Lee@dept.x.com");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("a@X.COM"), "a@x.com");
        assert_eq!(normalize_email("A@x.com"), "A@x.com");
    }

    #[test]
    fn test_email_syntax() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@dept.uni.edu"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@@x.com"));
        assert!(!is_valid_email("a@x..com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("<a>@x.com"));
        assert!(!is_valid_email("a,b@x.com"));
        assert!(!is_valid_email("a..b@x.com"));
        assert!(!is_valid_email(".a@x.com"));
        assert!(!is_valid_email("a.@x.com"));
        assert!(!is_valid_email("a@-x-.com"));
        assert!(!is_valid_email("\"@x.com"));
        assert!(!is_valid_email("a@x.c"));
        assert!(!is_valid_email("a@x.c0m"));
        assert!(is_valid_email("o'brien@my-uni.ac.uk"));
        assert!(is_valid_email("a@X.COM"));
    }
}
