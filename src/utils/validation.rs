use crate::utils::error::{PclError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PclError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PclError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PclError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Collects request problems so a batch can be rejected with every reason at once.
#[derive(Debug, Default)]
pub struct RequestErrors {
    problems: Vec<String>,
}

impl RequestErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, condition: bool, problem: impl Into<String>) {
        if !condition {
            self.problems.push(problem.into());
        }
    }

    pub fn require_text(&mut self, field_name: &str, value: Option<&str>) {
        let present = value.is_some_and(|v| !v.trim().is_empty());
        self.check(present, format!("{} is required", field_name));
    }

    pub fn into_result(self) -> Result<()> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(PclError::ValidationError {
                message: self.problems.join("; "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", "./output").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("input_bucket", "entrada").is_ok());
        assert!(validate_non_empty_string("input_bucket", "   ").is_err());
    }

    #[test]
    fn test_request_errors_joins_problems() {
        let mut errors = RequestErrors::new();
        errors.check(false, "batchId must be positive");
        errors.require_text("clientId", None);
        errors.require_text("profileId", Some("p1"));

        match errors.into_result() {
            Err(PclError::ValidationError { message }) => {
                assert_eq!(message, "batchId must be positive; clientId is required");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
