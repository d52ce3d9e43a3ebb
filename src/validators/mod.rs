//! Validation helpers shared by handlers.

use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to `ApiError::ValidationError`.
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct SignupForm {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn test_field_messages_are_collected() {
        let form = SignupForm {
            email: "not-an-email".to_string(),
        };
        let err = form.validate().unwrap_err();
        match validation_errors_to_api_error(err) {
            ApiError::ValidationError(messages) => {
                assert_eq!(messages, vec!["Invalid email format".to_string()]);
            }
            other => panic!("expected ValidationError, got {:?}", other),
        }
    }
}
