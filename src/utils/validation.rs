use crate::utils::error::{PredictorError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(PredictorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_token(field_name: &str, token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(PredictorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: token.to_string(),
            reason: "Token cannot be empty or whitespace-only".to_string(),
        });
    }

    // word matching splits transcripts on anything that is not a letter or digit
    if !token.chars().all(char::is_alphanumeric) {
        return Err(PredictorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: token.to_string(),
            reason: "Token must be a single word of letters or digits".to_string(),
        });
    }

    if token.chars().any(char::is_uppercase) {
        return Err(PredictorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: token.to_string(),
            reason: "Transcripts are lowercase, so tokens must be lowercase too".to_string(),
        });
    }

    Ok(())
}

pub fn validate_disjoint(field_name: &str, left: &[String], right: &[String]) -> Result<()> {
    let left_set: HashSet<&str> = left.iter().map(String::as_str).collect();

    if let Some(shared) = right.iter().find(|token| left_set.contains(token.as_str())) {
        return Err(PredictorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shared.clone(),
            reason: "Token appears in both the affirmative and negative lists".to_string(),
        });
    }

    Ok(())
}
