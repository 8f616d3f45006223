use crate::utils::error::{RecoverError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RecoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RecoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_path() {
        assert!(validate_path("input", "").is_err());
    }

    #[test]
    fn rejects_null_bytes() {
        assert!(validate_path("input", "sha\0res.json").is_err());
    }

    #[test]
    fn accepts_normal_path() {
        assert!(validate_path("input", "shares.json").is_ok());
    }
}
