use crate::utils::error::{Result, ScoreboardError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_team_name(field_name: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScoreboardError::invalid_argument(
            field_name,
            "team names cannot be empty",
        ));
    }
    Ok(())
}

/// Converts a caller-supplied score into the stored representation.
pub fn validate_score(field_name: &str, score: i64) -> Result<u32> {
    if score < 0 {
        return Err(ScoreboardError::invalid_argument(
            field_name,
            format!("scores cannot be negative (got {})", score),
        ));
    }
    u32::try_from(score).map_err(|_| {
        ScoreboardError::invalid_argument(field_name, format!("score {} is too large", score))
    })
}

/// Resolves a signed index against a sequence of `len` elements.
pub fn validate_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(ScoreboardError::IndexOutOfRange { index, len })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ScoreboardError::ConfigError {
            message: format!(
                "{}: unsupported value `{}`. Valid values: {}",
                field_name,
                value,
                allowed.join(", ")
            ),
        });
    }
    Ok(())
}
