use crate::utils::error::{Result, RotationError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RotationError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RotationError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RotationError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_distinct_ids(field_name: &str, ids: &[String]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(RotationError::InvalidConfigValue {
                field: field_name.to_string(),
                value: id.clone(),
                reason: "Duplicate service id in selection".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("per_month", 1, 1).is_ok());
        assert!(validate_positive_number("per_month", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rotation_day", 25, 1, 31).is_ok());
        assert!(validate_range("rotation_day", 1, 1, 31).is_ok());
        assert!(validate_range("rotation_day", 31, 1, 31).is_ok());
        assert!(validate_range("rotation_day", 0, 1, 31).is_err());
        assert!(validate_range("rotation_day", 32, 1, 31).is_err());
    }

    #[test]
    fn test_validate_distinct_ids() {
        let ids = vec!["netflix".to_string(), "disney".to_string()];
        assert!(validate_distinct_ids("services", &ids).is_ok());

        let dupes = vec!["netflix".to_string(), "netflix".to_string()];
        assert!(validate_distinct_ids("services", &dupes).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("output", "plan.ics").is_ok());
        assert!(validate_non_empty_string("output", "   ").is_err());
    }
}
