use crate::domain::error::ValidationError;

/// Checks a required identifying field (`symbol`, `address`).
///
/// The value is returned as sent; callers echo it back verbatim.
pub fn require_identifier(field: &str, value: Option<&str>) -> Result<String, ValidationError> {
    let Some(value) = value else {
        return Err(ValidationError::missing(field));
    };
    if value.trim().is_empty() {
        return Err(ValidationError::blank(field));
    }
    Ok(value.to_string())
}

/// Validates every item of a batch list, stopping at the first bad one.
///
/// An absent list is an empty batch.
pub fn require_batch_identifiers<'a, I>(
    list_field: &str,
    id_field: &str,
    items: Option<I>,
) -> Result<Vec<String>, ValidationError>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let Some(items) = items else {
        return Ok(Vec::new());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, value)| require_identifier(&format!("{list_field}[{idx}].{id_field}"), value))
        .collect()
}

/// Normalizes an optional registry selector; blank counts as absent.
pub fn optional_key(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_kept_as_sent() {
        assert_eq!(require_identifier("symbol", Some(" AAPL ")).unwrap(), " AAPL ");
        assert_eq!(require_identifier("symbol", Some("msft\n")).unwrap(), "msft\n");
    }

    #[test]
    fn identifier_missing_or_blank_is_rejected() {
        let err = require_identifier("symbol", None).unwrap_err();
        assert_eq!(err.to_string(), "symbol is required");

        let err = require_identifier("address", Some("   ")).unwrap_err();
        assert_eq!(err.to_string(), "address must not be blank");
    }

    #[test]
    fn batch_identifiers_keep_input_order() {
        let items = vec![Some("MSFT"), Some("AAPL"), Some("MSFT")];
        let ids = require_batch_identifiers("portfolio", "symbol", Some(items)).unwrap();
        assert_eq!(ids, ["MSFT", "AAPL", "MSFT"]);
    }

    #[test]
    fn batch_error_points_at_the_bad_item() {
        let items = vec![Some("1 Main St"), None, Some("")];
        let err = require_batch_identifiers("properties", "address", Some(items)).unwrap_err();
        assert_eq!(err.field, "properties[1].address");
    }

    #[test]
    fn absent_batch_is_empty() {
        let ids = require_batch_identifiers::<Vec<Option<&str>>>("portfolio", "symbol", None)
            .unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn blank_selector_is_absent() {
        assert_eq!(optional_key(Some("  ")), None);
        assert_eq!(optional_key(Some(" cathie_wood")), Some("cathie_wood"));
        assert_eq!(optional_key(None), None);
    }
}
