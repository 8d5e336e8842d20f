#[cfg(test)]
mod tests {
    use crate::domain::value_objects::Rating;
    use shared_kernel::domain::value_objects::ValueObject;
    use shared_kernel::errors::DomainError;

    #[test]
    fn test_rating_happy_path() {
        assert_eq!(Rating::try_new(4.7).unwrap().value(), 4.7);
        assert_eq!(Rating::try_new(0.0).unwrap(), Rating::zero());
        assert_eq!(Rating::default(), Rating::zero());
    }

    #[test]
    fn test_rating_rejects_negative_and_non_finite() {
        for value in [-0.1, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let res = Rating::try_new(value);
            assert!(
                matches!(res, Err(DomainError::Validation { field: "rating", .. })),
                "Should be rejected: {}", value
            );
        }
    }

    #[test]
    fn test_rating_deserialization_validates() {
        let ok: Rating = serde_json::from_str("3.5").unwrap();
        assert_eq!(ok.value(), 3.5);

        assert!(serde_json::from_str::<Rating>("-1.0").is_err());
    }

    #[test]
    fn test_rating_from_raw_skips_validation() {
        let raw = Rating::from_raw(-2.0);
        assert!(raw.validate().is_err());
    }
}
