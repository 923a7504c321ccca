use serde::{Deserialize, Deserializer};

/// `deserialize_with` helper: an explicit `null` becomes `T::default()`, the
/// same as a missing field under `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Payload {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        year: i32,
    }

    #[test]
    fn null_and_missing_both_default() {
        let p: Payload = serde_json::from_str(r#"{"name": null, "year": null}"#).unwrap();
        assert_eq!(p, Payload::default());
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(p, Payload::default());
        let p: Payload = serde_json::from_str(r#"{"name": "Civic", "year": 2020}"#).unwrap();
        assert_eq!(p, Payload { name: "Civic".into(), year: 2020 });
    }

    #[test]
    fn wrong_types_still_fail() {
        assert!(serde_json::from_str::<Payload>(r#"{"name": 5}"#).is_err());
    }
}
