use serde::{
    de::DeserializeOwned,
    Deserialize,
    Deserializer,
};
use serde_json::Value;

/// Envelope of every list endpoint: `{"count": n, "value": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub value: Vec<T>,
}

/// A typed record together with the JSON object it was decoded from.
#[derive(Debug, Clone)]
pub struct WithRaw<T> {
    pub record: T,
    pub raw: Value,
}

impl<'de, T> Deserialize<'de> for WithRaw<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let record = T::deserialize(&raw).map_err(serde::de::Error::custom)?;
        Ok(Self { record, raw })
    }
}

/// Yields `Some` whenever the key exists, even if its value is `null`.
///
/// Must be paired with `#[serde(default)]` so that an absent key becomes `None`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "present")]
        marker: Option<Value>,
        name: String,
    }

    #[test]
    fn null_key_counts_as_present() {
        let probe: Probe = serde_json::from_str(r#"{"marker": null, "name": "a"}"#).unwrap();
        assert_eq!(probe.marker, Some(Value::Null));

        let probe: Probe = serde_json::from_str(r#"{"name": "a"}"#).unwrap();
        assert_eq!(probe.marker, None);
    }

    #[test]
    fn keeps_raw_record() {
        let list: ListResponse<WithRaw<Probe>> =
            serde_json::from_str(r#"{"count": 1, "value": [{"name": "a", "extra": [1, 2]}]}"#).unwrap();
        assert_eq!(list.value[0].record.name, "a");
        assert_eq!(list.value[0].raw["extra"], serde_json::json!([1, 2]));
    }

    #[test]
    fn missing_value_array_is_a_decode_error() {
        assert!(serde_json::from_str::<ListResponse<Probe>>(r#"{"count": 0}"#).is_err());
    }
}
