/*
[INPUT]:  JSON numbers that the provider sometimes sends as strings
[OUTPUT]: Lenient f64 deserializers shared by response models
[POS]:    Data layer - serde adapters
[UPDATE]: When a new field shows mixed number/string encoding
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_f64<E: serde::de::Error>(value: &Value) -> Result<Option<f64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| E::custom("number out of f64 range")),
        Value::String(raw) if raw.trim().is_empty() => Ok(None),
        Value::String(raw) => raw.trim().parse::<f64>().map(Some).map_err(E::custom),
        _ => Err(E::custom("expected number or numeric string")),
    }
}

/// Number or numeric string; null and blank become 0
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value)?.unwrap_or_default())
}

/// Number or numeric string; null and blank become `None`
pub fn f64_option_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_f64(&value)
}

/// Map of numeric entries; values that are not numbers, numeric strings
/// or null are skipped
pub fn numeric_map_lenient<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| {
            value_to_f64::<serde::de::value::Error>(&value)
                .ok()
                .map(|number| (key, number))
        })
        .collect())
}
