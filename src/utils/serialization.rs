use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a JSON number or a numeric string and yields a finite `f64`.
pub fn de_f64_flexible<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom(format!("number out of range: {n}")))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("could not parse f64 from string: {s:?}")))?,
        other => {
            return Err(de::Error::custom(format!(
                "expected number or string, got: {other}"
            )))
        }
    };

    if !number.is_finite() {
        return Err(de::Error::custom(format!("non-finite number: {number}")));
    }

    Ok(number)
}
