use serde::{
    Deserializer,
    de::{self, Visitor},
};

/// Reads a non-negative number of seconds, integer or fractional.
pub struct SecondsVisitor;

impl<'de> Visitor<'de> for SecondsVisitor {
    type Value = std::time::Duration;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a non-negative number of seconds")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let secs = u64::try_from(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))?;
        Ok(std::time::Duration::from_secs(secs))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(std::time::Duration::from_secs(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        std::time::Duration::try_from_secs_f64(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Float(value), &self))
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<std::time::Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SecondsVisitor)
}
