use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyNumber {
    U64(u64),
    F64(f64),
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn integral<E: Error>(n: AnyNumber, what: &str) -> Result<u64, E> {
    match n {
        AnyNumber::U64(u) => Ok(u),
        AnyNumber::F64(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => Ok(f as u64),
        AnyNumber::F64(f) => Err(E::custom(format!("cannot convert {what} {f} to an integer"))),
    }
}

/// Volume series: `null` entries stay `None`, integer-valued floats (`1.5e6`) are accepted.
pub(crate) fn de_volume_series<'de, D>(deserializer: D) -> Result<Vec<Option<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Option<AnyNumber>>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|v| v.map(|n| integral::<D::Error>(n, "volume")).transpose())
        .collect()
}

/// Split numerator/denominator: integers, integer-like floats (`4.0`), or numeric strings.
/// `null` decodes to 0.
pub(crate) fn de_u32_from_mixed<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Mixed {
        Num(AnyNumber),
        Str(String),
    }

    let raw = match Option::<Mixed>::deserialize(deserializer)? {
        None => return Ok(0),
        Some(Mixed::Num(n)) => integral::<D::Error>(n, "split field")?,
        Some(Mixed::Str(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0);
            }
            s.parse::<u64>().map_err(|_| {
                D::Error::custom(format!("invalid numeric string '{s}' for split field"))
            })?
        }
    };
    u32::try_from(raw).map_err(|_| D::Error::custom(format!("split field {raw} out of range")))
}
