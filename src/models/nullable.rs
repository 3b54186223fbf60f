use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
///
/// `#[serde(default)]` only covers a missing key; the backend sends unset
/// fields as explicit `null`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
