//! Lenient boolean flags.
//!
//! Some revisions of the backend send flags such as `leaf` and `isDefault`
//! as `0`/`1`, others as `true`/`false`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

/// Deserialize a flag from a JSON boolean or number (non-zero is `true`).
/// `null` reads as `false`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
        None => false,
    })
}
