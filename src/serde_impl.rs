use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::big_int::BigInt;

impl<const DIGITS: usize> Serialize for BigInt<DIGITS> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor<const DIGITS: usize>;

impl<'de, const DIGITS: usize> Visitor<'de> for BigIntVisitor<DIGITS> {
    type Value = BigInt<DIGITS>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string or an integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        BigInt::<DIGITS>::try_from(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        BigInt::<DIGITS>::try_from(value).map_err(E::custom)
    }
}

impl<'de, const DIGITS: usize> Deserialize<'de> for BigInt<DIGITS> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor::<DIGITS>)
    }
}
