use std::fmt;
use std::str::FromStr;

/// An amount of currency in base units
pub type Amount = u128;

/// Number of decimal places in the fixed-point representation of amounts
pub const TOKEN_DECIMALS: u32 = 18;

const TOKEN_BASE: Amount = 10;

/// One whole token in base units
pub const UNIT: Amount = TOKEN_BASE.pow(TOKEN_DECIMALS);

/// Possible errors to occur while parsing an account id
#[derive(Debug, thiserror::Error)]
pub enum ParseAccountIdError {
    #[error("account ids are 40 hex digits, got {0} characters")]
    BadLength(usize),
    #[error("account ids may only contain hex digits")]
    BadDigit,
}

/// The unique identifier of an account
///
/// An account id is 20 bytes wide and is written as `0x` followed by 40 hex
/// digits. The all-zero id is reserved: it marks the absence of an account
/// and can never hold ledger authority.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId([u8; 20]);

impl AccountId {
    /// The reserved all-zero account id
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an account id from its raw bytes
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The raw bytes of the account id
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Whether this is the reserved zero id
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for AccountId {
    type Err = ParseAccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.len() != 40 {
            return Err(ParseAccountIdError::BadLength(digits.len()));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| ParseAccountIdError::BadDigit)?;

        Ok(Self(bytes))
    }
}

impl serde::Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: serde::Deserializer<'de>
    {
        struct HexVisitor;

        impl<'de> serde::de::Visitor<'de> for HexVisitor {
            type Value = AccountId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 40 hex digit account id")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where E: serde::de::Error
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

/// Serde adapter carrying an [Amount] as its decimal string form
///
/// Base unit amounts outgrow the integer range JSON readers decode
/// exactly, so amounts cross JSON boundaries as strings.
pub(crate) mod amount_string {
    use std::fmt;

    use super::Amount;

    pub fn serialize<S>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Amount, D::Error>
        where D: serde::Deserializer<'de>
    {
        struct AmountVisitor;

        impl<'de> serde::de::Visitor<'de> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a base unit amount as a decimal string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where E: serde::de::Error
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AmountVisitor)
    }
}
