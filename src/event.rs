use crate::account::{AccountId, Amount};

/// A notification emitted by a successful mutating ledger operation
///
/// Every mutation emits exactly one event carrying the values an observer
/// needs to follow the change without re-reading ledger state. Failed
/// operations emit nothing.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// Ledger authority moved to another account, treasury balance included
    UpdateControllingParty {
        previous: AccountId,
        new: AccountId,
    },
    /// The announced interest rate was replaced
    UpdateInterestRate {
        previous: u64,
        new: u64,
    },
    /// New currency was minted to the controlling party
    IncreaseMoneySupply {
        #[serde(with = "crate::account::amount_string")]
        previous_supply: Amount,
        #[serde(with = "crate::account::amount_string")]
        minted: Amount,
    },
}

#[cfg(test)]
mod tests {
    use crate::account::UNIT;

    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let event = LedgerEvent::UpdateControllingParty {
            previous: AccountId::new([0xaa; 20]),
            new: AccountId::new([0xbb; 20]),
        };

        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            "{\"type\":\"update_controlling_party\",\
             \"previous\":\"0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa\",\
             \"new\":\"0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb\"}",
        );
    }

    #[test]
    fn amounts_serialize_as_decimal_strings() {
        let event = LedgerEvent::IncreaseMoneySupply {
            previous_supply: 1_000 * UNIT,
            minted: 100 * UNIT,
        };

        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            "{\"type\":\"increase_money_supply\",\
             \"previous_supply\":\"1000000000000000000000\",\
             \"minted\":\"100000000000000000000\"}",
        );
    }

    #[test]
    fn events_round_trip_through_json() {
        let events = [
            LedgerEvent::UpdateControllingParty {
                previous: AccountId::new([0xaa; 20]),
                new: AccountId::new([0xbb; 20]),
            },
            LedgerEvent::UpdateInterestRate {
                previous: 500,
                new: 725,
            },
            LedgerEvent::IncreaseMoneySupply {
                previous_supply: 1_000 * UNIT,
                minted: 100 * UNIT,
            },
        ];

        for event in events {
            let json = serde_json::to_string(&event).unwrap();

            assert_eq!(serde_json::from_str::<LedgerEvent>(&json).unwrap(), event);
        }
    }
}
