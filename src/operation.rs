use crate::account::{AccountId, Amount};

/// The different kinds of administrative operations the ledger accepts
#[derive(Clone, Copy, Debug, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    /// Hand ledger authority and the treasury balance to another account
    UpdateControllingParty,
    /// Replace the announced interest rate
    UpdateInterestRate,
    /// Mint new currency to the controlling party
    IncreaseMoneySupply,
}

/// An operation record
///
/// Operation records are orders to the ledger, one mutating call per record:
/// the account claiming to perform it, the kind of mutation, and the
/// argument that kind requires.
#[derive(Debug, serde::Deserialize)]
pub struct Operation {
    #[serde(rename = "op")]
    operation_type: OperationType,
    caller: AccountId,
    party: Option<AccountId>,
    amount: Option<Amount>,
    rate_bps: Option<u64>,
}

impl Operation {
    /// The kind of the operation
    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// The account claiming to perform the operation
    pub fn caller(&self) -> AccountId {
        self.caller
    }

    /// The new controlling party
    /// Will only be populated for update_controlling_party records
    pub fn party(&self) -> Option<AccountId> {
        self.party
    }

    /// The amount to mint, in base units
    /// Will only be populated for increase_money_supply records
    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    /// The new interest rate in basis points
    /// Will only be populated for update_interest_rate records
    pub fn rate_bps(&self) -> Option<u64> {
        self.rate_bps
    }
}
