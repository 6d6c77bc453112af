pub use self::{
    account::{AccountId, Amount, ParseAccountIdError, TOKEN_DECIMALS, UNIT},
    event::LedgerEvent,
    ledger::{Ledger, LedgerError, OperationError, INITIAL_INTEREST_RATE_BPS},
    operation::{Operation, OperationType},
};

mod account;
mod event;
mod ledger;
mod operation;
