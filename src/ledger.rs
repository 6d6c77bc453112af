use std::collections::BTreeMap;

use crate::account::{AccountId, Amount};
use crate::event::LedgerEvent;
use crate::operation::{Operation, OperationType};

/// The interest rate every freshly constructed ledger announces, in basis
/// points (500 = 5.00%)
pub const INITIAL_INTEREST_RATE_BPS: u64 = 500;

/// Possible errors to occur during mutating ledger operations
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("not the controlling party")]
    NotControllingParty,
    #[error("New controlling party cannot be the zero address")]
    NotToAddressZero,
    #[error("the increase would overflow the money supply")]
    Overflow,
}

/// Possible errors to occur while applying an operation record
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("the record is missing the new controlling party")]
    MissingParty,
    #[error("the record is missing an amount")]
    MissingAmount,
    #[error("the record is missing a rate")]
    MissingRate,
}

/// A centrally administered currency ledger
///
/// One account, the controlling party, performs all administrative
/// mutations and is also the treasury: the initial supply is minted to it,
/// later supply increases credit it, and handing authority to another
/// account moves the whole treasury balance along with it.
///
/// Mutating operations take `&mut self`, so writes to one ledger instance
/// are serialized; queries take `&self` and may run concurrently.
#[derive(Debug)]
pub struct Ledger {
    /// The account authorized to perform mutating operations
    controlling_party: AccountId,
    /// The total amount of currency issued so far
    total_supply: Amount,
    /// Balances of all current holders; a missing key is a zero balance
    balances: BTreeMap<AccountId, Amount>,
    /// The currently announced interest rate in basis points
    interest_rate_basis_points: u64,
    /// Notifications emitted by successful operations, oldest first
    events: Vec<LedgerEvent>,
}

impl Ledger {
    /// Creates a ledger with its initial controlling party and supply
    ///
    /// The whole initial supply is credited to the controlling party.
    /// Fails if the controlling party is the zero account, which may never
    /// hold authority.
    pub fn new(
        initial_controlling_party: AccountId,
        initial_supply: Amount,
    ) -> Result<Self, LedgerError> {
        if initial_controlling_party.is_zero() {
            return Err(LedgerError::NotToAddressZero);
        }

        let mut balances = BTreeMap::new();
        balances.insert(initial_controlling_party, initial_supply);

        Ok(Self {
            controlling_party: initial_controlling_party,
            total_supply: initial_supply,
            balances,
            interest_rate_basis_points: INITIAL_INTEREST_RATE_BPS,
            events: Vec::new(),
        })
    }

    /// The account currently authorized to administer the ledger
    pub fn controlling_party(&self) -> AccountId {
        self.controlling_party
    }

    /// The total amount of currency issued so far
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// The balance of `account`, zero if it never held currency
    pub fn balance_of(&self, account: AccountId) -> Amount {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// The currently announced interest rate in basis points
    pub fn interest_rate_basis_points(&self) -> u64 {
        self.interest_rate_basis_points
    }

    /// The balances of all current holders
    pub fn balances(&self) -> &BTreeMap<AccountId, Amount> {
        &self.balances
    }

    /// All notifications emitted so far, oldest first
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Hands ledger authority to `new_party`
    ///
    /// Authority and custody travel together: the outgoing controlling
    /// party's entire balance moves to `new_party` in the same step.
    /// Re-appointing the current controlling party is permitted and leaves
    /// every balance unchanged.
    pub fn update_controlling_party(
        &mut self,
        caller: AccountId,
        new_party: AccountId,
    ) -> Result<LedgerEvent, LedgerError> {
        self.require_controlling_party(caller)?;
        if new_party.is_zero() {
            return Err(LedgerError::NotToAddressZero);
        }

        let previous = self.controlling_party;
        let moved = self.balances.remove(&previous).unwrap_or(0);
        // both sides of the move are slices of the same supply, so the
        // credit cannot wrap
        *self.balances.entry(new_party).or_default() += moved;
        self.controlling_party = new_party;

        Ok(self.emit(LedgerEvent::UpdateControllingParty {
            previous,
            new: new_party,
        }))
    }

    /// Replaces the announced interest rate with `new_rate_basis_points`
    ///
    /// The rate is an announcement only; no accrual is computed anywhere.
    pub fn update_interest_rate(
        &mut self,
        caller: AccountId,
        new_rate_basis_points: u64,
    ) -> Result<LedgerEvent, LedgerError> {
        self.require_controlling_party(caller)?;

        let previous = self.interest_rate_basis_points;
        self.interest_rate_basis_points = new_rate_basis_points;

        Ok(self.emit(LedgerEvent::UpdateInterestRate {
            previous,
            new: new_rate_basis_points,
        }))
    }

    /// Mints `amount` new currency to the controlling party
    pub fn increase_money_supply(
        &mut self,
        caller: AccountId,
        amount: Amount,
    ) -> Result<LedgerEvent, LedgerError> {
        self.require_controlling_party(caller)?;

        let previous_supply = self.total_supply;
        let new_supply = previous_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        // the treasury balance never exceeds the total supply, so it
        // cannot wrap once the supply addition fits
        let new_balance = self.balance_of(self.controlling_party) + amount;

        self.total_supply = new_supply;
        self.balances.insert(self.controlling_party, new_balance);

        Ok(self.emit(LedgerEvent::IncreaseMoneySupply {
            previous_supply,
            minted: amount,
        }))
    }

    /// Applies one operation record and returns the emitted notification
    ///
    /// Records missing the argument their kind requires are rejected before
    /// any state is touched.
    pub fn apply(&mut self, operation: Operation) -> Result<LedgerEvent, OperationError> {
        let caller = operation.caller();

        let event = match operation.operation_type() {
            OperationType::UpdateControllingParty => {
                let party = operation.party().ok_or(OperationError::MissingParty)?;
                self.update_controlling_party(caller, party)?
            }
            OperationType::UpdateInterestRate => {
                let rate = operation.rate_bps().ok_or(OperationError::MissingRate)?;
                self.update_interest_rate(caller, rate)?
            }
            OperationType::IncreaseMoneySupply => {
                let amount = operation.amount().ok_or(OperationError::MissingAmount)?;
                self.increase_money_supply(caller, amount)?
            }
        };

        Ok(event)
    }

    fn require_controlling_party(&self, caller: AccountId) -> Result<(), LedgerError> {
        match caller == self.controlling_party {
            true => Ok(()),
            false => Err(LedgerError::NotControllingParty),
        }
    }

    fn emit(&mut self, event: LedgerEvent) -> LedgerEvent {
        tracing::debug!(?event, "ledger event");
        self.events.push(event.clone());
        event
    }
}
