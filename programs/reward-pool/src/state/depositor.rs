use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::helpers::math::accrued_reward;

/// Per-owner stake and reward bookkeeping
///
/// Created on first deposit and never closed. An owner without a record
/// is indistinguishable from one whose record is all zeros.
///
/// PDA Seeds: ["depositor", pool_state, owner]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Depositor {
    /// The depositor's wallet address
    pub owner: Pubkey,

    /// Lamports currently staked
    pub stake: u64,

    /// Accumulator value at the last settlement, scaled by SCALE
    pub reward_debt: u128,

    /// Settled reward not yet paid out
    pub owed: u64,

    /// Lifetime lamports deposited
    pub total_deposited: u64,

    /// Lifetime stake lamports withdrawn
    pub total_withdrawn: u64,

    /// Lifetime reward lamports paid out
    pub total_rewards_paid: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Depositor {
    /// Account size calculation:
    /// - owner: 32 bytes (Pubkey)
    /// - 5 u64: stake, owed, total_deposited, total_withdrawn, total_rewards_paid
    /// - reward_debt: 16 bytes (u128)
    /// - bump: 1 byte
    /// Total: 89 bytes
    pub const LEN: usize = 32 + 8 * 5 + 16 + 1;

    /// Read a depositor record, treating a missing account as the zero record.
    pub fn load_or_default(info: &AccountInfo) -> Result<Self> {
        if info.data_is_empty() {
            return Ok(Self::default());
        }
        require_keys_eq!(*info.owner, crate::ID, ErrorCode::InvalidDepositor);
        let data = info.try_borrow_data()?;
        let mut slice: &[u8] = &data;
        Self::try_deserialize(&mut slice)
    }

    /// Fold reward accrued since the last snapshot into `owed`.
    ///
    /// Returns the amount folded in. Calling twice with the same
    /// accumulator value adds nothing the second time.
    pub fn settle(&mut self, acc_reward_per_share: u128) -> Result<u64> {
        let pending = accrued_reward(self.stake, acc_reward_per_share, self.reward_debt)?;
        self.owed = self
            .owed
            .checked_add(pending)
            .ok_or(ErrorCode::MathOverflow)?;
        self.reward_debt = acc_reward_per_share;
        Ok(pending)
    }

    /// Accrued plus owed reward, without touching state
    pub fn pending_reward(&self, acc_reward_per_share: u128) -> Result<u64> {
        accrued_reward(self.stake, acc_reward_per_share, self.reward_debt)?
            .checked_add(self.owed)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }
}
