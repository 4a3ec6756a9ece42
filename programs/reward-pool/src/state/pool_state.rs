use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::helpers::math::reward_per_share_delta;

/// Global pool accounting
///
/// Holds the aggregate stake and the reward-per-share accumulator.
/// Only one PoolState account exists per program instance.
///
/// PDA Seeds: ["pool_state"]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct PoolState {
    /// Account that initialized the pool (reporting only)
    pub admin: Pubkey,

    /// Sum of every depositor's stake
    pub total_stake: u64,

    /// Cumulative reward per unit of stake, scaled by SCALE.
    /// Never decreases.
    pub acc_reward_per_share: u128,

    /// Lifetime lamports injected as rewards (reporting only)
    pub reward_pool_balance: u64,

    /// Lifetime reward lamports paid out to depositors
    pub total_rewards_paid: u64,

    /// Number of depositor records ever created
    pub depositor_count: u64,

    /// Timestamp when the pool was initialized
    pub initialized_at: i64,

    /// PDA bump for the vault
    pub vault_bump: u8,

    /// PDA bump for this account
    pub bump: u8,
}

impl PoolState {
    /// Account size calculation:
    /// - admin: 32 bytes
    /// - 4 u64: total_stake, reward_pool_balance, total_rewards_paid, depositor_count
    /// - acc_reward_per_share: 16 bytes (u128)
    /// - initialized_at: 8 bytes (i64)
    /// - 2 u8: vault_bump, bump
    /// Total: 32 + 32 + 16 + 8 + 2 = 90 bytes
    pub const LEN: usize = 32 + 8 * 4 + 16 + 8 + 1 * 2;

    /// Current accumulator value
    pub fn acc_reward_per_share(&self) -> u128 {
        self.acc_reward_per_share
    }

    /// Distribute `amount` across the current total stake.
    ///
    /// Returns the accumulator delta. Each staker's pending reward grows by
    /// at most floor(stake * amount / total_stake). Fails on an empty pool
    /// (nobody to receive the reward) and on a zero amount.
    pub fn inject_reward(&mut self, amount: u64) -> Result<u128> {
        require!(self.total_stake > 0, ErrorCode::EmptyPool);
        require!(amount > 0, ErrorCode::InvalidAmount);

        let delta = reward_per_share_delta(amount, self.total_stake)?;

        let acc = self
            .acc_reward_per_share
            .checked_add(delta)
            .ok_or(ErrorCode::MathOverflow)?;
        let reward_pool_balance = self
            .reward_pool_balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        self.acc_reward_per_share = acc;
        self.reward_pool_balance = reward_pool_balance;

        #[cfg(feature = "verbose")]
        msg!("inject_reward: delta={}, acc={}", delta, acc);

        Ok(delta)
    }

    pub fn add_stake(&mut self, amount: u64) -> Result<()> {
        self.total_stake = self
            .total_stake
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn remove_stake(&mut self, amount: u64) -> Result<()> {
        self.total_stake = self
            .total_stake
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientBalance)?;
        Ok(())
    }

    pub fn record_reward_paid(&mut self, amount: u64) {
        self.total_rewards_paid = self.total_rewards_paid.saturating_add(amount);
    }
}
