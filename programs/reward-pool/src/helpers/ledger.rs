use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::state::{Depositor, PoolState};

/// Add `amount` to the depositor's stake.
///
/// Settles first so reward accrued at the old stake is kept and the new
/// stake only earns from the next injection on.
pub fn deposit_stake(pool: &mut PoolState, depositor: &mut Depositor, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    depositor.settle(pool.acc_reward_per_share())?;

    depositor.stake = depositor
        .stake
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    depositor.total_deposited = depositor.total_deposited.saturating_add(amount);
    pool.add_stake(amount)?;

    Ok(())
}

/// Remove `amount` from the depositor's stake.
///
/// Returns the payout: the withdrawn stake plus every owed reward lamport.
/// `owed` is zero afterwards.
pub fn withdraw_stake(pool: &mut PoolState, depositor: &mut Depositor, amount: u64) -> Result<u64> {
    require!(
        amount > 0 && amount <= depositor.stake,
        ErrorCode::InsufficientBalance
    );

    depositor.settle(pool.acc_reward_per_share())?;

    depositor.stake -= amount;
    pool.remove_stake(amount)?;

    let reward = depositor.owed;
    let payout = amount.checked_add(reward).ok_or(ErrorCode::MathOverflow)?;

    depositor.owed = 0;
    depositor.total_withdrawn = depositor.total_withdrawn.saturating_add(amount);
    depositor.total_rewards_paid = depositor.total_rewards_paid.saturating_add(reward);
    pool.record_reward_paid(reward);

    Ok(payout)
}

/// Pay out owed reward while leaving stake untouched.
pub fn claim_owed(pool: &mut PoolState, depositor: &mut Depositor) -> Result<u64> {
    depositor.settle(pool.acc_reward_per_share())?;

    let reward = depositor.owed;
    require!(reward > 0, ErrorCode::NothingToClaim);

    depositor.owed = 0;
    depositor.total_rewards_paid = depositor.total_rewards_paid.saturating_add(reward);
    pool.record_reward_paid(reward);

    Ok(reward)
}
