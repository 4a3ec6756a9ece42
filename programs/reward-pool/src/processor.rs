//! Pool operations sequenced against an external value transfer.
//!
//! Every mutating operation runs on copies of the pool and depositor
//! records, performs the transfer, and only then commits the copies.
//! A failed transfer therefore leaves both records exactly as they were.

use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::helpers::ledger;
use crate::state::{Depositor, PoolState};

/// Moves value into and out of pool custody
pub trait ValueTransfer {
    fn pull_in(&mut self, from: &Pubkey, amount: u64) -> Result<()>;
    fn push_out(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Answers whether an account may inject rewards
pub trait Membership {
    fn is_privileged(&self, account: &Pubkey) -> bool;
}

pub fn deposit<T: ValueTransfer>(
    pool: &mut PoolState,
    depositor: &mut Depositor,
    owner: &Pubkey,
    amount: u64,
    transfer: &mut T,
) -> Result<()> {
    let mut next_pool = pool.clone();
    let mut next_depositor = depositor.clone();
    ledger::deposit_stake(&mut next_pool, &mut next_depositor, amount)?;

    transfer.pull_in(owner, amount)?;

    *pool = next_pool;
    *depositor = next_depositor;
    Ok(())
}

/// Returns the payout (stake withdrawn plus all owed reward).
pub fn withdraw<T: ValueTransfer>(
    pool: &mut PoolState,
    depositor: &mut Depositor,
    owner: &Pubkey,
    amount: u64,
    transfer: &mut T,
) -> Result<u64> {
    let mut next_pool = pool.clone();
    let mut next_depositor = depositor.clone();
    let payout = ledger::withdraw_stake(&mut next_pool, &mut next_depositor, amount)?;

    transfer.push_out(owner, payout)?;

    *pool = next_pool;
    *depositor = next_depositor;
    Ok(payout)
}

pub fn inject_reward<M: Membership, T: ValueTransfer>(
    pool: &mut PoolState,
    members: &M,
    caller: &Pubkey,
    amount: u64,
    transfer: &mut T,
) -> Result<()> {
    require!(members.is_privileged(caller), ErrorCode::Unauthorized);
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(pool.total_stake > 0, ErrorCode::EmptyPool);

    let mut next_pool = pool.clone();
    next_pool.inject_reward(amount)?;

    transfer.pull_in(caller, amount)?;

    *pool = next_pool;
    Ok(())
}

/// Returns the reward paid out; stake is left in place.
pub fn claim<T: ValueTransfer>(
    pool: &mut PoolState,
    depositor: &mut Depositor,
    owner: &Pubkey,
    transfer: &mut T,
) -> Result<u64> {
    let mut next_pool = pool.clone();
    let mut next_depositor = depositor.clone();
    let reward = ledger::claim_owed(&mut next_pool, &mut next_depositor)?;

    transfer.push_out(owner, reward)?;

    *pool = next_pool;
    *depositor = next_depositor;
    Ok(reward)
}

// ══════════════════════════════════════════════════════════════════════════════
// QUERIES
// ══════════════════════════════════════════════════════════════════════════════

pub fn pending_reward(pool: &PoolState, depositor: &Depositor) -> Result<u64> {
    depositor.pending_reward(pool.acc_reward_per_share())
}

pub fn stake_of(depositor: &Depositor) -> u64 {
    depositor.stake
}

pub fn total_stake(pool: &PoolState) -> u64 {
    pool.total_stake
}

pub fn reward_pool_balance(pool: &PoolState) -> u64 {
    pool.reward_pool_balance
}

pub fn is_privileged<M: Membership>(members: &M, account: &Pubkey) -> bool {
    members.is_privileged(account)
}
