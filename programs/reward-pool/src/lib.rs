use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod processor;
pub mod state;

mod formal_verification;

use constants::*;
use contexts::*;
pub use errors::ErrorCode;
use events::*;
use helpers::cpi::SystemTransfer;
use helpers::math::format_lamports;
use state::*;

declare_id!("RwdPoo1KxUq5DkrWqFvq4T3i1Z9LgJ8Qm6YcHs2pN7e");

#[program]
pub mod reward_pool {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, extra_members: Vec<Pubkey>) -> Result<()> {
        let clock = Clock::get()?;
        let admin = ctx.accounts.admin.key();

        let registry = TeamRegistry::with_members(admin, &extra_members, ctx.bumps.team_registry)?;
        let team_members = registry.members.len() as u8;
        ctx.accounts.team_registry.set_inner(registry);

        let state = &mut ctx.accounts.pool_state;
        state.admin = admin;
        state.total_stake = 0;
        state.acc_reward_per_share = 0;
        state.reward_pool_balance = 0;
        state.total_rewards_paid = 0;
        state.depositor_count = 0;
        state.initialized_at = clock.unix_timestamp;
        state.vault_bump = ctx.bumps.vault;
        state.bump = ctx.bumps.pool_state;

        // Vault must hold the rent-exempt minimum before it can custody lamports
        let rent_reserve = Rent::get()?.minimum_balance(0);
        let shortfall = rent_reserve.saturating_sub(ctx.accounts.vault.to_account_info().lamports());
        if shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.admin.to_account_info(),
                        to: ctx.accounts.vault.to_account_info(),
                    },
                ),
                shortfall,
            )?;
        }

        msg!("Pool initialized with {} team member(s)", team_members);

        emit!(PoolInitialized {
            admin,
            vault: ctx.accounts.vault.key(),
            team_members,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn deposit(mut ctx: Context<Deposit>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let depositor_bump = ctx.bumps.depositor;
        let accounts = &mut ctx.accounts;
        let owner = accounts.owner.key();

        // Fresh record from init_if_needed
        if accounts.depositor.owner == Pubkey::default() {
            accounts.depositor.owner = owner;
            accounts.depositor.bump = depositor_bump;
            accounts.pool_state.depositor_count =
                accounts.pool_state.depositor_count.saturating_add(1);
        }

        let mut transfer = SystemTransfer::new(
            accounts.owner.to_account_info(),
            accounts.vault.to_account_info(),
            accounts.system_program.to_account_info(),
            accounts.pool_state.key(),
            accounts.pool_state.vault_bump,
        )?;

        processor::deposit(
            &mut accounts.pool_state,
            &mut accounts.depositor,
            &owner,
            amount,
            &mut transfer,
        )?;

        let (whole, frac) = format_lamports(amount);
        msg!("Deposited {}.{:09} SOL ({} lamports)", whole, frac, amount);

        emit!(Deposited {
            owner,
            amount,
            stake: accounts.depositor.stake,
            total_stake: accounts.pool_state.total_stake,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn withdraw(mut ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let accounts = &mut ctx.accounts;
        let owner = accounts.owner.key();

        let mut transfer = SystemTransfer::new(
            accounts.owner.to_account_info(),
            accounts.vault.to_account_info(),
            accounts.system_program.to_account_info(),
            accounts.pool_state.key(),
            accounts.pool_state.vault_bump,
        )?;

        let payout = processor::withdraw(
            &mut accounts.pool_state,
            &mut accounts.depositor,
            &owner,
            amount,
            &mut transfer,
        )?;
        let reward = payout - amount;

        let (whole, frac) = format_lamports(payout);
        msg!("Withdrawn {}.{:09} SOL ({} stake + {} reward lamports)", whole, frac, amount, reward);

        emit!(Withdrawn {
            owner,
            amount,
            reward,
            payout,
            total_stake: accounts.pool_state.total_stake,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn deposit_rewards(mut ctx: Context<DepositRewards>, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        let accounts = &mut ctx.accounts;
        let team_member = accounts.team_member.key();

        let mut transfer = SystemTransfer::new(
            accounts.team_member.to_account_info(),
            accounts.vault.to_account_info(),
            accounts.system_program.to_account_info(),
            accounts.pool_state.key(),
            accounts.pool_state.vault_bump,
        )?;

        processor::inject_reward(
            &mut accounts.pool_state,
            &*accounts.team_registry,
            &team_member,
            amount,
            &mut transfer,
        )?;

        let state = &accounts.pool_state;
        let (whole, frac) = format_lamports(amount);
        msg!("Rewards deposited: {}.{:09} SOL over {} staked lamports", whole, frac, state.total_stake);

        emit!(RewardsDeposited {
            team_member,
            amount,
            total_stake: state.total_stake,
            acc_reward_per_share: state.acc_reward_per_share,
            reward_pool_balance: state.reward_pool_balance,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn claim(mut ctx: Context<Withdraw>) -> Result<()> {
        let clock = Clock::get()?;
        let accounts = &mut ctx.accounts;
        let owner = accounts.owner.key();

        let mut transfer = SystemTransfer::new(
            accounts.owner.to_account_info(),
            accounts.vault.to_account_info(),
            accounts.system_program.to_account_info(),
            accounts.pool_state.key(),
            accounts.pool_state.vault_bump,
        )?;

        let reward = processor::claim(
            &mut accounts.pool_state,
            &mut accounts.depositor,
            &owner,
            &mut transfer,
        )?;

        msg!("Claimed {} reward lamports", reward);

        emit!(RewardsClaimed {
            owner,
            amount: reward,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // VIEWS
    // ══════════════════════════════════════════════════════════════════════════

    pub fn get_pending_rewards(ctx: Context<DepositorView>, _owner: Pubkey) -> Result<u64> {
        let depositor = Depositor::load_or_default(&ctx.accounts.depositor.to_account_info())?;
        processor::pending_reward(&ctx.accounts.pool_state, &depositor)
    }

    pub fn get_deposit(ctx: Context<DepositorView>, _owner: Pubkey) -> Result<u64> {
        let depositor = Depositor::load_or_default(&ctx.accounts.depositor.to_account_info())?;
        Ok(processor::stake_of(&depositor))
    }

    pub fn get_total_supplied_balance(ctx: Context<PoolView>) -> Result<u64> {
        Ok(processor::total_stake(&ctx.accounts.pool_state))
    }

    pub fn get_reward_pool_balance(ctx: Context<PoolView>) -> Result<u64> {
        Ok(processor::reward_pool_balance(&ctx.accounts.pool_state))
    }

    pub fn is_team_member(ctx: Context<TeamView>, account: Pubkey) -> Result<bool> {
        Ok(processor::is_privileged(&*ctx.accounts.team_registry, &account))
    }
}
