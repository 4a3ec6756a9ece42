use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::constants::VAULT_SEED;
use crate::errors::ErrorCode;
use crate::processor::ValueTransfer;

/// System Program transfers between a signer and the pool vault
///
/// `pull_in` moves lamports signer -> vault; `push_out` moves them
/// vault -> signer, signed with the vault PDA seeds. Both verify the
/// receiving balance afterwards.
pub struct SystemTransfer<'info> {
    /// Signer paying in or receiving payouts
    pub counterparty: AccountInfo<'info>,
    /// Vault PDA (system-owned)
    pub vault: AccountInfo<'info>,
    pub system_program: AccountInfo<'info>,
    /// Pool the vault PDA is derived from
    pub pool: Pubkey,
    pub vault_bump: [u8; 1],
    /// Lamports the vault must keep to stay rent exempt
    pub rent_reserve: u64,
}

impl<'info> SystemTransfer<'info> {
    /// Transfer endpoint for one instruction, reserving the vault's
    /// rent-exempt minimum from the Rent sysvar
    pub fn new(
        counterparty: AccountInfo<'info>,
        vault: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
        pool: Pubkey,
        vault_bump: u8,
    ) -> Result<Self> {
        Ok(Self {
            counterparty,
            vault,
            system_program,
            pool,
            vault_bump: [vault_bump],
            rent_reserve: Rent::get()?.minimum_balance(0),
        })
    }

    /// Vault PDA signer seeds: ["vault", pool, bump]
    pub fn vault_seeds(&self) -> [&[u8]; 3] {
        [VAULT_SEED, self.pool.as_ref(), &self.vault_bump]
    }
}

impl<'info> ValueTransfer for SystemTransfer<'info> {
    #[inline(never)]
    fn pull_in(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*from, self.counterparty.key(), ErrorCode::TransferFailed);

        let vault_balance_before = self.vault.lamports();

        system_program::transfer(
            CpiContext::new(
                self.system_program.clone(),
                Transfer {
                    from: self.counterparty.clone(),
                    to: self.vault.clone(),
                },
            ),
            amount,
        )?;

        require!(
            self.vault.lamports() >= vault_balance_before.saturating_add(amount),
            ErrorCode::TransferFailed
        );

        Ok(())
    }

    #[inline(never)]
    fn push_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(*to, self.counterparty.key(), ErrorCode::TransferFailed);

        // Payouts never dip into the rent reserve
        let available = self.vault.lamports().saturating_sub(self.rent_reserve);
        require!(amount <= available, ErrorCode::TransferFailed);

        let recipient_balance_before = self.counterparty.lamports();
        let seeds: &[&[u8]] = &self.vault_seeds();

        system_program::transfer(
            CpiContext::new_with_signer(
                self.system_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: self.counterparty.clone(),
                },
                &[seeds],
            ),
            amount,
        )?;

        require!(
            self.counterparty.lamports() >= recipient_balance_before.saturating_add(amount),
            ErrorCode::TransferFailed
        );

        Ok(())
    }
}
