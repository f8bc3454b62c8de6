use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// Accounts of one token movement, valid for both SPL Token and Token 2022
pub struct TokenTransfer<'a> {
    pub token_program: AccountInfo<'a>,
    pub mint: AccountInfo<'a>,
    pub from: AccountInfo<'a>,
    pub to: AccountInfo<'a>,
    pub authority: AccountInfo<'a>,
}

impl<'a> TokenTransfer<'a> {
    /// Transfer authorized by a wallet that signed the transaction
    pub fn signed_by_wallet(self, amount: u64, decimals: u8) -> Result<()> {
        let accounts = self.cpi_accounts();
        let cpi_ctx = CpiContext::new(self.token_program, accounts);
        transfer_checked(cpi_ctx, amount, decimals)
    }

    /// Transfer authorized by a program PDA
    pub fn signed_by_pda(
        self,
        amount: u64,
        decimals: u8,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        let accounts = self.cpi_accounts();
        let cpi_ctx = CpiContext::new_with_signer(self.token_program, accounts, signer_seeds);
        transfer_checked(cpi_ctx, amount, decimals)
    }

    fn cpi_accounts(&self) -> TransferChecked<'a> {
        TransferChecked {
            from: self.from.clone(),
            mint: self.mint.clone(),
            to: self.to.clone(),
            authority: self.authority.clone(),
        }
    }
}
