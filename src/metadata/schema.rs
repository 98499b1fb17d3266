//! Declarative account lists.
//!
//! A builder describes its accounts as a fixed prefix of required metas
//! followed by optional slots. Each optional slot carries the rule that
//! decides whether it lands in the final list, so adding a slot to an
//! instruction never means touching branching code.

use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};

/// Decides whether an optional slot is part of the resolved account list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inclusion {
    /// Included only for a supplied key other than the all-zero key.
    NonDefault,
}

impl Inclusion {
    pub fn includes(self, key: Option<&Pubkey>) -> bool {
        match (self, key) {
            (_, None) => false,
            (Inclusion::NonDefault, Some(key)) => *key != Pubkey::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionalSlot {
    pub key: Option<Pubkey>,
    pub is_signer: bool,
    pub is_writable: bool,
    pub inclusion: Inclusion,
}

impl OptionalSlot {
    fn resolve(&self) -> Option<AccountMeta> {
        let key = self.key.filter(|key| self.inclusion.includes(Some(key)))?;
        Some(AccountMeta {
            pubkey: key,
            is_signer: self.is_signer,
            is_writable: self.is_writable,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountSchema {
    required: Vec<AccountMeta>,
    optional: Vec<OptionalSlot>,
}

impl AccountSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(mut self, pubkey: Pubkey, is_signer: bool, is_writable: bool) -> Self {
        self.required.push(AccountMeta {
            pubkey,
            is_signer,
            is_writable,
        });
        self
    }

    pub fn readonly(self, pubkey: Pubkey) -> Self {
        self.account(pubkey, false, false)
    }

    pub fn writable(self, pubkey: Pubkey) -> Self {
        self.account(pubkey, false, true)
    }

    pub fn signer(self, pubkey: Pubkey) -> Self {
        self.account(pubkey, true, false)
    }

    pub fn writable_signer(self, pubkey: Pubkey) -> Self {
        self.account(pubkey, true, true)
    }

    /// Appends a slot that is resolved after every required account.
    pub fn optional(
        mut self,
        key: Option<Pubkey>,
        is_signer: bool,
        is_writable: bool,
        inclusion: Inclusion,
    ) -> Self {
        self.optional.push(OptionalSlot {
            key,
            is_signer,
            is_writable,
            inclusion,
        });
        self
    }

    pub fn required(&self) -> &[AccountMeta] {
        &self.required
    }

    pub fn optional_slots(&self) -> &[OptionalSlot] {
        &self.optional
    }

    pub fn resolve(self) -> Vec<AccountMeta> {
        let mut accounts = self.required;
        accounts.extend(self.optional.iter().filter_map(OptionalSlot::resolve));
        accounts
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountSchema, Inclusion};
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn inclusion_rules() {
        let key = Pubkey::new_unique();
        let zero = Pubkey::default();
        assert!(Inclusion::NonDefault.includes(Some(&key)));
        assert!(!Inclusion::NonDefault.includes(Some(&zero)));
        assert!(!Inclusion::NonDefault.includes(None));
    }

    #[test]
    fn optional_slots_follow_required_accounts() {
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let extra = Pubkey::new_unique();
        let schema = AccountSchema::new()
            .writable(first)
            .optional(Some(extra), false, true, Inclusion::NonDefault)
            .signer(second);
        assert_eq!(schema.required().len(), 2);
        assert_eq!(schema.optional_slots().len(), 1);

        let accounts = schema.resolve();
        let keys: Vec<_> = accounts.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(keys, vec![first, second, extra]);
        assert!(accounts[2].is_writable);
        assert!(!accounts[2].is_signer);
    }

    #[test]
    fn excluded_slots_drop_out() {
        let schema = AccountSchema::new()
            .readonly(Pubkey::new_unique())
            .optional(None, false, false, Inclusion::NonDefault)
            .optional(Some(Pubkey::default()), false, false, Inclusion::NonDefault);
        assert_eq!(schema.resolve().len(), 1);
    }
}
