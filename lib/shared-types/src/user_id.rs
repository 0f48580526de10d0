use crate::macros::uuid_newtype;

uuid_newtype!(
    /// Identifier of a storefront customer account
    UserId
);
