use crate::macros::uuid_newtype;

uuid_newtype!(
    /// Identifier of a catalog product referenced by order lines
    ProductId
);
