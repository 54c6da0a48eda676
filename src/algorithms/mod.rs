//! Building blocks of the RSA transform pipeline.

pub(crate) mod generate;
pub mod pad;
pub(crate) mod rsa;
