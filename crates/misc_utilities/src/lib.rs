pub mod trait_alias_macro;

mod true_mod;
pub use true_mod::{Modular, TrueMod};
