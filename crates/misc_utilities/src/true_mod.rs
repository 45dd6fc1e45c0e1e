crate::trait_alias!(pub trait Modular = num::Signed + Copy);

/// Modulo whose result takes the sign of the modulus, so `x.true_mod(m)` is in `[0, m)` for `m > 0`.
///
/// `%` on its own keeps the sign of the dividend, which is exactly what breaks wrap-around arithmetic.
pub trait TrueMod {
    fn true_mod(&self, modulus: Self) -> Self;
}

impl<T: Modular> TrueMod for T {
    fn true_mod(&self, modulus: Self) -> Self {
        ((*self % modulus) + modulus) % modulus
    }
}
