//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
//!
//! Every function here is a `const fn` so the S-boxes can be derived at compile
//! time instead of being pasted in as literals.

/// Low byte of the reduction polynomial `0x11b`.
const REDUCTION: u8 = 0x1b;

/// Multiplies `a` by `x` (the element `0x02`).
#[inline]
pub const fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements: carry-less product followed by reduction.
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Raises `base` to the power `exp` by square-and-multiply.
pub const fn gpow(mut base: u8, mut exp: u8) -> u8 {
    let mut result = 1u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gmul(result, base);
        }
        base = gmul(base, base);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse, computed as `a^254`. Zero maps to zero.
#[inline]
pub const fn gf_inv(a: u8) -> u8 {
    gpow(a, 254)
}
