//! Big Int \
//! This crate provides:
//! - [`BigInt`]: arbitrary-precision signed integers. All operations behave as if the value
//!   were stored in two's-complement notation over an unbounded sequence of 32-bit limbs;
//!   compound-assignment operators mutate in place.
//! - [`ParseBigIntError`] / [`ReadTokenError`]: errors of the decimal text codec.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;
mod limb_vec;

pub use big_int::BigInt;
pub use error::{ParseBigIntError, ReadTokenError};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");
    }
}
