use alloc::vec::Vec;

use num::BigUint;

use crate::{Felt, U256};

pub(crate) fn to_biguint(x: &U256) -> BigUint {
    BigUint::from_bytes_le(&x.to_le_bytes())
}

pub(crate) fn from_biguint(x: &BigUint) -> U256 {
    let mut bytes = [0u8; 32];
    let le = x.to_bytes_le();
    bytes[..le.len()].copy_from_slice(&le);
    U256::from_le_bytes(&bytes)
}

pub(crate) fn modulus() -> BigUint {
    to_biguint(&Felt::modulus())
}

/// Generates a series of non-negative integers less than `modulus` which cover a range of
/// interesting test values.
pub(crate) fn test_inputs() -> Vec<BigUint> {
    const CHUNK_SIZE: u64 = 4;

    let modulus = modulus();
    let one = BigUint::from(1u8);
    let mut inputs: Vec<BigUint> = (0..CHUNK_SIZE).map(BigUint::from).collect();
    for bits in [64u32, 128, 192, 251] {
        let centre = &one << bits;
        for i in 0..2 * CHUNK_SIZE {
            inputs.push(&centre + i - CHUNK_SIZE);
        }
    }
    for i in 1..=CHUNK_SIZE {
        inputs.push(&modulus - i);
    }
    inputs.retain(|x| x < &modulus);
    inputs
}

/// Apply the unary functions `op` and `expected_op`
/// coordinate-wise to the inputs from `test_inputs()` and panic if the two
/// resulting vectors differ.
pub(crate) fn run_unaryop_test_cases<UnaryOp, ExpectedOp>(op: UnaryOp, expected_op: ExpectedOp)
where
    UnaryOp: Fn(Felt) -> Felt,
    ExpectedOp: Fn(&BigUint) -> BigUint,
{
    for input in test_inputs() {
        let actual = to_biguint(&op(Felt::from_canonical(&from_biguint(&input))).to_canonical());
        let expected = expected_op(&input);
        assert_eq!(
            actual, expected,
            "Expected {}, got {} for input {}",
            expected, actual, input
        );
    }
}

/// Apply the binary functions `op` and `expected_op` to each pair of inputs.
pub(crate) fn run_binaryop_test_cases<BinaryOp, ExpectedOp>(op: BinaryOp, expected_op: ExpectedOp)
where
    BinaryOp: Fn(Felt, Felt) -> Felt,
    ExpectedOp: Fn(&BigUint, &BigUint) -> BigUint,
{
    let inputs = test_inputs();

    for lhs in &inputs {
        for rhs in &inputs {
            let lhs_f = Felt::from_canonical(&from_biguint(lhs));
            let rhs_f = Felt::from_canonical(&from_biguint(rhs));
            let actual = to_biguint(&op(lhs_f, rhs_f).to_canonical());
            let expected = expected_op(lhs, rhs);
            assert_eq!(
                actual, expected,
                "Expected {}, got {} for inputs ({}, {})",
                expected, actual, lhs, rhs
            );
        }
    }
}

#[macro_export]
macro_rules! test_prime_field_arithmetic {
    ($field:ty) => {
        mod prime_field_arithmetic {
            use core::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Sub};

            use num::BigUint;

            use $crate::prime_field_testing::{
                modulus, run_binaryop_test_cases, run_unaryop_test_cases,
            };

            #[test]
            fn arithmetic_addition() {
                let p = modulus();
                run_binaryop_test_cases(<$field>::add, |x, y| (x + y) % &p)
            }

            #[test]
            fn arithmetic_subtraction() {
                let p = modulus();
                run_binaryop_test_cases(<$field>::sub, |x, y| (x + &p - y) % &p)
            }

            #[test]
            fn arithmetic_negation() {
                let p = modulus();
                run_unaryop_test_cases(<$field>::neg, |x| (&p - x) % &p)
            }

            #[test]
            fn arithmetic_multiplication() {
                let p = modulus();
                run_binaryop_test_cases(<$field>::mul, |x, y| x * y % &p)
            }

            #[test]
            fn arithmetic_square() {
                let p = modulus();
                run_unaryop_test_cases(|x: $field| x.square(), |x| x * x % &p)
            }

            #[test]
            fn bitwise_operations() {
                let p = modulus();
                run_binaryop_test_cases(<$field>::bitand, |x, y| (x & y) % &p);
                run_binaryop_test_cases(<$field>::bitor, |x, y| (x | y) % &p);
                run_binaryop_test_cases(<$field>::bitxor, |x, y| (x ^ y) % &p);
            }

            #[test]
            fn inversion() {
                let zero = <$field>::zero();
                let one = <$field>::one();

                assert!(zero.inverse().is_err());

                run_unaryop_test_cases(
                    |x: $field| {
                        if x.is_zero() {
                            x
                        } else {
                            let inv = x.inverse().unwrap();
                            assert_eq!(x * inv, one);
                            inv
                        }
                    },
                    |x| {
                        let p = modulus();
                        if *x == BigUint::from(0u8) {
                            BigUint::from(0u8)
                        } else {
                            x.modpow(&(&p - 2u8), &p)
                        }
                    },
                );
            }

            #[test]
            fn subtraction_double_wraparound() {
                type F = $field;

                let (a, b) = (F::signed_felt_max() + F::one(), F::TWO);
                let x = a * b;
                assert_eq!(x, F::one());
                assert_eq!(F::zero() - x, F::MAX);
            }

            #[test]
            fn addition_double_wraparound() {
                type F = $field;

                let a = F::from_u64(u64::MAX);
                let b = F::MAX;

                let c = (a + a) + (b + b);
                let d = (a + b) + (a + b);

                assert_eq!(c, d);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    mod felt {
        use crate::{test_field_arithmetic, test_prime_field_arithmetic};

        test_prime_field_arithmetic!(crate::Felt);
        test_field_arithmetic!(crate::Felt);
    }
}
