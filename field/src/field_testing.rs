#[macro_export]
macro_rules! test_field_arithmetic {
    ($field:ty) => {
        mod field_arithmetic {
            use num::bigint::BigUint;
            use rand::rngs::OsRng;
            use rand::Rng;
            use $crate::prime_field_testing::{from_biguint, modulus};
            use $crate::types::Sample;

            type F = $field;

            #[test]
            fn field_axioms() {
                for _ in 0..16 {
                    let [a, b, c] = F::rand_array::<3>();
                    assert_eq!((a + b) + c, a + (b + c));
                    assert_eq!(a + b, b + a);
                    assert_eq!(a * b, b * a);
                    assert_eq!((a * b) * c, a * (b * c));
                    assert_eq!(a * (b + c), a * b + a * c);
                    assert_eq!(a * F::one(), a);
                    assert_eq!(a + F::zero(), a);
                    assert_eq!((a + b) - b, a);
                    assert_eq!(a - (b + c), (a - b) - c);
                }
            }

            #[test]
            fn negation() {
                for x in [F::zero(), F::one(), F::TWO, F::MAX, F::rand()] {
                    assert_eq!(x + -x, F::zero());
                    assert_eq!(-x, F::zero() - x);
                    assert_eq!(x * (-x), -x.square());
                }
            }

            #[test]
            fn exponentiation() {
                assert_eq!(F::zero().pow_u64(0), F::one());
                assert_eq!(F::one().pow_u64(0), F::one());
                assert_eq!(F::TWO.pow_u64(0), F::one());

                assert_eq!(F::zero().pow_u64(1), F::zero());
                assert_eq!(F::one().pow_u64(1), F::one());
                assert_eq!(F::TWO.pow_u64(1), F::TWO);

                let x = F::rand();
                assert_eq!(x.pow_u64(3), x * x * x);
                assert_eq!(x.pow_u64(6), x.pow_u64(3).square());
            }

            #[test]
            fn exponentiation_large() {
                let mut rng = OsRng;

                let base = F::rand();
                let pow = BigUint::from(rng.gen::<u64>());
                let cycles = rng.gen_range(1..16u32);
                let mul_group_order = modulus() - 1u32;
                let big_pow = &pow + &mul_group_order * cycles;
                let big_pow_wrong = &pow + &mul_group_order * cycles + 1u32;

                // p < 2^252 and cycles < 2^4, so the exponents fit in 256 bits.
                let exp = |e: &BigUint| base.pow_u256(&from_biguint(e));
                assert_eq!(exp(&pow), exp(&big_pow));
                if !base.is_zero() && !base.is_one() {
                    assert_ne!(exp(&pow), exp(&big_pow_wrong));
                }
            }

            #[test]
            fn inverses() {
                let x = F::rand();
                if x.is_zero() {
                    return;
                }
                let x1 = x.inverse().unwrap();
                let x2 = x1.inverse().unwrap();
                let x3 = x2.inverse().unwrap();

                assert_eq!(x, x2);
                assert_eq!(x1, x3);
            }

            #[test]
            fn inv_div() {
                let [x, y, z] = F::rand_array::<3>();
                if x.is_zero() || y.is_zero() || z.is_zero() {
                    return;
                }
                assert_eq!(x * x.inverse().unwrap(), F::one());
                assert_eq!(x.square().inverse().unwrap(), x.inverse().unwrap().square());
                assert_eq!(x.checked_div(&y).unwrap() * y, x);
                assert_eq!(
                    x.checked_div(&(y * z)).unwrap(),
                    x.checked_div(&y).unwrap().checked_div(&z).unwrap()
                );
                assert_eq!(
                    (x * y).checked_div(&z).unwrap(),
                    x * y.checked_div(&z).unwrap()
                );
            }

            #[test]
            fn field_order() {
                let x = F::rand();
                if !x.is_zero() {
                    assert_eq!(x.pow(&F::MAX), F::one());
                }
            }
        }
    };
}
