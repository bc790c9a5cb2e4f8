// ============================================================================
// Operator Overloads
// std::ops surface over the checked broadcast core
// ============================================================================
//
// Plain operators (`+ - * /`, both operand orders) wrap the checked_*
// methods and panic on failure - use checked_* in production. The assign
// operators (`+= -= *= /=`) carry the in-place mutation contract: the
// receiver is replaced only after the checked computation succeeds, so a
// failed operation never half-applies.

use super::core::Sequence;
use rust_decimal::Decimal;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {$(
        impl Add<$t> for &Sequence {
            type Output = Sequence;

            fn add(self, rhs: $t) -> Sequence {
                self.checked_add(rhs).expect("sequence addition failed")
            }
        }

        impl Add<$t> for Sequence {
            type Output = Sequence;

            fn add(self, rhs: $t) -> Sequence {
                &self + rhs
            }
        }

        impl Add<&Sequence> for $t {
            type Output = Sequence;

            fn add(self, rhs: &Sequence) -> Sequence {
                rhs.checked_radd(self).expect("sequence addition failed")
            }
        }

        impl Add<Sequence> for $t {
            type Output = Sequence;

            fn add(self, rhs: Sequence) -> Sequence {
                self + &rhs
            }
        }

        impl Sub<$t> for &Sequence {
            type Output = Sequence;

            fn sub(self, rhs: $t) -> Sequence {
                self.checked_sub(rhs).expect("sequence subtraction failed")
            }
        }

        impl Sub<$t> for Sequence {
            type Output = Sequence;

            fn sub(self, rhs: $t) -> Sequence {
                &self - rhs
            }
        }

        impl Sub<&Sequence> for $t {
            type Output = Sequence;

            fn sub(self, rhs: &Sequence) -> Sequence {
                rhs.checked_rsub(self).expect("sequence subtraction failed")
            }
        }

        impl Sub<Sequence> for $t {
            type Output = Sequence;

            fn sub(self, rhs: Sequence) -> Sequence {
                self - &rhs
            }
        }

        impl Mul<$t> for &Sequence {
            type Output = Sequence;

            fn mul(self, rhs: $t) -> Sequence {
                self.checked_mul(rhs).expect("sequence multiplication failed")
            }
        }

        impl Mul<$t> for Sequence {
            type Output = Sequence;

            fn mul(self, rhs: $t) -> Sequence {
                &self * rhs
            }
        }

        impl Mul<&Sequence> for $t {
            type Output = Sequence;

            fn mul(self, rhs: &Sequence) -> Sequence {
                rhs.checked_rmul(self).expect("sequence multiplication failed")
            }
        }

        impl Mul<Sequence> for $t {
            type Output = Sequence;

            fn mul(self, rhs: Sequence) -> Sequence {
                self * &rhs
            }
        }

        impl Div<$t> for &Sequence {
            type Output = Sequence;

            fn div(self, rhs: $t) -> Sequence {
                self.checked_div(rhs).expect("sequence division failed")
            }
        }

        impl Div<$t> for Sequence {
            type Output = Sequence;

            fn div(self, rhs: $t) -> Sequence {
                &self / rhs
            }
        }

        impl Div<&Sequence> for $t {
            type Output = Sequence;

            fn div(self, rhs: &Sequence) -> Sequence {
                rhs.checked_rdiv(self).expect("sequence division failed")
            }
        }

        impl Div<Sequence> for $t {
            type Output = Sequence;

            fn div(self, rhs: Sequence) -> Sequence {
                self / &rhs
            }
        }

        impl AddAssign<$t> for Sequence {
            fn add_assign(&mut self, rhs: $t) {
                *self = self.checked_add(rhs).expect("sequence addition failed");
            }
        }

        impl SubAssign<$t> for Sequence {
            fn sub_assign(&mut self, rhs: $t) {
                *self = self.checked_sub(rhs).expect("sequence subtraction failed");
            }
        }

        impl MulAssign<$t> for Sequence {
            fn mul_assign(&mut self, rhs: $t) {
                *self = self.checked_mul(rhs).expect("sequence multiplication failed");
            }
        }

        impl DivAssign<$t> for Sequence {
            fn div_assign(&mut self, rhs: $t) {
                *self = self.checked_div(rhs).expect("sequence division failed");
            }
        }
    )*};
}

impl_scalar_ops!(i64, i32, u32, f64, Decimal);

macro_rules! impl_sequence_ops {
    ($($trait:ident, $method:ident, $checked:ident, $msg:literal;)*) => {$(
        impl $trait<&Sequence> for &Sequence {
            type Output = Sequence;

            fn $method(self, rhs: &Sequence) -> Sequence {
                self.$checked(rhs).expect($msg)
            }
        }

        impl $trait<&Sequence> for Sequence {
            type Output = Sequence;

            fn $method(self, rhs: &Sequence) -> Sequence {
                (&self).$method(rhs)
            }
        }

        impl $trait<Sequence> for Sequence {
            type Output = Sequence;

            fn $method(self, rhs: Sequence) -> Sequence {
                (&self).$method(&rhs)
            }
        }
    )*};
}

impl_sequence_ops!(
    Add, add, checked_add, "sequence addition failed";
    Sub, sub, checked_sub, "sequence subtraction failed";
    Mul, mul, checked_mul, "sequence multiplication failed";
    Div, div, checked_div, "sequence division failed";
);

impl AddAssign<&Sequence> for Sequence {
    fn add_assign(&mut self, rhs: &Sequence) {
        *self = self.checked_add(rhs).expect("sequence addition failed");
    }
}

impl SubAssign<&Sequence> for Sequence {
    fn sub_assign(&mut self, rhs: &Sequence) {
        *self = self.checked_sub(rhs).expect("sequence subtraction failed");
    }
}

impl MulAssign<&Sequence> for Sequence {
    fn mul_assign(&mut self, rhs: &Sequence) {
        *self = self.checked_mul(rhs).expect("sequence multiplication failed");
    }
}

impl DivAssign<&Sequence> for Sequence {
    fn div_assign(&mut self, rhs: &Sequence) {
        *self = self.checked_div(rhs).expect("sequence division failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_scalar_operators_both_orders() {
        let a = Sequence::new([1, 2, 3]).unwrap();
        assert_eq!((&a + 1i32).as_slice(), &[dec("2"), dec("3"), dec("4")]);
        assert_eq!((1i32 + &a).as_slice(), &[dec("2"), dec("3"), dec("4")]);
        assert_eq!((&a - 1i32).as_slice(), &[dec("0"), dec("1"), dec("2")]);
        assert_eq!((10i32 - &a).as_slice(), &[dec("9"), dec("8"), dec("7")]);
        assert_eq!((&a * 2i32).as_slice(), &[dec("2"), dec("4"), dec("6")]);
        assert_eq!((12i32 / &a).as_slice(), &[dec("12"), dec("6"), dec("4")]);
    }

    #[test]
    fn test_float_scalar_operator_is_exact() {
        let a = Sequence::new([1, 2]).unwrap();
        let b = &a * 0.1;
        assert_eq!(b.as_slice(), &[dec("0.1"), dec("0.2")]);
    }

    #[test]
    fn test_sequence_operators() {
        let a = Sequence::new([1, 2, 3]).unwrap();
        let b = Sequence::new([4, 5, 6]).unwrap();
        assert_eq!((&a + &b).as_slice(), &[dec("5"), dec("7"), dec("9")]);
        assert_eq!((&b - &a).as_slice(), &[dec("3"), dec("3"), dec("3")]);
        assert_eq!((&a * &b).as_slice(), &[dec("4"), dec("10"), dec("18")]);
        assert_eq!((&b / &a).as_slice(), &[dec("4"), dec("2.5"), dec("2")]);
    }

    #[test]
    fn test_assign_operators_mutate_in_place() {
        let mut a = Sequence::new([1, 2, 3]).unwrap();
        a += 10;
        assert_eq!(a.as_slice(), &[dec("11"), dec("12"), dec("13")]);
        a -= 10;
        a *= 3;
        assert_eq!(a.as_slice(), &[dec("3"), dec("6"), dec("9")]);
        a /= 3;

        let b = Sequence::new([1, 1, 1]).unwrap();
        a += &b;
        assert_eq!(a.as_slice(), &[dec("2"), dec("3"), dec("4")]);
    }

    #[test]
    #[should_panic(expected = "sequence addition failed")]
    fn test_operator_panics_on_length_mismatch() {
        let a = Sequence::new([1, 2, 3]).unwrap();
        let b = Sequence::new([1, 2]).unwrap();
        let _ = &a + &b;
    }
}
