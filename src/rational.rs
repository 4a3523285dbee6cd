use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub}
};
use thiserror::Error;

/// The ways constructing or dividing a rational can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// The denominator handed to the constructor was zero.
    #[error("denominator is zero")]
    ZeroDenominator,
    /// The right-hand side of a division was a zero-valued rational.
    #[error("division by a zero-valued rational")]
    DivisionByZero
}

/// A number stored as a ratio of two big integers instead of actually
/// calculating the result. This ensures (10/3) * 3 is actually 10 and not
/// 9.99998, and because both components are arbitrary-precision no
/// operation can overflow.
///
/// Every value is canonical: lowest terms, positive denominator (the sign
/// lives on the numerator), and zero is always 0/1. The constructor
/// establishes this and every operation routes its raw result back through
/// the constructor, so the invariants hold for every value you can get
/// your hands on.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt
}
impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}
impl Rational {
    /// Construct a new rational from a numerator and denominator, reduced
    /// to lowest terms. Anything that widens into a `BigInt` is accepted,
    /// so machine-width integers work directly.
    ///
    /// Fails with `RationalError::ZeroDenominator` if the denominator is 0.
    pub fn new<N, D>(numerator: N, denominator: D) -> Result<Self, RationalError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>
    {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        if numerator.is_zero() {
            // Zero always canonicalizes to 0/1. Skip the gcd: gcd(0, d) is
            // d itself, which would collapse the denominator against a
            // numerator that carries no information.
            return Ok(Self {
                numerator,
                denominator: BigInt::one()
            });
        }
        // Reduce by the gcd first, then move the sign to the numerator.
        // The gcd is never negative, so dividing by it leaves both signs
        // alone and the second step sees the real sign of the denominator.
        let gcd = numerator.gcd(&denominator);
        let numerator = numerator / &gcd;
        let denominator = denominator / &gcd;
        if denominator.is_negative() {
            Ok(Self {
                numerator: -numerator,
                denominator: -denominator
            })
        } else {
            Ok(Self {
                numerator,
                denominator
            })
        }
    }
    // Construction path shared by every operator. The raw denominator is
    // always a product of live (positive) denominators, so the zero check
    // in `new` cannot fire.
    fn normalized(numerator: BigInt, denominator: BigInt) -> Self {
        Self::new(numerator, denominator).expect("live operands carry nonzero denominators")
    }
    /// Borrow the numerator
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }
    /// Borrow the denominator
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Calculates division, but fails with `RationalError::DivisionByZero`
    /// if `other` is a zero-valued rational
    pub fn checked_div(&self, other: &Self) -> Result<Self, RationalError> {
        if other.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalized(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator
        ))
    }

    /// Return this value with a positive sign, no matter if it's negative
    /// or already positive.
    /// abs of 1/2 is 1/2.
    /// abs of -1/2 is 1/2.
    pub fn abs(&self) -> Self {
        // Zero is neither positive nor negative and takes the negation
        // branch, where -0/1 normalizes straight back to 0/1.
        if self.numerator.is_positive() {
            self.clone()
        } else {
            -self
        }
    }
    /// Raise this value to an integer power.
    ///
    /// A negative exponent raises both components to the exponent's
    /// absolute value and only then swaps their roles; normalization moves
    /// the sign back onto the numerator afterwards.
    ///
    /// ## Panics
    /// Panics if the value is zero and the exponent is negative
    pub fn pow(&self, exponent: i32) -> Self {
        if exponent == 0 {
            return Self::one();
        }
        let unsigned = exponent.unsigned_abs();
        if exponent < 0 {
            Self::new(
                Pow::pow(&self.denominator, unsigned),
                Pow::pow(&self.numerator, unsigned)
            ).expect("zero cannot be raised to a negative exponent")
        } else {
            Self::normalized(
                Pow::pow(&self.numerator, unsigned),
                Pow::pow(&self.denominator, unsigned)
            )
        }
    }

    /// Returns the smaller of `self` and `other`. If they are equal,
    /// `self` is returned.
    pub fn min(self, other: Self) -> Self {
        if self <= other { self } else { other }
    }
    /// Returns the greater of `self` and `other`. If they are equal,
    /// `self` is returned.
    pub fn max(self, other: Self) -> Self {
        if self >= other { self } else { other }
    }

    /// Returns true if this rational is a whole number, i.e. its canonical
    /// denominator is 1
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }
    /// The whole-number part of this rational: numerator divided by
    /// denominator, truncated toward zero
    pub fn to_integer(&self) -> BigInt {
        &self.numerator / &self.denominator
    }
}

macro_rules! consts {
    ($($(#[$attr:meta])* $name:ident = $n:expr, $d:expr;)*) => {
        impl Rational {
            $(
                $(#[$attr])*
                pub fn $name() -> Self {
                    Self {
                        numerator: BigInt::from($n),
                        denominator: BigInt::from($d)
                    }
                }
            )*
        }
    }
}
consts! {
    /// A rational representing "2".
    two = 2, 1;
    /// A rational representing "-1".
    minus_one = -1, 1;
    /// A rational representing "1/2".
    one_half = 1, 2;
    /// A rational representing "1/3".
    one_third = 1, 3;
    /// A rational representing "2/3".
    two_thirds = 2, 3;
    /// A rational representing "1/4".
    one_quarter = 1, 4;
    /// A rational representing "3/4".
    three_quarters = 3, 4;
    /// A rational representing "1/5".
    one_fifth = 1, 5;
    /// A rational representing "2/5".
    two_fifths = 2, 5;
    /// A rational representing "3/5".
    three_fifths = 3, 5;
    /// A rational representing "4/5".
    four_fifths = 4, 5;
    /// A rational representing "1/10".
    one_tenth = 1, 10;
    /// A rational representing "10".
    ten = 10, 1;
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one()
        }
    }
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}
impl One for Rational {
    fn one() -> Self {
        Self {
            numerator: BigInt::one(),
            denominator: BigInt::one()
        }
    }
    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;
    fn add(self, other: &Rational) -> Rational {
        Rational::normalized(
            &self.numerator * &other.denominator + &self.denominator * &other.numerator,
            &self.denominator * &other.denominator
        )
    }
}
impl Sub<&Rational> for &Rational {
    type Output = Rational;
    fn sub(self, other: &Rational) -> Rational {
        Rational::normalized(
            &self.numerator * &other.denominator - &self.denominator * &other.numerator,
            &self.denominator * &other.denominator
        )
    }
}
impl Mul<&Rational> for &Rational {
    type Output = Rational;
    fn mul(self, other: &Rational) -> Rational {
        Rational::normalized(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator
        )
    }
}
impl Div<&Rational> for &Rational {
    type Output = Rational;
    fn div(self, other: &Rational) -> Rational {
        self.checked_div(other).expect("division by a zero-valued rational")
    }
}
impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational::normalized(-&self.numerator, self.denominator.clone())
    }
}
impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational::normalized(-self.numerator, self.denominator)
    }
}

macro_rules! forward_binop {
    ($($trait:ident $fn:ident),*) => {
        $(
            impl $trait for Rational {
                type Output = Rational;
                fn $fn(self, other: Rational) -> Rational {
                    $trait::$fn(&self, &other)
                }
            }
            impl $trait<&Rational> for Rational {
                type Output = Rational;
                fn $fn(self, other: &Rational) -> Rational {
                    $trait::$fn(&self, other)
                }
            }
            impl $trait<Rational> for &Rational {
                type Output = Rational;
                fn $fn(self, other: Rational) -> Rational {
                    $trait::$fn(self, &other)
                }
            }
        )*
    }
}
forward_binop! {
    Add add,
    Sub sub,
    Mul mul,
    Div div
}

macro_rules! impl_from {
    ($($int:ty),*) => {
        $(impl From<$int> for Rational {
            fn from(i: $int) -> Self {
                Self {
                    numerator: BigInt::from(i),
                    denominator: BigInt::one()
                }
            }
        })*
    }
}
impl_from!(u8, u16, u32, u64, i8, i16, i32, i64, BigInt);

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are canonically positive, so cross
        // multiplication preserves the order without any sign analysis
        (&self.numerator * &other.denominator).cmp(&(&self.denominator * &other.numerator))
    }
}
impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        if self.is_integer() {
            // Already whole, no point dividing by 1.0
            self.numerator.to_f64()
        } else {
            Some(self.numerator.to_f64()? / self.denominator.to_f64()?)
        }
    }
    fn to_f32(&self) -> Option<f32> {
        self.to_f64().map(|value| value as f32)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.numerator.is_zero() {
            return write!(f, "0");
        }
        write!(f, "{}", self.numerator)?;
        if !self.denominator.is_one() {
            write!(f, "/{}", self.denominator)?;
        }
        Ok(())
    }
}
impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
