mod rational;

pub use self::rational::*;

pub use num_bigint::BigInt;
