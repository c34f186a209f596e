use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// ## Word arithmetic behind the operator symbols
///
/// Arithmetic wraps. Comparisons yield 1 or 0. Shift counts are
/// taken modulo the word width.

pub struct Operation {}

impl Operation {
    pub fn apply(op: Operator, lhs: i64, rhs: i64) -> Result<i64> {
        use Operator::*;
        Ok(match op {
            Multiply => lhs.wrapping_mul(rhs),
            Divide => Operation::divide(lhs, rhs)?,
            Plus => lhs.wrapping_add(rhs),
            Minus => lhs.wrapping_sub(rhs),
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            ShiftRight => lhs.wrapping_shr(rhs as u32),
            ShiftLeft => lhs.wrapping_shl(rhs as u32),
            Equal => (lhs == rhs) as i64,
            NotEqual => (lhs != rhs) as i64,
            Less => (lhs < rhs) as i64,
            LessEqual => (lhs <= rhs) as i64,
            Greater => (lhs > rhs) as i64,
            GreaterEqual => (lhs >= rhs) as i64,
        })
    }

    fn divide(lhs: i64, rhs: i64) -> Result<i64> {
        if rhs == 0 {
            Err(error!(DivisionByZero))
        } else {
            Ok(lhs.wrapping_div(rhs))
        }
    }
}
