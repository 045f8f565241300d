// Bitwise operators on Bitfields
//
// `evaluate` and `evaluate_not` are pure. The methods on Bitfield compute the
// same result and then write a trace block to a sink.

use super::bitfield::Bitfield;
use crate::bitwise::{format::invert_bits, BitsError, Result};
use crate::trace::{binary_block, default_sink, unary_block, TraceSink};
use num::BigInt;

/// Symbol used for NOT in traces
pub const NOT_SYMBOL: &str = "~";

/// Operators taking a right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Xor,
    ShiftLeft,
    ShiftRight,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Xor => "^",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
        }
    }
}

/// Right-hand side of an operator: another Bitfield for AND/OR/XOR, a bit count for shifts
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Bitfield(&'a Bitfield),
    Amount(usize),
}

impl<'a> From<&'a Bitfield> for Operand<'a> {
    fn from(value: &'a Bitfield) -> Self {
        Operand::Bitfield(value)
    }
}

impl From<usize> for Operand<'_> {
    fn from(value: usize) -> Self {
        Operand::Amount(value)
    }
}

/// Both operands must have the same width; returns it
pub fn check_width(left: &Bitfield, right: &Bitfield) -> Result<usize> {
    if left.width() != right.width() {
        return Err(BitsError::WidthMismatch {
            left: left.width(),
            right: right.width(),
        });
    }
    Ok(left.width())
}

fn shift_left(operand: &Bitfield, amount: usize) -> Bitfield {
    let width = operand.width();
    // everything shifts out; skip building a huge intermediate
    if amount >= width {
        return Bitfield::wrapping(BigInt::from(0), width, true);
    }
    Bitfield::wrapping(operand.value() << amount, width, true)
}

/// Compute `lhs <op> rhs` without tracing.
///
/// AND, OR and XOR need a Bitfield of the same width and store their result as
/// an unsigned pattern in `[0, 2^width)`. Shifts need an amount; left shifts
/// wrap into the width, right shifts are arithmetic.
pub fn evaluate(op: Operator, lhs: &Bitfield, rhs: Operand<'_>) -> Result<Bitfield> {
    match (op, rhs) {
        (Operator::And, Operand::Bitfield(rhs)) => {
            let width = check_width(lhs, rhs)?;
            Ok(Bitfield::from_pattern(lhs.value() & rhs.value(), width))
        }
        (Operator::Or, Operand::Bitfield(rhs)) => {
            let width = check_width(lhs, rhs)?;
            Ok(Bitfield::from_pattern(lhs.value() | rhs.value(), width))
        }
        (Operator::Xor, Operand::Bitfield(rhs)) => {
            let width = check_width(lhs, rhs)?;
            Ok(Bitfield::from_pattern(lhs.value() ^ rhs.value(), width))
        }
        (Operator::ShiftLeft, Operand::Amount(amount)) => Ok(shift_left(lhs, amount)),
        (Operator::ShiftRight, Operand::Amount(amount)) => Ok(Bitfield::wrapping(
            lhs.value() >> amount,
            lhs.width(),
            false,
        )),
        (op, Operand::Bitfield(_)) => Err(BitsError::Type(format!(
            "Bitfield is not a valid right operand for {}",
            op.symbol()
        ))),
        (op, Operand::Amount(_)) => Err(BitsError::Type(format!(
            "operand of {} is not a Bitfield instance",
            op.symbol()
        ))),
    }
}

/// Flip every digit of the raw rendering and read it back at the same width
pub fn evaluate_not(operand: &Bitfield) -> Result<Bitfield> {
    let flipped = invert_bits(&operand.to_raw_string());
    Bitfield::from_binary_str(&format!("0b{}", flipped), operand.width(), false)
}

impl Bitfield {
    /// Apply `op` and trace to the default sink
    pub fn apply<'a>(&self, op: Operator, rhs: impl Into<Operand<'a>>) -> Result<Bitfield> {
        self.apply_to(op, rhs, &*default_sink())
    }

    /// Apply `op` and trace to `sink`. Nothing is traced if the operation fails.
    pub fn apply_to<'a>(
        &self,
        op: Operator,
        rhs: impl Into<Operand<'a>>,
        sink: &dyn TraceSink,
    ) -> Result<Bitfield> {
        let rhs = rhs.into();
        let result = evaluate(op, self, rhs)?;

        let block = match rhs {
            Operand::Bitfield(right) => binary_block(
                &self.to_string(),
                &right.to_string(),
                op.symbol(),
                &result.to_string(),
            ),
            Operand::Amount(_) => unary_block(&self.to_string(), op.symbol(), &result.to_string()),
        };
        sink.emit(&block);

        Ok(result)
    }

    pub fn bit_and(&self, rhs: &Bitfield) -> Result<Bitfield> {
        self.apply(Operator::And, rhs)
    }

    pub fn bit_and_to(&self, rhs: &Bitfield, sink: &dyn TraceSink) -> Result<Bitfield> {
        self.apply_to(Operator::And, rhs, sink)
    }

    pub fn bit_or(&self, rhs: &Bitfield) -> Result<Bitfield> {
        self.apply(Operator::Or, rhs)
    }

    pub fn bit_or_to(&self, rhs: &Bitfield, sink: &dyn TraceSink) -> Result<Bitfield> {
        self.apply_to(Operator::Or, rhs, sink)
    }

    pub fn bit_xor(&self, rhs: &Bitfield) -> Result<Bitfield> {
        self.apply(Operator::Xor, rhs)
    }

    pub fn bit_xor_to(&self, rhs: &Bitfield, sink: &dyn TraceSink) -> Result<Bitfield> {
        self.apply_to(Operator::Xor, rhs, sink)
    }

    /// Shift left, dropping bits that leave the width
    pub fn shift_left(&self, amount: usize) -> Result<Bitfield> {
        self.apply(Operator::ShiftLeft, amount)
    }

    pub fn shift_left_to(&self, amount: usize, sink: &dyn TraceSink) -> Result<Bitfield> {
        self.apply_to(Operator::ShiftLeft, amount, sink)
    }

    /// Arithmetic shift right
    pub fn shift_right(&self, amount: usize) -> Result<Bitfield> {
        self.apply(Operator::ShiftRight, amount)
    }

    pub fn shift_right_to(&self, amount: usize, sink: &dyn TraceSink) -> Result<Bitfield> {
        self.apply_to(Operator::ShiftRight, amount, sink)
    }

    pub fn bit_not(&self) -> Result<Bitfield> {
        self.bit_not_to(&*default_sink())
    }

    pub fn bit_not_to(&self, sink: &dyn TraceSink) -> Result<Bitfield> {
        let result = evaluate_not(self)?;
        sink.emit(&unary_block(
            &self.to_string(),
            NOT_SYMBOL,
            &result.to_string(),
        ));
        Ok(result)
    }
}

impl std::ops::BitAnd for &Bitfield {
    type Output = Result<Bitfield>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.bit_and(rhs)
    }
}

impl std::ops::BitOr for &Bitfield {
    type Output = Result<Bitfield>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.bit_or(rhs)
    }
}

impl std::ops::BitXor for &Bitfield {
    type Output = Result<Bitfield>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.bit_xor(rhs)
    }
}

impl std::ops::Shl<usize> for &Bitfield {
    type Output = Result<Bitfield>;

    fn shl(self, rhs: usize) -> Self::Output {
        self.shift_left(rhs)
    }
}

impl std::ops::Shr<usize> for &Bitfield {
    type Output = Result<Bitfield>;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shift_right(rhs)
    }
}

impl std::ops::Not for &Bitfield {
    type Output = Result<Bitfield>;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}
