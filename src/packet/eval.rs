// Packet tree evaluation

use super::error::{PacketError, Result};
use super::types::{Operator, Packet};

/// Reduce a packet tree to a single integer.
///
/// Evaluation is pure: the same tree always produces the same value.
/// Overflow and operators given too few operands are errors, never wrapped
/// or defaulted.
pub fn evaluate(packet: &Packet) -> Result<u64> {
    match packet {
        Packet::Literal { value, .. } => Ok(*value),
        Packet::Operator { op, children, .. } => {
            let values = children.iter().map(evaluate).collect::<Result<Vec<_>>>()?;
            apply(*op, &values)
        }
    }
}

fn apply(op: Operator, values: &[u64]) -> Result<u64> {
    match op {
        Operator::Sum => values.iter().try_fold(0u64, |acc, &v| {
            acc.checked_add(v).ok_or(PacketError::ArithmeticOverflow(op))
        }),
        Operator::Product => {
            let (first, rest) = split_operands(op, values)?;
            rest.iter().try_fold(first, |acc, &v| {
                acc.checked_mul(v).ok_or(PacketError::ArithmeticOverflow(op))
            })
        }
        Operator::Minimum => values
            .iter()
            .copied()
            .min()
            .ok_or(PacketError::MissingOperands(op)),
        Operator::Maximum => values
            .iter()
            .copied()
            .max()
            .ok_or(PacketError::MissingOperands(op)),
        Operator::GreaterThan => {
            let (first, rest) = split_operands(op, values)?;
            let max = rest
                .iter()
                .copied()
                .max()
                .ok_or(PacketError::MissingOperands(op))?;
            Ok((first > max) as u64)
        }
        Operator::LessThan => {
            let (first, rest) = split_operands(op, values)?;
            let min = rest
                .iter()
                .copied()
                .min()
                .ok_or(PacketError::MissingOperands(op))?;
            Ok((first < min) as u64)
        }
        Operator::EqualTo => {
            let (first, rest) = split_operands(op, values)?;
            Ok(rest.iter().all(|&v| v == first) as u64)
        }
    }
}

fn split_operands(op: Operator, values: &[u64]) -> Result<(u64, &[u64])> {
    match values.split_first() {
        Some((&first, rest)) => Ok((first, rest)),
        None => Err(PacketError::MissingOperands(op)),
    }
}

impl Packet {
    /// Evaluate this packet and its subtree
    pub fn evaluate(&self) -> Result<u64> {
        evaluate(self)
    }
}
