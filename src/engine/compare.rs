use crate::answer::Value;
use crate::flow::Operator;
use ahash::AHashSet;

/// Evaluates one condition against a looked-up answer.
///
/// A missing answer never satisfies a condition. The ordering operators are
/// defined for numbers only; any non-numeric operand makes the comparison
/// `false` rather than an error, so a half-edited flow can still be walked.
pub(crate) fn holds(answer: Option<&Value>, operator: Operator, expected: &Value) -> bool {
    let Some(answer) = answer else {
        return false;
    };
    match operator {
        Operator::Equal => values_equal(answer, expected),
        Operator::GreaterThan => numeric(answer, expected, |a, b| a > b),
        Operator::SmallerThan => numeric(answer, expected, |a, b| a < b),
        Operator::GreaterThanOrEqual => numeric(answer, expected, |a, b| a >= b),
        Operator::SmallerThanOrEqual => numeric(answer, expected, |a, b| a <= b),
    }
}

fn numeric<F>(answer: &Value, expected: &Value, cmp: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    match (answer.as_number(), expected.as_number()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

/// Equality over the value union.
///
/// Two sets are equal regardless of selection order; a set against a scalar
/// label tests membership, which is what a condition like
/// `checkbox answer = "B"` reads as.
fn values_equal(answer: &Value, expected: &Value) -> bool {
    match (answer, expected) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Many(a), Value::Many(b)) => {
            let a: AHashSet<&str> = a.iter().map(String::as_str).collect();
            let b: AHashSet<&str> = b.iter().map(String::as_str).collect();
            a == b
        }
        (Value::Many(labels), Value::Text(label)) | (Value::Text(label), Value::Many(labels)) => {
            labels.iter().any(|l| l == label)
        }
        _ => false,
    }
}
