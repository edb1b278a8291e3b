use std::fmt;
use std::io::{self, Write};

use log::debug;

use crate::predicate::is_greater;

/// Left operand handed to the predicate.
pub const LHS: i32 = 100;
/// Right operand handed to the predicate.
pub const RHS: i32 = 200;
/// The literal printed on the second line and boxed for the third.
pub const LITERAL: i32 = 100;

/// A heap-boxed integer that prints as its canonical decimal form.
///
/// Stands in for the boxed integer the original demo constructs before
/// printing its string representation.
pub struct BoxedInt(Box<i32>);

impl BoxedInt {
    pub fn new(value: i32) -> Self {
        BoxedInt(Box::new(value))
    }

    pub fn value(&self) -> i32 {
        *self.0
    }
}

impl fmt::Display for BoxedInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Write the demo transcript: the predicate result for the fixed operands,
/// the integer literal, then the boxed integer's decimal string. Exactly
/// three lines, each terminated with a newline, nothing else.
pub fn write_transcript<W: Write>(w: &mut W) -> io::Result<()> {
    let result = is_greater(LHS, RHS);
    debug!("is_greater({}, {}) = {}", LHS, RHS, result);

    writeln!(w, "{}", result)?;
    writeln!(w, "{}", LITERAL)?;

    let boxed = BoxedInt::new(LITERAL);
    writeln!(w, "{}", boxed)?;

    Ok(())
}

/// Render the transcript into an owned string.
pub fn render_transcript() -> String {
    let mut buf = Vec::new();
    // writes to a Vec cannot fail
    write_transcript(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
