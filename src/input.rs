use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::HeapsortError;
use crate::sequence::Sequence;

/// Whitespace-separated tokens pulled from `reader` one line at a time.
pub struct Scanner<R> {
    reader: R,
    // Remaining tokens of the current line, last token first.
    pending: Vec<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, HeapsortError> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(str::to_owned).collect();
        }
    }
}

fn read_count<R: BufRead>(scanner: &mut Scanner<R>) -> Result<usize, HeapsortError> {
    let token = scanner
        .next_token()?
        .ok_or_else(|| HeapsortError::InvalidCount("no count given".to_string()))?;
    let not_positive = || HeapsortError::InvalidCount(format!("{token} is not positive"));
    match token.parse::<i64>() {
        // Anything past usize is over capacity anyway.
        Ok(count) if count > 0 => Ok(usize::try_from(count).unwrap_or(usize::MAX)),
        Ok(_) => Err(not_positive()),
        // Too many digits for i64: still a count, saturated by sign.
        Err(_) if is_integer_literal(&token) && !token.starts_with('-') => Ok(usize::MAX),
        Err(_) if is_integer_literal(&token) => Err(not_positive()),
        Err(_) => Err(HeapsortError::InvalidCount(format!("{token:?} is not a number"))),
    }
}

fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Prompts on `prompt` and reads a count followed by that many integers.
///
/// The count is checked against `config.capacity` before any value is read.
/// Tokens after the last expected value are left unread.
pub fn read_sequence<R, W>(reader: R, prompt: &mut W, config: &Config) -> Result<Sequence, HeapsortError>
where
    R: BufRead,
    W: Write,
{
    let mut scanner = Scanner::new(reader);

    write!(prompt, "Enter the number of elements: ")?;
    prompt.flush()?;
    let count = read_count(&mut scanner)?;
    let mut seq = Sequence::with_capacity(config.capacity);
    if count > seq.capacity() {
        return Err(HeapsortError::CapacityExceeded {
            requested: count,
            capacity: seq.capacity(),
        });
    }

    write!(prompt, "Enter {count} integers: ")?;
    prompt.flush()?;
    for position in 1..=count {
        let token = scanner.next_token()?.ok_or(HeapsortError::MissingValues {
            expected: count,
            found: position - 1,
        })?;
        let value = token
            .parse::<i32>()
            .map_err(|_| HeapsortError::MalformedInput { position, token })?;
        seq.push(value)?;
    }
    Ok(seq)
}
