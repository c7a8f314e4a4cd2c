//! Reading process sets from text.
//!
//! The accepted format is the one the interactive prompt collects: a process
//! count `n`, followed by `n` triples of `burst arrival priority`. Tokens
//! are separated by arbitrary whitespace, including newlines. IDs are
//! assigned 1..=n in input order.
//!
//! ```
//! use u_cpusched::input::parse_process_set;
//!
//! let set = parse_process_set("2\n5 0 2\n3 2 1\n").unwrap();
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.processes()[1].arrival_time, 2);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::models::{ProcessDescriptor, ProcessId, ProcessSet, Ticks};

/// An input error.
#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    /// Error category.
    pub kind: InputErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputErrorKind {
    /// The input ended before the process count.
    MissingCount,
    /// A token was not a valid integer for its field.
    InvalidInteger,
    /// The input ended before all declared processes were read.
    Truncated,
    /// Tokens remained after the declared processes.
    TrailingData,
    /// The underlying reader failed.
    Io,
}

impl InputError {
    fn new(kind: InputErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::new(InputErrorKind::Io, format!("Failed to read input: {e}"))
    }
}

/// A value the reader is about to request.
///
/// Its `Display` form is the interactive prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Number of processes.
    Count,
    /// Burst time of a process.
    Burst(ProcessId),
    /// Arrival time of a process.
    Arrival(ProcessId),
    /// Priority of a process.
    Priority(ProcessId),
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::Count => write!(f, "Enter the number of processes: "),
            Prompt::Burst(id) => write!(f, "\nEnter details for process {id}:\nBurst time: "),
            Prompt::Arrival(_) => write!(f, "Arrival time: "),
            Prompt::Priority(_) => write!(f, "Priority (lower number means higher priority): "),
        }
    }
}

/// Whitespace tokenizer over a line-oriented reader.
///
/// Reads lazily, one line at a time, so prompts can be interleaved with
/// interactive input.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Next whitespace-separated token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }

    /// Parses the next token as `T`; `what` names the field in errors.
    ///
    /// End of input is reported as [`InputErrorKind::Truncated`].
    pub fn next_value<T: FromStr>(&mut self, what: &str) -> Result<T, InputError> {
        let token = self.next_token()?.ok_or_else(|| {
            InputError::new(
                InputErrorKind::Truncated,
                format!("Unexpected end of input while reading {what}"),
            )
        })?;
        token.parse().map_err(|_| {
            InputError::new(
                InputErrorKind::InvalidInteger,
                format!("Invalid {what}: expected an integer, got '{token}'"),
            )
        })
    }

    /// Whether any token remains.
    pub fn is_exhausted(&mut self) -> Result<bool, InputError> {
        match self.next_token()? {
            Some(token) => {
                self.pending.push_front(token);
                Ok(false)
            }
            None => Ok(true),
        }
    }
}

/// Reads a process set, calling `prompt` before each value is requested.
///
/// Stops after the declared number of processes; anything after is left
/// unread.
pub fn read_process_set_with<R, F>(reader: R, mut prompt: F) -> Result<ProcessSet, InputError>
where
    R: BufRead,
    F: FnMut(Prompt),
{
    let mut tokens = TokenReader::new(reader);
    read_from_tokens(&mut tokens, &mut prompt)
}

/// Reads a process set from a complete input source.
///
/// Rejects trailing tokens after the declared processes.
pub fn read_process_set<R: BufRead>(reader: R) -> Result<ProcessSet, InputError> {
    let mut tokens = TokenReader::new(reader);
    let set = read_from_tokens(&mut tokens, &mut |_| {})?;
    if !tokens.is_exhausted()? {
        return Err(InputError::new(
            InputErrorKind::TrailingData,
            format!("Unexpected data after {} declared processes", set.len()),
        ));
    }
    Ok(set)
}

/// Parses a process set from a string.
pub fn parse_process_set(text: &str) -> Result<ProcessSet, InputError> {
    read_process_set(text.as_bytes())
}

fn read_from_tokens<R, F>(tokens: &mut TokenReader<R>, prompt: &mut F) -> Result<ProcessSet, InputError>
where
    R: BufRead,
    F: FnMut(Prompt),
{
    prompt(Prompt::Count);
    let count: usize = match tokens.next_value("process count") {
        Err(e) if e.kind == InputErrorKind::Truncated => {
            return Err(InputError::new(
                InputErrorKind::MissingCount,
                "Input is empty: expected the number of processes",
            ));
        }
        other => other?,
    };

    let mut set = ProcessSet::new();
    for id in (1..).take(count) {
        prompt(Prompt::Burst(id));
        let burst: Ticks = tokens.next_value(&format!("burst time of process {id}"))?;
        prompt(Prompt::Arrival(id));
        let arrival: Ticks = tokens.next_value(&format!("arrival time of process {id}"))?;
        prompt(Prompt::Priority(id));
        let priority: i32 = tokens.next_value(&format!("priority of process {id}"))?;

        set.push(
            ProcessDescriptor::new(id, burst)
                .with_arrival(arrival)
                .with_priority(priority),
        );
    }

    Ok(set)
}
