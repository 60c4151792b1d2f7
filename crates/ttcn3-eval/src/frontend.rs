//! Language frontend: source text in, syntax tree out
//!
//! ```text
//! Source Code → [Frontend] → syntax tree → [Evaluator] → Value
//! ```
//!
//! The frontend owns everything that needs the original source text:
//! parsing, attaching line/column locations to parse errors and rendering
//! diagnostics. The evaluator only ever sees the tree.

use std::fmt;

use crate::span::LineTable;
use crate::syntax::{self, Program};
use crate::{eval_program, Environment, EvalContext, Value};

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// A lexing or parsing failure.
///
/// The parser only knows byte offsets. [`Ttcn3Frontend::parse`] resolves
/// the offset against the source and fills in `location` and `snippet`;
/// [`crate::syntax::parse`] leaves both empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What was expected and what was found instead
    pub message: String,

    /// Byte offset of the offending token, or the source length at end of input
    pub offset: Option<usize>,

    /// Resolved file, line and column of `offset`
    pub location: Option<SourceLocation>,

    /// The full source line containing `offset`
    pub snippet: Option<String>,
}

impl ParseError {
    /// An error with a message and nothing else.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
            location: None,
            snippet: None,
        }
    }

    /// Set the byte offset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the resolved location.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the offending source line.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        match (&self.location, self.offset) {
            (Some(loc), _) => write!(f, " at {}", loc)?,
            (None, Some(offset)) => write!(f, " at byte {}", offset)?,
            (None, None) => {}
        }
        match &self.snippet {
            Some(snippet) => write!(f, "\n{}", snippet),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ParseError {}

/// Where a parse error was found: `file:line:column`, both 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File name, or `<stdin>`
    pub file: String,
    /// Line, counted from 1
    pub line: usize,
    /// Column in bytes, counted from 1
    pub column: usize,
}

impl SourceLocation {
    /// Build a location from its parts.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// LANGUAGE FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Boundary between source handling and the evaluator core.
pub trait LanguageFrontend: Send + Sync {
    /// Parse source code into a program.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the source cannot be parsed.
    fn parse(&self, source: &str) -> Result<Program, ParseError>;

    /// Render a parse error for display, quoting the offending line.
    fn format_error(&self, error: &ParseError, source: &str) -> String;

    /// Render a value in the language's literal syntax.
    fn format_value(&self, value: &Value) -> String;

    /// Return the name of this language frontend.
    fn name(&self) -> &str;

    /// Return the file extension for this language.
    fn file_extension(&self) -> &str;
}

// ═══════════════════════════════════════════════════════════════════════
// TTCN-3 FRONTEND
// ═══════════════════════════════════════════════════════════════════════

/// Frontend for the TTCN-3 expression and statement subset.
///
/// # Example
///
/// ```
/// use ttcn3_eval::frontend::{LanguageFrontend, Ttcn3Frontend};
///
/// let frontend = Ttcn3Frontend::new();
/// let err = frontend.parse("1 +\n(2").unwrap_err();
/// let location = err.location.unwrap();
/// assert_eq!((location.line, location.column), (2, 3));
/// ```
#[derive(Debug, Clone)]
pub struct Ttcn3Frontend {
    file: String,
}

impl Default for Ttcn3Frontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Ttcn3Frontend {
    /// Create a frontend reading from standard input.
    pub fn new() -> Self {
        Self::with_file("<stdin>")
    }

    /// Create a frontend that names `file` in locations.
    pub fn with_file(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }

    /// Attach a location and the offending source line to `error`.
    fn locate(&self, error: ParseError, source: &str) -> ParseError {
        let table = LineTable::new(source);
        let Some((offset, pos)) = error
            .offset
            .and_then(|offset| table.position(offset).map(|pos| (offset, pos)))
        else {
            return error;
        };
        // Past the last newline no byte lies on the line; step back by column
        let start = table
            .line_start(pos.line)
            .unwrap_or(offset - (pos.column - 1));
        let line = source[start..].lines().next().unwrap_or("");
        error
            .with_location(SourceLocation::new(&self.file, pos.line, pos.column))
            .with_snippet(line)
    }
}

impl LanguageFrontend for Ttcn3Frontend {
    fn parse(&self, source: &str) -> Result<Program, ParseError> {
        syntax::parse(source).map_err(|e| self.locate(e, source))
    }

    fn format_error(&self, error: &ParseError, _source: &str) -> String {
        let mut out = format!("error: {}", error.message);
        if let Some(loc) = &error.location {
            out.push_str(&format!("\n --> {}", loc));
            if let Some(snippet) = &error.snippet {
                out.push_str(&format!(
                    "\n  | {}\n  | {}^",
                    snippet,
                    " ".repeat(loc.column.saturating_sub(1))
                ));
            }
        }
        out
    }

    fn format_value(&self, value: &Value) -> String {
        value.to_string()
    }

    fn name(&self) -> &str {
        "TTCN-3"
    }

    fn file_extension(&self) -> &str {
        "ttcn3"
    }
}

/// Parse and evaluate `source` in a fresh top-level environment.
///
/// # Errors
///
/// Only parsing fails here; runtime failures come back as
/// [`Value::Error`].
///
/// ```
/// use ttcn3_eval::{eval_source, Value};
///
/// assert_eq!(eval_source("(1+2)*3").unwrap(), Value::integer(9));
/// ```
pub fn eval_source(source: &str) -> Result<Value, ParseError> {
    let program = Ttcn3Frontend::new().parse(source)?;
    let mut env = Environment::new();
    Ok(eval_program(&program, &mut env, &EvalContext::default()))
}
