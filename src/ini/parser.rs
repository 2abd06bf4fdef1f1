//! INI parser
//!
//! A single left-to-right pass over the input, one character at a time,
//! driven by an explicit state machine. The parser is deliberately forgiving:
//! it never fails, malformed fragments are discarded, and parsing resumes at
//! the next line. Any input therefore yields a valid, possibly empty,
//! [`Document`].
//!
//! States:
//!
//! 1. `Idle` - between statements; whitespace is skipped, `;` opens a
//!    comment, `[` opens a section header, anything else starts a key.
//! 2. `Comment` - accumulate until newline, then record against the current
//!    section (or the document, when no section is open).
//! 3. `SectionName` - accumulate until `]` commits the name; a newline first
//!    discards the header without changing the current section.
//! 4. `Key` - accumulate the key token; `=` or a space/tab ends it, a
//!    newline discards the line.
//! 5. `KeyEnd` - skip padding between key and `=`; any other character means
//!    the line has no single `=` separator and is invalid.
//! 6. `ReadyForValue` - skip padding after `=`; an opening quote is consumed
//!    without being stored.
//! 7. `Value` - accumulate until newline, then trim trailing whitespace and
//!    commit the pair into the current scope. End of input commits the same
//!    way, so a final line without a newline is not lost.
//! 8. `InvalidKey` - absorb the rest of an invalid line.
//!
//! Scope note: a committed section header makes that section current until
//! the next header. The empty header `[]` returns scope to the document
//! itself, matching the reference behavior of "no section open".
//!
//! Quote handling is intentionally lossy: every `"` and `'` seen while
//! reading a value is dropped, not just one delimiter pair. `say "hi"`
//! parses as `say hi`. Changing this would be a format-compatibility break.

use crate::ini::document::Document;

/// Parser states, mutually exclusive, one active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Comment,
    SectionName,
    Key,
    KeyEnd,
    ReadyForValue,
    Value,
    InvalidKey,
}

/// One parse in flight: the active state, the growable accumulation buffers,
/// and the document being built.
///
/// Buffers are owned by the parser instance, so parses are independent and
/// reentrant; nothing is shared or static.
struct Parser {
    state: State,
    buffer: String,
    pending_key: String,
    // Name of the open section; empty means global scope.
    current_section: String,
    document: Document,
}

impl Parser {
    fn new() -> Self {
        Parser {
            state: State::Idle,
            buffer: String::new(),
            pending_key: String::new(),
            current_section: String::new(),
            document: Document::new(),
        }
    }

    /// Appends a character to the accumulation buffer.
    ///
    /// Control characters are dropped (tab excepted, since interior
    /// whitespace in values and comments must survive). This also makes
    /// CRLF input parse as if it were LF.
    fn push(&mut self, c: char) {
        if c == '\t' || !c.is_control() {
            self.buffer.push(c);
        }
    }

    fn trim_buffer_end(&mut self) {
        let trimmed = self.buffer.trim_end_matches([' ', '\t']).len();
        self.buffer.truncate(trimmed);
    }

    /// Records the accumulated comment against the current scope.
    fn commit_comment(&mut self) {
        let comment = self.buffer.trim_matches([' ', '\t']).to_string();
        self.buffer.clear();
        if self.current_section.is_empty() {
            self.document.add_comment(comment);
        } else {
            self.document
                .get_or_create_section(&self.current_section)
                .add_comment(comment);
        }
    }

    /// Enters or reopens the section named by the buffer.
    fn commit_section_header(&mut self) {
        self.current_section = std::mem::take(&mut self.buffer);
        if !self.current_section.is_empty() {
            self.document.get_or_create_section(&self.current_section);
        }
    }

    /// Commits the pending key with the accumulated value, last write wins.
    fn commit_property(&mut self) {
        self.trim_buffer_end();
        let key = std::mem::take(&mut self.pending_key);
        let value = std::mem::take(&mut self.buffer);
        if self.current_section.is_empty() {
            self.document.set_property(key, value);
        } else {
            self.document
                .get_or_create_section(&self.current_section)
                .set_property(key, value);
        }
    }

    fn discard_line(&mut self) {
        self.buffer.clear();
        self.pending_key.clear();
        self.state = State::Idle;
    }

    fn step(&mut self, c: char) {
        match self.state {
            State::Idle => match c {
                ';' => self.state = State::Comment,
                '[' => self.state = State::SectionName,
                ' ' | '\t' | '\n' => {}
                // A statement cannot start with a separator.
                '=' | ']' => self.state = State::InvalidKey,
                _ => {
                    // A dropped control character must not start a key
                    // token; Key would otherwise run with an empty buffer
                    // and a later `=` could commit an empty key.
                    self.push(c);
                    if !self.buffer.is_empty() {
                        self.state = State::Key;
                    }
                }
            },
            State::Comment => match c {
                '\n' => {
                    self.commit_comment();
                    self.state = State::Idle;
                }
                _ => self.push(c),
            },
            State::SectionName => match c {
                ']' => {
                    self.commit_section_header();
                    self.state = State::Idle;
                }
                '\n' => self.discard_line(),
                _ => self.push(c),
            },
            State::Key => match c {
                '=' => {
                    self.pending_key = std::mem::take(&mut self.buffer);
                    self.state = State::ReadyForValue;
                }
                ' ' | '\t' => {
                    self.pending_key = std::mem::take(&mut self.buffer);
                    self.state = State::KeyEnd;
                }
                '\n' => self.discard_line(),
                // Structural delimiters never belong to a key.
                ';' | '[' | ']' => {
                    self.buffer.clear();
                    self.state = State::InvalidKey;
                }
                _ => self.push(c),
            },
            State::KeyEnd => match c {
                '=' => self.state = State::ReadyForValue,
                ' ' | '\t' => {}
                '\n' => self.discard_line(),
                _ => {
                    self.pending_key.clear();
                    self.state = State::InvalidKey;
                }
            },
            State::ReadyForValue => match c {
                '\n' => self.discard_line(),
                ' ' | '\t' => {}
                // Opening quote is consumed, not stored.
                '"' | '\'' => self.state = State::Value,
                _ => {
                    self.push(c);
                    self.state = State::Value;
                }
            },
            State::Value => match c {
                '\n' => {
                    self.commit_property();
                    self.state = State::Idle;
                }
                '"' | '\'' => {}
                _ => self.push(c),
            },
            State::InvalidKey => {
                if c == '\n' {
                    self.state = State::Idle;
                }
            }
        }
    }

    /// Flushes at end of input: a pending value commits exactly as a newline
    /// would; any other partial fragment is discarded.
    fn finish(mut self) -> Document {
        if self.state == State::Value {
            self.commit_property();
        }
        self.document
    }
}

/// Parses INI text into a [`Document`].
///
/// Never fails: invalid fragments are skipped silently, and garbage input
/// yields an empty document rather than an error. Validating that an
/// expected structure is present is the caller's responsibility.
pub fn parse_text(text: &str) -> Document {
    let mut parser = Parser::new();
    for c in text.chars() {
        parser.step(c);
    }
    parser.finish()
}
