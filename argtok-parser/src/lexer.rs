//! A lexer for streaming classified tokens from an argument vector.

use crate::registry::{OptId, OptSpec, Registry};

/// Defines the possible errors that may occur while stepping a token stream.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No classification rule applies to the rest of the current argument.
    /// Carries the raw argument text. The stream stays valid and parks at
    /// the end of the offending argument, so stepping again continues from
    /// the next one.
    #[error("unparseable argument: {0}")]
    Unparseable(String),

    /// The option identifier was read while the current token is neither an
    /// option nor an option value.
    #[error("current token is not an option")]
    NotAnOption,
}

/// Style under which an option alias was matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptStyle {
    /// Single-character option, reachable with zero or one leading hyphen
    /// and combinable into a grouped run (e.g. `-abc`).
    Flag,

    /// Multi-character option matched as a prefix up to a delimiter or the
    /// end of the argument (e.g. `--verbose`, `--define=NAME`).
    Long,

    /// Bare word registered as a sub-command (e.g. `update`).
    Command,
}

/// Classification of the current token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// The program name, the first token of every stream.
    Command,

    /// A recognized option, with the style it was matched under.
    Opt(OptStyle),

    /// The inline value following an option, inheriting that option's style.
    OptValue(OptStyle),

    /// Text matching no registered alias.
    Generic,
}

impl TokenKind {
    /// Whether this token refers to a matched option descriptor, directly or
    /// as its value.
    pub fn has_opt(self) -> bool {
        matches!(self, TokenKind::Opt(_) | TokenKind::OptValue(_))
    }
}

/// One classified unit of input, detached from the stream that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Structural class and style.
    pub kind: TokenKind,

    /// Exact text span, without consumed hyphens or delimiters.
    pub text: &'a str,

    /// Identifier of the matched option, when `kind` carries one.
    pub id: Option<OptId>,
}

/// Streams classified tokens from an argument vector, one step at a time.
///
/// The first element of the vector is taken as the program invocation path;
/// its base name becomes the initial token, already current after
/// construction. Every call to [`advance`](Tokens::advance) then classifies
/// the next slice of input against the registry. A token may be shorter than
/// an argument: grouped flag runs yield one token per character, and
/// `--opt=val` yields an option token followed by a value token.
///
/// Values are never bound implicitly. After an option token, step once more
/// and check for [`TokenKind::OptValue`] to discover an inline value.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    registry: &'a Registry,
    args: Vec<&'a str>,
    cursor: usize,
    begin: usize,
    end: usize,
    kind: TokenKind,
    in_group: bool,
    matched: Option<usize>,
    done: bool,
}

impl<'a> Tokens<'a> {
    /// Create a stream over the given argument vector.
    ///
    /// `argv[0]` is kept only from the character after its last `/`. An
    /// empty vector yields a stream whose current token is an empty command
    /// name and whose first step reports exhaustion.
    pub fn new(registry: &'a Registry, argv: &'a [&'a str]) -> Self {
        let mut args = Vec::with_capacity(argv.len());
        if let Some((first, rest)) = argv.split_first() {
            args.push(basename(first));
            args.extend_from_slice(rest);
        }

        Tokens {
            registry,
            done: args.is_empty(),
            end: args.first().map_or(0, |arg| arg.len()),
            args,
            cursor: 0,
            begin: 0,
            kind: TokenKind::Command,
            in_group: false,
            matched: None,
        }
    }

    /// Advance to the next token.
    ///
    /// Returns `Ok(true)` with a new current token, or `Ok(false)` once the
    /// argument list is exhausted — the last token stays readable, and every
    /// further call keeps returning `Ok(false)`.
    pub fn advance(&mut self) -> Result<bool, Error> {
        if self.done {
            return Ok(false);
        }

        let arg = self.args[self.cursor];
        if self.end == arg.len() {
            return Ok(self.next_arg());
        }

        // Inside an argument. Either a grouped flag run, or the remainder is
        // the inline value of the flag or long option just produced.
        if self.in_group {
            self.begin = self.end;
            let c = next_char(arg, self.begin);
            self.end = self.begin + c.len_utf8();
            self.matched = self.registry.flag(c);
            return Ok(true);
        }

        match self.kind {
            TokenKind::Opt(OptStyle::Flag) => {
                if let Some(c) = arg[self.end..].chars().next().filter(|&c| is_delim(c)) {
                    self.end += c.len_utf8();
                }
                self.value_token(arg, OptStyle::Flag);
                Ok(true)
            }
            TokenKind::Opt(OptStyle::Long) => {
                // A long match only stops short of the argument end at a
                // delimiter.
                let c = arg[self.end..].chars().next();
                debug_assert!(c.is_some_and(is_delim));
                if let Some(c) = c.filter(|&c| is_delim(c)) {
                    self.end += c.len_utf8();
                }
                self.value_token(arg, OptStyle::Long);
                Ok(true)
            }
            _ => {
                // Park at the end of the offending argument so the next step
                // resumes cleanly at the following one.
                self.end = arg.len();
                Err(Error::Unparseable(arg.to_owned()))
            }
        }
    }

    /// Text span of the current token.
    pub fn text(&self) -> &'a str {
        match self.args.get(self.cursor).copied() {
            Some(arg) => &arg[self.begin..self.end],
            None => "",
        }
    }

    /// Classification of the current token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Identifier of the matched option, valid while the current token is an
    /// option or an option value. Any other kind yields
    /// [`Error::NotAnOption`].
    pub fn opt_id(&self) -> Result<OptId, Error> {
        self.opt().map(OptSpec::id).ok_or(Error::NotAnOption)
    }

    /// The matched descriptor, when the current token carries one.
    pub fn opt(&self) -> Option<&'a OptSpec> {
        if !self.kind.has_opt() {
            return None;
        }
        self.matched.map(|ix| self.registry.spec(ix))
    }

    /// Snapshot of the current token.
    pub fn current(&self) -> Token<'a> {
        Token {
            kind: self.kind,
            text: self.text(),
            id: self.opt_id().ok(),
        }
    }

    /// Move the cursor to the next argument and classify its head. Returns
    /// `false` on exhaustion.
    fn next_arg(&mut self) -> bool {
        self.in_group = false;

        if self.cursor + 1 >= self.args.len() {
            self.done = true;
            return false;
        }
        self.cursor += 1;

        let arg = self.args[self.cursor];
        let hyphens = arg.bytes().take_while(|&b| b == b'-').count();
        self.begin = hyphens;
        self.end = hyphens;
        self.matched = None;

        match hyphens {
            0 => {
                if !self.try_command(arg) {
                    self.generic(arg);
                }
            }
            1 => {
                if !self.try_long(arg) && !self.try_flags(arg) {
                    self.generic(arg);
                }
            }
            _ => {
                if !self.try_long(arg) {
                    self.generic(arg);
                }
            }
        }
        true
    }

    /// Exact whole-argument match against the registered command words.
    fn try_command(&mut self, arg: &str) -> bool {
        let Some(ix) = self.registry.command(arg) else {
            return false;
        };

        self.end = arg.len();
        self.kind = TokenKind::Opt(OptStyle::Command);
        self.matched = Some(ix);
        true
    }

    /// Prefix match against the long aliases, scanned in ascending lexical
    /// order. An alias matches when the remaining input starts with it and
    /// the next character is a delimiter or the end of the argument. The
    /// first hit wins, so a lexically earlier alias pre-empts a later,
    /// longer one when both match.
    fn try_long(&mut self, arg: &'a str) -> bool {
        let rest = &arg[self.begin..];

        for (alias, ix) in self.registry.longs() {
            if !rest.starts_with(alias) {
                continue;
            }
            if let Some(c) = rest[alias.len()..].chars().next() {
                if !is_delim(c) {
                    continue;
                }
            }

            self.end = self.begin + alias.len();
            self.kind = TokenKind::Opt(OptStyle::Long);
            self.matched = Some(ix);
            return true;
        }
        false
    }

    /// Single-character flag at the head of the remaining input. When every
    /// remaining character is a registered flag, this opens a grouped run;
    /// otherwise the remainder is taken as an inline value on the next step.
    fn try_flags(&mut self, arg: &'a str) -> bool {
        let rest = &arg[self.begin..];

        let Some(first) = rest.chars().next() else {
            // A lone hyphen. Nothing to match.
            return false;
        };
        let Some(ix) = self.registry.flag(first) else {
            return false;
        };

        self.in_group = rest.chars().all(|c| self.registry.flag(c).is_some());
        self.end = self.begin + first.len_utf8();
        self.kind = TokenKind::Opt(OptStyle::Flag);
        self.matched = Some(ix);
        true
    }

    fn generic(&mut self, arg: &str) {
        self.begin = 0;
        self.end = arg.len();
        self.kind = TokenKind::Generic;
        self.matched = None;
    }

    fn value_token(&mut self, arg: &str, style: OptStyle) {
        self.begin = self.end;
        self.end = arg.len();
        self.kind = TokenKind::OptValue(style);
        self.in_group = false;
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(true) => Some(Ok(self.current())),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

/// The characters separating a long or flag-style option from its inline
/// value.
fn is_delim(c: char) -> bool {
    matches!(c, '=' | ',')
}

/// First character at `at`. Callers guarantee `at` is in bounds and on a
/// character boundary.
fn next_char(arg: &str, at: usize) -> char {
    arg[at..].chars().next().unwrap_or('\0')
}

fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(ix) => &path[ix + 1..],
        None => path,
    }
}
