//! argtok, an incremental tokenizer for command-line argument vectors.
#![deny(missing_docs)]

pub mod diag;

pub use argtok_parser as parser;

pub use parser::{OptId, OptSpec, OptStyle, Registry, Token, TokenKind, Tokens};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error comes from stepping the token stream.
    #[error(transparent)]
    Parser(#[from] parser::Error),
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use crate as argtok;

    #[test]
    fn it_should_tokenize_a_command_line_end_to_end() {
        let registry = argtok::Registry::new([
            argtok::OptSpec::new(argtok::OptId::from('h'), &["-h", "--help"], "print usage"),
            argtok::OptSpec::new(argtok::OptId::from('D'), &["-D", "--define"], "define a macro"),
        ]);

        let mut tokens = argtok::Tokens::new(&registry, &["./tool", "-h", "-D=foo"]);
        assert_that!(tokens.text(), eq("tool"));

        let collected: std::result::Result<Vec<argtok::Token<'_>>, _> = tokens.by_ref().collect();
        let collected = collected.unwrap();

        let kinds: Vec<argtok::TokenKind> = collected.iter().map(|t| t.kind).collect();
        assert_that!(
            kinds,
            eq(&vec![
                argtok::TokenKind::Opt(argtok::OptStyle::Flag),
                argtok::TokenKind::Opt(argtok::OptStyle::Flag),
                argtok::TokenKind::OptValue(argtok::OptStyle::Flag),
            ])
        );
        assert_that!(collected[2].text, eq("foo"));
    }

    #[test]
    fn it_should_wrap_parser_errors_transparently() {
        let err = argtok::Error::from(argtok::parser::Error::NotAnOption);

        assert_that!(err.to_string(), eq("current token is not an option"));
    }
}
