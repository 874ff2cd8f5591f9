//! Tokenizes the process arguments and reports everything unrecognized
//! through a diagnostic journal backed by the installed `tracing`
//! subscriber.
//!
//! Try: `cargo run --example report -- --help -x stray`

use argtok::diag::{Journal, Severity, TraceSink};
use argtok::{OptId, OptSpec, Registry, TokenKind, Tokens};

fn main() {
    tracing_subscriber::fmt().init();

    let registry = Registry::new([
        OptSpec::new(OptId::from('h'), &["-h", "--help"], "print usage"),
        OptSpec::new(OptId::from('o'), &["-o", "--output"], "output file"),
    ]);
    let journal = Journal::new(TraceSink);

    let owned: Vec<String> = std::env::args().collect();
    let argv: Vec<&str> = owned.iter().map(String::as_str).collect();

    let mut tokens = Tokens::new(&registry, &argv);
    loop {
        match tokens.advance() {
            Ok(true) => match tokens.kind() {
                TokenKind::Generic => {
                    journal.write(Severity::Warn, &format!("unrecognized: {}", tokens.text()));
                }
                kind => println!("{kind:?}: {}", tokens.text()),
            },
            Ok(false) => break,
            Err(err) => journal.write(Severity::Error, &err.to_string()),
        }
    }
}
