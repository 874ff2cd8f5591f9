//! Walks the process arguments and prints every classified token, pairing
//! each option with its inline value when one follows.
//!
//! Try: `cargo run --example walk -- -h -D=foo update -vD stray`

use argtok_parser::{OptId, OptSpec, Registry, TokenKind, Tokens};

fn main() {
    let registry = Registry::new([
        OptSpec::new(OptId::from('h'), &["-h", "--help"], "This option right now"),
        OptSpec::new(OptId::from('v'), &["-v", "--version"], "Current version"),
        OptSpec::new(OptId::new(0x101), &["update"], "Update the database"),
        OptSpec::new(OptId::from('D'), &["-D", "--define"], "Define a macro"),
    ]);

    let owned: Vec<String> = std::env::args().collect();
    let argv: Vec<&str> = owned.iter().map(String::as_str).collect();

    let mut tokens = Tokens::new(&registry, &argv);
    println!("the command is {}", tokens.text());

    loop {
        match tokens.advance() {
            Ok(true) => describe(&mut tokens),
            Ok(false) => break,
            Err(err) => {
                eprintln!("{err}");
                break;
            }
        }
    }
}

fn describe(tokens: &mut Tokens<'_>) {
    print!("{} is ", tokens.text());
    match tokens.kind() {
        TokenKind::Opt(_) => {
            let id = tokens.opt_id().expect("option tokens carry an id");
            print!("option #{}", id.raw());

            if matches!(tokens.advance(), Ok(true)) {
                if matches!(tokens.kind(), TokenKind::OptValue(_)) {
                    println!(" with value '{}'", tokens.text());
                } else {
                    println!();
                    describe(tokens);
                }
            } else {
                println!();
            }
        }
        _ => println!("a generic argument"),
    }
}
