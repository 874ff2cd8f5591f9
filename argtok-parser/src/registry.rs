//! Option descriptors and the alias look-up buckets built from them.

use std::collections::BTreeMap;

/// Opaque identifier of an option, chosen by the caller.
///
/// An identifier may happen to be built from a character code (see
/// [`OptId::from`]), but the tokenizer never compares identifiers against
/// input characters: characters only matter for classifying flag aliases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OptId(u32);

impl OptId {
    /// Create an identifier from a caller-chosen value.
    pub const fn new(raw: u32) -> Self {
        OptId(raw)
    }

    /// The raw value this identifier was created from.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for OptId {
    fn from(raw: u32) -> Self {
        OptId(raw)
    }
}

impl From<char> for OptId {
    /// Numeric convenience for callers that name options after a character,
    /// e.g. `OptId::from('h')` for a help option.
    fn from(c: char) -> Self {
        OptId(c as u32)
    }
}

/// Describes one option the tokenizer can recognize: an identifier, the
/// alias spellings that denote it, and a description for help output.
///
/// Aliases carry their own hyphens: an option reachable as `-l` or `--long`
/// registers both spellings, `["-l", "--long"]`. Even when the identifier is
/// built from a character, the matching characters come from the alias list
/// alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptSpec {
    id: OptId,
    aliases: Vec<String>,
    description: String,
}

impl OptSpec {
    /// Create a descriptor. Alias order is preserved but carries no meaning
    /// for matching.
    pub fn new(id: OptId, aliases: &[&str], description: &str) -> Self {
        OptSpec {
            id,
            aliases: aliases.iter().map(|s| (*s).to_owned()).collect(),
            description: description.to_owned(),
        }
    }

    /// Identifier of this option.
    pub fn id(&self) -> OptId {
        self.id
    }

    /// The alias spellings, in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.iter().map(String::as_str)
    }

    /// Free-text description, for help output.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Owns a set of descriptors and classifies every registered alias into one
/// of three look-up buckets:
///
/// - *command words*: aliases with no leading hyphen and more than one
///   character, matched against whole bare-word arguments;
/// - *flag characters*: aliases that are a single character after stripping
///   at most one leading hyphen, matched per character;
/// - *long aliases*: everything else that is non-empty after stripping its
///   leading hyphens, matched as a prefix up to a delimiter.
///
/// An empty registry is valid; it simply never matches, so every argument
/// tokenizes as generic text.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    specs: Vec<OptSpec>,
    commands: BTreeMap<String, usize>,
    flags: BTreeMap<char, usize>,
    longs: BTreeMap<String, usize>,
}

impl Registry {
    /// Build the look-up buckets from an ordered list of descriptors.
    ///
    /// An alias consisting solely of hyphens can never match and is ignored.
    /// When two descriptors register the same normalized alias, the later
    /// registration wins — descriptor order first, then alias order within a
    /// descriptor. No error is raised for such collisions.
    pub fn new(specs: impl IntoIterator<Item = OptSpec>) -> Self {
        let specs: Vec<OptSpec> = specs.into_iter().collect();

        let mut commands = BTreeMap::new();
        let mut flags = BTreeMap::new();
        let mut longs = BTreeMap::new();

        for (ix, spec) in specs.iter().enumerate() {
            for alias in &spec.aliases {
                let stripped = alias.trim_start_matches('-');
                let hyphens = alias.len() - stripped.len();

                let mut chars = stripped.chars();
                match (hyphens, chars.next(), chars.next()) {
                    // Only hyphens, never matchable.
                    (_, None, _) => {}
                    (0, Some(_), Some(_)) => {
                        commands.insert(stripped.to_owned(), ix);
                    }
                    (0 | 1, Some(c), None) => {
                        flags.insert(c, ix);
                    }
                    _ => {
                        longs.insert(stripped.to_owned(), ix);
                    }
                }
            }
        }

        Registry {
            specs,
            commands,
            flags,
            longs,
        }
    }

    /// All registered descriptors, in registration order.
    pub fn specs(&self) -> &[OptSpec] {
        &self.specs
    }

    pub(crate) fn command(&self, word: &str) -> Option<usize> {
        self.commands.get(word).copied()
    }

    pub(crate) fn flag(&self, c: char) -> Option<usize> {
        self.flags.get(&c).copied()
    }

    /// Long aliases in ascending lexical order of their key text.
    pub(crate) fn longs(&self) -> impl Iterator<Item = (&str, usize)> {
        self.longs.iter().map(|(k, &ix)| (k.as_str(), ix))
    }

    pub(crate) fn spec(&self, ix: usize) -> &OptSpec {
        &self.specs[ix]
    }
}
