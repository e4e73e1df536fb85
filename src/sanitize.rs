use crate::config::CleanChars;
use crate::errors::FsResult;

pub const PLACEHOLDER: char = '_';

const TRANSLITERATIONS: [(char, &str); 18] = [
    ('æ', "ae"), ('ø', "oe"), ('å', "aa"),
    ('Æ', "Ae"), ('Ø', "Oe"), ('Å', "Aa"),
    ('é', "e"), ('è', "e"), ('à', "a"),
    ('É', "E"), ('È', "E"), ('À', "A"),
    ('ä', "ae"), ('ö', "oe"), ('ü', "ue"),
    ('Ä', "Ae"), ('Ö', "Oe"), ('Ü', "Ue"),
];

#[derive(Debug, Clone)]
pub struct CharacterPolicy {
    anywhere: String,
    not_in_beginning: String,
}

impl CharacterPolicy {
    pub fn new(anywhere: impl Into<String>, not_in_beginning: impl Into<String>) -> FsResult<Self> {
        Self::from_config(&CleanChars { anywhere: anywhere.into(), not_in_beginning: not_in_beginning.into() })
    }

    pub fn from_config(chars: &CleanChars) -> FsResult<Self> {
        chars.validate()?;
        Ok(Self { anywhere: chars.anywhere.clone(), not_in_beginning: chars.not_in_beginning.clone() })
    }

    /// The "anywhere" set wins at every position; the second set only past position 0.
    pub fn allows(&self, c: char, position: usize) -> bool {
        let in_set = |set: &str| c.to_lowercase().all(|l| set.contains(l));
        in_set(&self.anywhere) || (position > 0 && in_set(&self.not_in_beginning))
    }
}

/// Turns titles and other human-entered text into entry names that are safe
/// on disk and in URLs.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    policy: CharacterPolicy,
}

impl Sanitizer {
    pub fn new(policy: CharacterPolicy) -> Self { Self { policy } }

    pub fn policy(&self) -> &CharacterPolicy { &self.policy }

    /// Output never starts or ends with `.` or space, never holds `..` or a
    /// doubled placeholder, and only uses characters the policy allows at
    /// their position. May be empty.
    pub fn sanitize(&self, raw: &str) -> String {
        let transliterated = transliterate(raw);
        let mut name = transliterated.trim_matches(|c: char| c == '.' || c == ' ').to_string();
        while name.contains("..") {
            name = name.replace("..", ".");
        }
        let mut cleaned: String = name
            .chars()
            .enumerate()
            .map(|(i, c)| if self.policy.allows(c, i) { c } else { PLACEHOLDER })
            .collect();
        let doubled: String = [PLACEHOLDER, PLACEHOLDER].iter().collect();
        while cleaned.contains(&doubled) {
            cleaned = cleaned.replace(&doubled, &PLACEHOLDER.to_string());
        }
        cleaned
    }
}

fn transliterate(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match TRANSLITERATIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}
