//! Canonical anagram keys.

use std::fmt;

/// A word's letters sorted ascending. Anagrams share a signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Box<[u8]>);

impl Signature {
    pub fn of(word: &str) -> Signature {
        let mut bytes = word.as_bytes().to_vec();
        bytes.sort_unstable();
        Signature(bytes.into_boxed_slice())
    }

    /// True iff some letter occurs twice. Sorting puts repeats next to each other.
    pub fn has_repeat(&self) -> bool {
        self.0.windows(2).any(|pair| pair[0] == pair[1])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;

    #[test]
    fn anagrams_share_a_signature() {
        assert_eq!(Signature::of("cat"), Signature::of("act"));
        assert_eq!(Signature::of("dog").to_string(), "dgo");
        assert_ne!(Signature::of("dog"), Signature::of("dig"));
    }

    #[test]
    fn repeats_are_detected() {
        assert!(Signature::of("noon").has_repeat());
        assert!(Signature::of("abca").has_repeat());
        assert!(!Signature::of("fish").has_repeat());
        assert!(!Signature::of("a").has_repeat());
        assert!(!Signature::of("").has_repeat());
    }
}
