//! Turns one structural pattern into concrete word combinations.

use itertools::Itertools;

use crate::anagram::AnagramClass;

/// Every choice of one word per class, in slot order. The last slot varies
/// fastest.
pub fn combinations<'a>(classes: &[&'a AnagramClass]) -> impl Iterator<Item = Vec<&'a str>> {
    classes
        .iter()
        .map(|&class| class.words())
        .collect_vec()
        .into_iter()
        .multi_cartesian_product()
}

#[cfg(test)]
mod tests {
    use super::combinations;
    use crate::anagram::AnagramIndex;
    use crate::signature::Signature;
    use itertools::Itertools;

    #[test]
    fn cartesian_product_over_anagram_sets() {
        let mut index = AnagramIndex::new();
        for word in ["cat", "act", "dog", "god", "fish"] {
            index.insert(Signature::of(word), word);
        }
        let act = index.get(&Signature::of("cat")).unwrap();
        let dgo = index.get(&Signature::of("dog")).unwrap();
        let fish = index.get(&Signature::of("fish")).unwrap();

        let lines = combinations(&[act, dgo]).map(|c| c.join(" ")).collect_vec();
        assert_eq!(lines, ["act dog", "act god", "cat dog", "cat god"]);

        assert_eq!(combinations(&[fish, act]).count(), 2);
        assert_eq!(combinations(&[fish]).collect_vec(), [vec!["fish"]]);
    }
}
