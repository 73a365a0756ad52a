use std::fs;
use std::io;
use std::path::Path;

use rand::Rng;

pub const DEFAULT_AVERAGE_WORD_COUNT: usize = 15;

/// Sorted list of common English words that is embedded in the crate
pub fn vocabulary() -> Vec<String> {
    words_from_text(include_str!("english-words.txt"))
}

/// Splits `text` on every character that is not a letter or a digit
pub fn words_from_text(text: &str) -> Vec<String> {
    text.split(|character: char| !character.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

pub fn words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    Ok(words_from_text(&fs::read_to_string(path)?))
}

/// Picks `count` words uniformly at random, the same word can be picked more than once
pub fn random_words<R: Rng>(vocabulary: &[String], count: usize, random: &mut R) -> Vec<String> {
    if vocabulary.is_empty() {
        return vec![];
    }
    (0..count)
        .map(|_| vocabulary[random.gen_range(0..vocabulary.len())].clone())
        .collect()
}

/// Generates `sentence_count` sentences of random words. Every sentence has between 1 and
/// `2 * average_word_count` words.
pub fn random_sentences<R: Rng>(
    vocabulary: &[String],
    sentence_count: usize,
    average_word_count: usize,
    random: &mut R,
) -> Vec<Vec<String>> {
    if vocabulary.is_empty() {
        return vec![];
    }
    let max_word_count = (2 * average_word_count).max(1);
    (0..sentence_count)
        .map(|_| {
            let word_count = random.gen_range(1..=max_word_count);
            random_words(vocabulary, word_count, random)
        })
        .collect()
}

/// Generates `count` words as runs of at most 3 words that are close to each other in the
/// (sorted) vocabulary. Close words tend to share a prefix, so these end up in shared paths of the tree.
pub fn random_neighbour_word_groups<R: Rng>(vocabulary: &[String], count: usize, random: &mut R) -> Vec<String> {
    if vocabulary.is_empty() {
        return vec![];
    }
    let mut words = Vec::with_capacity(count);
    while words.len() < count {
        let mut index = random.gen_range(0..vocabulary.len());
        for _ in 0..3 {
            if words.len() == count {
                break;
            }
            words.push(vocabulary[index].clone());
            index += random.gen_range(0..5);
            if index >= vocabulary.len() {
                break;
            }
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempdir::TempDir;

    use crate::{
        random_neighbour_word_groups, random_sentences, random_words, vocabulary, words_from_file, words_from_text,
        DEFAULT_AVERAGE_WORD_COUNT,
    };

    #[test]
    fn test_vocabulary() {
        let vocabulary = vocabulary();
        assert!(vocabulary.len() > 500);
        assert!(vocabulary.iter().all(|word| !word.is_empty()));
        assert!(vocabulary.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_words_from_text() {
        assert_eq!(words_from_text("Hello, world!  it's 2 o'clock\n"), vec!["Hello", "world", "it", "s", "2", "o", "clock"]);
        assert!(words_from_text(" ,.; ").is_empty());
    }

    #[test]
    fn test_words_from_file() {
        let tmp_dir = TempDir::new("test_words_from_file").unwrap();
        let path = tmp_dir.path().join("words.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"first second\nthird-fourth\n").unwrap();

        assert_eq!(words_from_file(&path).unwrap(), vec!["first", "second", "third", "fourth"]);
        assert!(words_from_file(tmp_dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_random_words() {
        let vocabulary = vocabulary();
        let mut random = StdRng::seed_from_u64(7);
        let words = random_words(&vocabulary, 50, &mut random);

        assert_eq!(words.len(), 50);
        assert!(words.iter().all(|word| vocabulary.contains(word)));
    }

    #[test]
    fn test_random_words_is_deterministic_for_seed() {
        let vocabulary = vocabulary();
        let first = random_words(&vocabulary, 20, &mut StdRng::seed_from_u64(42));
        let second = random_words(&vocabulary, 20, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_sentences() {
        let vocabulary = vocabulary();
        let mut random = StdRng::seed_from_u64(3);
        let sentences = random_sentences(&vocabulary, 100, DEFAULT_AVERAGE_WORD_COUNT, &mut random);

        assert_eq!(sentences.len(), 100);
        assert!(sentences
            .iter()
            .all(|sentence| !sentence.is_empty() && sentence.len() <= 2 * DEFAULT_AVERAGE_WORD_COUNT));
    }

    #[test]
    fn test_random_neighbour_word_groups() {
        let vocabulary = vocabulary();
        let mut random = StdRng::seed_from_u64(11);
        let words = random_neighbour_word_groups(&vocabulary, 31, &mut random);

        assert_eq!(words.len(), 31);
        assert!(words.iter().all(|word| vocabulary.contains(word)));
    }

    #[test]
    fn test_empty_vocabulary() {
        let mut random = StdRng::seed_from_u64(0);
        assert!(random_words(&[], 10, &mut random).is_empty());
        assert!(random_sentences(&[], 10, 5, &mut random).is_empty());
        assert!(random_neighbour_word_groups(&[], 10, &mut random).is_empty());
    }
}
