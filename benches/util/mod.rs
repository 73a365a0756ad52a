use corpus_gen::{random_neighbour_word_groups, random_sentences, vocabulary};
use generalized_suffixtree::GeneralizedIndex;
use rand::rngs::ThreadRng;

/// Generate `count` random sentences as sequences of characters.
pub fn generate_sentences(count: usize, random: &mut ThreadRng) -> Vec<Vec<char>> {
    random_sentences(&vocabulary(), count, 10, random)
        .iter()
        .map(|sentence| sentence.join(" ").chars().collect())
        .collect()
}

/// Generate `count` random probes made of words that are close to each other in the vocabulary.
pub fn generate_probes(count: usize, random: &mut ThreadRng) -> Vec<Vec<char>> {
    random_neighbour_word_groups(&vocabulary(), count, random)
        .iter()
        .map(|word| word.chars().collect())
        .collect()
}

pub fn build_index(sentences: Vec<Vec<char>>) -> GeneralizedIndex<char, usize> {
    let mut index = GeneralizedIndex::new();
    for (value, sentence) in sentences.into_iter().enumerate() {
        index.add(sentence, value).unwrap();
    }
    index
}
