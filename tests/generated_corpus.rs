use std::collections::BTreeMap;

use corpus_gen::{random_neighbour_word_groups, random_sentences, random_words, vocabulary, DEFAULT_AVERAGE_WORD_COUNT};
use generalized_suffixtree::{GeneralizedIndex, MatchKind, NaiveBuilder, SequenceId, TreeBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Every `(sequence, start)` where `probe` occurs, by checking every position
fn brute_force_occurrences<K: PartialEq>(sequences: &[Vec<K>], probe: &[K]) -> Vec<(SequenceId, usize)> {
    let mut occurrences = vec![];
    if probe.is_empty() {
        return occurrences;
    }
    for (sequence_id, sequence) in sequences.iter().enumerate() {
        if sequence.len() < probe.len() {
            continue;
        }
        for start in 0..=sequence.len() - probe.len() {
            if sequence[start..start + probe.len()] == *probe {
                occurrences.push((sequence_id, start));
            }
        }
    }
    occurrences
}

fn brute_force_kinds<K: PartialEq>(sequences: &[Vec<K>], probe: &[K]) -> Vec<(SequenceId, MatchKind)> {
    let mut kinds: BTreeMap<SequenceId, MatchKind> = BTreeMap::new();
    for (sequence_id, start) in brute_force_occurrences(sequences, probe) {
        let kind = MatchKind::classify(start, probe.len(), sequences[sequence_id].len());
        kinds
            .entry(sequence_id)
            .and_modify(|current| *current = current.strongest(kind))
            .or_insert(kind);
    }
    kinds.into_iter().collect()
}

/// Substrings of the stored sequences, so most of the probes have at least one hit
fn probes<K: Clone>(sequences: &[Vec<K>], count: usize, random: &mut StdRng) -> Vec<Vec<K>> {
    (0..count)
        .map(|_| {
            let sequence = &sequences[random.gen_range(0..sequences.len())];
            if sequence.is_empty() {
                return vec![];
            }
            let start = random.gen_range(0..sequence.len());
            let end = random.gen_range(start + 1..=sequence.len());
            sequence[start..end].to_vec()
        })
        .collect()
}

fn check_index<K: generalized_suffixtree::Alphabet, B: TreeBuilder>(
    index: &GeneralizedIndex<K, usize, B>,
    sequences: &[Vec<K>],
    probes: &[Vec<K>],
) {
    for probe in probes {
        assert_eq!(index.find_occurrences(probe), brute_force_occurrences(sequences, probe));

        let expected = brute_force_kinds(sequences, probe);
        let result = index.find(probe);
        let found: Vec<(SequenceId, MatchKind)> = result.hits.iter().map(|hit| (hit.sequence_id, hit.kind)).collect();
        assert_eq!(found, expected);
        assert_eq!(result.kind, MatchKind::aggregate(expected.iter().map(|(_, kind)| *kind)));
        assert!(result.hits.iter().all(|hit| *hit.value == hit.sequence_id));
    }
}

#[test]
fn test_sentences_match_brute_force() {
    let mut random = StdRng::seed_from_u64(2024);
    let sentences = random_sentences(&vocabulary(), 60, DEFAULT_AVERAGE_WORD_COUNT, &mut random);

    let mut index = GeneralizedIndex::new();
    for (value, sentence) in sentences.iter().enumerate() {
        assert_eq!(index.add(sentence.clone(), value), Ok(value));
    }
    index.tree().assert_well_formed(true);

    let probes = probes(&sentences, 200, &mut random);
    check_index(&index, &sentences, &probes);

    let misses: Vec<Vec<String>> = (0..50).map(|_| random_words(&vocabulary(), 3, &mut random)).collect();
    check_index(&index, &sentences, &misses);
}

#[test]
fn test_characters_match_brute_force() {
    let mut random = StdRng::seed_from_u64(7);
    let words = random_neighbour_word_groups(&vocabulary(), 300, &mut random);
    let sequences: Vec<Vec<char>> = words.iter().map(|word| word.chars().collect()).collect();

    let mut index = GeneralizedIndex::new();
    for (value, sequence) in sequences.iter().enumerate() {
        index.add(sequence.clone(), value).unwrap();
    }
    index.tree().assert_well_formed(true);

    let probes = probes(&sequences, 500, &mut random);
    check_index(&index, &sequences, &probes);
}

#[test]
fn test_small_alphabet_matches_naive_builder() {
    let mut random = StdRng::seed_from_u64(99);
    let sequences: Vec<Vec<u8>> = (0..40)
        .map(|_| {
            let length = random.gen_range(0..30);
            (0..length).map(|_| random.gen_range(b'a'..=b'c')).collect()
        })
        .collect();

    let mut ukkonen = GeneralizedIndex::new();
    let mut naive = GeneralizedIndex::with_builder(NaiveBuilder::new());
    for (value, sequence) in sequences.iter().enumerate() {
        ukkonen.add(sequence.clone(), value).unwrap();
        naive.add(sequence.clone(), value).unwrap();
    }
    ukkonen.tree().assert_well_formed(true);
    naive.tree().assert_well_formed(false);
    assert_eq!(ukkonen.node_count(), naive.node_count());

    let probes = probes(&sequences, 300, &mut random);
    check_index(&ukkonen, &sequences, &probes);
    check_index(&naive, &sequences, &probes);
}

#[test]
fn test_every_suffix_is_found() {
    let mut random = StdRng::seed_from_u64(5);
    let sentences = random_sentences(&vocabulary(), 20, 8, &mut random);
    let sequences: Vec<Vec<char>> = sentences.iter().map(|sentence| sentence.join(" ").chars().collect()).collect();

    let mut index = GeneralizedIndex::new();
    for (value, sequence) in sequences.iter().enumerate() {
        index.add(sequence.clone(), value).unwrap();
    }

    for (sequence_id, sequence) in sequences.iter().enumerate() {
        for start in 0..sequence.len() {
            assert!(index.find_occurrences(&sequence[start..]).contains(&(sequence_id, start)));
        }
        let result = index.find(sequence);
        assert!(result.hits.iter().any(|hit| hit.sequence_id == sequence_id && hit.kind == MatchKind::ExactMatch));
    }
}

#[test]
fn test_approximate_without_mismatches_equals_find() {
    let mut random = StdRng::seed_from_u64(13);
    let words = random_neighbour_word_groups(&vocabulary(), 100, &mut random);

    let mut index = GeneralizedIndex::new();
    for (value, word) in words.iter().enumerate() {
        index.add(word.chars(), value).unwrap();
    }

    for word in random_words(&vocabulary(), 100, &mut random) {
        let probe: Vec<char> = word.chars().collect();
        assert_eq!(index.find_approximate(&probe, 0), index.find(&probe));
        // substitutions can only add hits
        let approximate = index.find_approximate(&probe, 1);
        assert!(index.find(&probe).hits.iter().all(|hit| approximate.hits.contains(hit)));
    }
}
