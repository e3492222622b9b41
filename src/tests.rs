use crate::*;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap as HashMap;

const VOCABULARY: [&str; 12] = [
    "the", "a", "cat", "dog", "sat", "on", "mat", "quick", "brown", "fox", "jumps", "over",
];

fn random_sentence(n: usize, rng: &mut impl Rng) -> Vec<&'static str> {
    (0..n)
        .map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())])
        .collect()
}

/// Apply roughly `e * n` random substitutions, insertions and deletions.
fn mutate(a: &[&'static str], e: f32, rng: &mut impl Rng) -> Vec<&'static str> {
    let mut b = a.to_vec();
    let edits = (e * a.len() as f32).ceil() as usize;
    for _ in 0..edits {
        let word = VOCABULARY[rng.gen_range(0..VOCABULARY.len())];
        match rng.gen_range(0..3) {
            0 if !b.is_empty() => {
                let i = rng.gen_range(0..b.len());
                b[i] = word;
            }
            1 if !b.is_empty() => {
                b.remove(rng.gen_range(0..b.len()));
            }
            _ => b.insert(rng.gen_range(0..=b.len()), word),
        }
    }
    b
}

/// Map words to byte ids so that a byte-level Levenshtein can serve as reference.
fn intern(a: &[&str], b: &[&str]) -> (Vec<u8>, Vec<u8>) {
    let mut ids = HashMap::default();
    let mut id = |w: &str| {
        let next = ids.len() as u8;
        *ids.entry(w.to_string()).or_insert(next)
    };
    let a = a.iter().map(|&w| id(w)).collect_vec();
    let b = b.iter().map(|&w| id(w)).collect_vec();
    (a, b)
}

fn test_on_input(a: &[&str], b: &[&str], params: &str) {
    let (ia, ib) = intern(a, b);
    let cost = triple_accel::levenshtein_exp(&ia, &ib) as Cost;

    let (alignment, cigar) = align_with_cigar(a, b);
    assert_eq!(
        alignment.num_errors(),
        cost,
        "\n{params}\nlet a = {a:?};\nlet b = {b:?};\ncigar: {cigar}"
    );
    assert_eq!(edit_distance(a, b), cost, "{params}");
    assert_eq!(cigar.verify(a, b), cost, "{params}");
    assert_eq!(cigar.to_alignment(), alignment);
    assert_eq!(align(a, b), alignment);

    assert_eq!(
        alignment.num_matches + alignment.num_substitutions + alignment.num_deletions,
        alignment.reference_length
    );
    assert_eq!(alignment.reference_length, a.len());
    assert_eq!(alignment.hypothesis_length(), b.len());
}

/// Random sentences of many lengths and error rates, on a fixed set of seeds.
fn gen_seqs() -> impl Iterator<Item = ((Vec<&'static str>, Vec<&'static str>), String)> {
    let ns = [0usize, 1, 2, 3, 4, 5, 7, 10, 13, 20, 30, 50, 100];
    let es = [0.0f32, 0.05, 0.1, 0.2, 0.3, 0.5, 1.0];
    let seeds = [31415u64, 2718, 1618];
    ns.into_iter()
        .cartesian_product(es)
        .cartesian_product(seeds)
        .map(|((n, e), seed)| {
            let ref mut rng = ChaCha8Rng::seed_from_u64(seed ^ (n as u64) << 8);
            let a = random_sentence(n, rng);
            let b = mutate(&a, e, rng);
            ((a, b), format!("seed {seed:>6} n {n:>4} e {e:>.2}"))
        })
}

#[test]
fn random_against_levenshtein() {
    for ((a, b), params) in gen_seqs() {
        test_on_input(&a, &b, &params);
        // Swapping the roles turns insertions into deletions.
        test_on_input(&b, &a, &params);
    }
}

#[test]
fn unrelated_sentences() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(42);
    for n in 0..40 {
        let a = random_sentence(n, rng);
        let b = random_sentence(rng.gen_range(0..40), rng);
        test_on_input(&a, &b, &format!("unrelated n {n}"));
    }
}

#[test]
fn identical_is_all_matches() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(7);
    for n in [0, 1, 5, 50] {
        let a = random_sentence(n, rng);
        let alignment = align(&a, &a);
        assert_eq!(
            alignment,
            Alignment {
                num_matches: n,
                reference_length: n,
                ..Default::default()
            }
        );
    }
}

#[test]
fn empty_hypothesis_is_all_deletions() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(11);
    for n in 0..60 {
        let a = random_sentence(n, rng);
        let (alignment, cigar) = align_with_cigar::<&str>(&a, &[]);
        assert_eq!(
            alignment,
            Alignment {
                num_deletions: n,
                reference_length: n,
                ..Default::default()
            },
            "{a:?}"
        );
        assert!(cigar.iter_ops().all(|op| op == CigarOp::Del));
    }
}

#[test]
fn empty_reference_is_all_insertions() {
    let ref mut rng = ChaCha8Rng::seed_from_u64(13);
    for n in 0..60 {
        let b = random_sentence(n, rng);
        let (alignment, cigar) = align_with_cigar::<&str>(&[], &b);
        assert_eq!(
            alignment,
            Alignment {
                num_insertions: n,
                ..Default::default()
            },
            "{b:?}"
        );
        assert!(cigar.iter_ops().all(|op| op == CigarOp::Ins));
        if n > 0 {
            assert_eq!(
                word_error_rate(&alignment),
                Err(MetricError::UndefinedMetric { errors: n })
            );
        }
    }
}

#[test]
fn both_empty() {
    assert_eq!(align::<String>(&[], &[]), Alignment::default());
    assert_eq!(edit_distance::<String>(&[], &[]), 0);
}

#[test]
fn deletion_before_substitutions() {
    let (alignment, cigar) = align_with_cigar(&["a", "b"], &["b"]);
    assert_eq!(alignment.num_deletions, 1);
    assert_eq!(alignment.num_matches, 1);
    assert_eq!(alignment.num_substitutions, 0);
    assert_eq!(cigar.to_string(), "1D1=");
}

#[test]
fn case_sensitive() {
    let alignment = align(&["The", "cat"], &["the", "cat"]);
    assert_eq!(alignment.num_substitutions, 1);
}

#[test]
fn deterministic_across_threads() {
    let a = "the quick brown fox jumps over the lazy dog".split(' ').collect_vec();
    let b = "a quick brown dog jumps over over lazy fox".split(' ').collect_vec();
    let expected = align_with_cigar(&a, &b);
    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| s.spawn(|| align_with_cigar(&a, &b)))
            .collect_vec();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
    assert_eq!(align_with_cigar(&a, &b), expected);
}
