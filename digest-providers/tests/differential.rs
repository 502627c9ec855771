use digest_providers::{CandidateProvider, ReferenceProvider};
use digest_traits::{Algorithm, DigestProvider};
use proptest::prelude::*;

fn algorithm() -> impl Strategy<Value = Algorithm> {
    proptest::sample::select(Algorithm::ALL.to_vec())
}

#[test]
fn both_providers_honor_the_length_contract() {
    let reference = ReferenceProvider::new();
    let candidate = CandidateProvider::builtin().unwrap();

    for algorithm in Algorithm::ALL {
        let expected = algorithm.output_size(32).unwrap();
        assert_eq!(reference.compute(algorithm, b"foo bar", 32).unwrap().len(), expected);
        assert_eq!(candidate.compute(algorithm, b"foo bar", 32).unwrap().len(), expected);
    }
}

#[test]
fn providers_are_deterministic() {
    let reference = ReferenceProvider::new();
    let candidate = CandidateProvider::builtin().unwrap();
    let data = b"The quick brown fox jumps over the lazy dog";

    for algorithm in Algorithm::ALL {
        assert_eq!(
            reference.compute(algorithm, data, 48).unwrap(),
            reference.compute(algorithm, data, 48).unwrap()
        );
        assert_eq!(
            candidate.compute(algorithm, data, 48).unwrap(),
            candidate.compute(algorithm, data, 48).unwrap()
        );
    }
}

#[test]
fn fixed_output_ignores_xof_len() {
    let candidate = CandidateProvider::builtin().unwrap();
    for xof_len in [0, 1, 1000] {
        assert_eq!(
            candidate.compute(Algorithm::Sha3_512, b"abc", xof_len).unwrap(),
            candidate.compute(Algorithm::Sha3_512, b"abc", 32).unwrap()
        );
    }
}

#[test]
fn providers_report_their_source() {
    let candidate = CandidateProvider::builtin().unwrap();
    assert_eq!(ReferenceProvider.source().name(), "reference");
    assert_eq!(candidate.source().name(), "candidate");
    assert!(Algorithm::ALL.iter().all(|&a| candidate.supports_algorithm(a)));
}

proptest! {
    #[test]
    fn builtin_candidate_matches_reference(
        algorithm in algorithm(),
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        xof_len in 1usize..512,
    ) {
        let reference = ReferenceProvider::new();
        let candidate = CandidateProvider::builtin().unwrap();

        let expected = reference.compute(algorithm, &data, xof_len).unwrap();
        let actual = candidate.compute(algorithm, &data, xof_len).unwrap();
        prop_assert_eq!(actual.len(), algorithm.output_size(xof_len).unwrap());
        prop_assert_eq!(actual, expected);
    }
}
