//! The comparison loop.

use std::fmt::Display;

use digest_traits::{Algorithm, Digest, DigestProvider, ErrorKind};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::observation::ObservationSet;

/// Result of a run that was not aborted.
#[derive(Debug)]
pub struct RunOutcome {
    pub observations: ObservationSet,
    /// Non-fatal per-algorithm failures. Their pairs are absent from
    /// `observations`.
    pub failures: Vec<HarnessError>,
}

impl RunOutcome {
    /// Every configured pair was recorded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives a reference and a candidate provider over the same input.
pub struct Harness<R, C> {
    reference: R,
    candidate: C,
}

impl<R, C> Harness<R, C>
where
    R: DigestProvider,
    R::Error: Display,
    C: DigestProvider,
    C::Error: Display,
{
    pub fn new(reference: R, candidate: C) -> Self {
        Self { reference, candidate }
    }

    /// Runs every configured algorithm, reference first, then candidate.
    ///
    /// A pair is recorded only when both digests were computed. A fatal
    /// provider error aborts the run; any other failure is logged and the
    /// next algorithm runs.
    pub fn run(&self, config: &HarnessConfig) -> Result<RunOutcome, HarnessError> {
        let xof_len = config.xof_len.get();
        let mut observations = ObservationSet::new();
        let mut failures = Vec::new();

        tracing::info!(input_len = config.input.len(), xof_len, "starting run");

        for algorithm in config.algorithms() {
            match self.run_pair(algorithm, &config.input, xof_len) {
                Ok((reference, candidate)) => {
                    observations.append_pair(algorithm, reference, candidate);
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    tracing::error!(%algorithm, %err, "pair not recorded");
                    failures.push(err);
                }
            }
        }

        for pair in observations.pairs() {
            if pair.matches() {
                tracing::debug!(algorithm = %pair.algorithm, "digests agree");
            } else {
                tracing::info!(algorithm = %pair.algorithm, "digests differ");
            }
        }
        tracing::info!(rows = observations.len(), failed = failures.len(), "run finished");

        Ok(RunOutcome { observations, failures })
    }

    fn run_pair(&self, algorithm: Algorithm, input: &[u8], xof_len: usize) -> Result<(Digest, Digest), HarnessError> {
        let reference = compute(&self.reference, algorithm, input, xof_len)?;
        let candidate = compute(&self.candidate, algorithm, input, xof_len)?;
        Ok((reference, candidate))
    }
}

fn compute<P>(provider: &P, algorithm: Algorithm, input: &[u8], xof_len: usize) -> Result<Digest, HarnessError>
where
    P: DigestProvider,
    P::Error: Display,
{
    let side = provider.source();
    if !provider.supports_algorithm(algorithm) {
        return Err(HarnessError::provider(algorithm, side, &ErrorKind::UnsupportedAlgorithm));
    }
    provider
        .compute(algorithm, input, xof_len)
        .map_err(|err| HarnessError::provider(algorithm, side, &err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest_traits::{ErrorType, Source};

    /// Writes the algorithm's length of `fill` bytes, failing on `broken`.
    struct Scripted {
        source: Source,
        fill: u8,
        broken: Option<(Algorithm, ErrorKind)>,
    }

    impl ErrorType for Scripted {
        type Error = ErrorKind;
    }

    impl DigestProvider for Scripted {
        fn source(&self) -> Source {
            self.source
        }

        fn supported_algorithms(&self) -> &[Algorithm] {
            &Algorithm::ALL
        }

        fn compute(&self, algorithm: Algorithm, _input: &[u8], xof_len: usize) -> Result<Digest, ErrorKind> {
            match self.broken {
                Some((broken, kind)) if broken == algorithm => Err(kind),
                _ => Ok(Digest::from(vec![self.fill; algorithm.output_size(xof_len)?])),
            }
        }
    }

    fn scripted(source: Source, fill: u8) -> Scripted {
        Scripted { source, fill, broken: None }
    }

    #[test]
    fn test_pairs_in_canonical_order() {
        let harness = Harness::new(scripted(Source::Reference, 1), scripted(Source::Candidate, 2));
        let outcome = harness.run(&HarnessConfig::default()).unwrap();

        assert!(outcome.is_complete());
        let rows: Vec<_> = outcome.observations.iter().map(|o| (o.algorithm, o.source)).collect();
        let expected: Vec<_> = Algorithm::ALL
            .into_iter()
            .flat_map(|a| [(a, Source::Reference), (a, Source::Candidate)])
            .collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_failed_pair_is_absent_and_others_run() {
        let candidate = Scripted {
            broken: Some((Algorithm::Sha3_224, ErrorKind::ComputationError)),
            ..scripted(Source::Candidate, 2)
        };
        let harness = Harness::new(scripted(Source::Reference, 1), candidate);
        let outcome = harness.run(&HarnessConfig::default()).unwrap();

        assert!(!outcome.is_complete());
        assert_eq!(outcome.observations.len(), 10);
        assert!(outcome.observations.iter().all(|o| o.algorithm != Algorithm::Sha3_224));
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(
            outcome.failures[0],
            HarnessError::Provider { algorithm: Algorithm::Sha3_224, side: Source::Candidate, .. }
        ));
    }

    #[test]
    fn test_fatal_error_aborts_run() {
        let reference = Scripted {
            broken: Some((Algorithm::Shake256Xof, ErrorKind::MemoryAllocationFailure)),
            ..scripted(Source::Reference, 1)
        };
        let harness = Harness::new(reference, scripted(Source::Candidate, 2));
        let err = harness.run(&HarnessConfig::default()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::MemoryAllocationFailure));
    }

    #[test]
    fn test_xof_len_reaches_providers() {
        let harness = Harness::new(scripted(Source::Reference, 1), scripted(Source::Candidate, 1));
        let config = HarnessConfig::default().with_xof_len(std::num::NonZeroUsize::new(100).unwrap());
        let outcome = harness.run(&config).unwrap();

        for observation in outcome.observations.iter() {
            let expected = observation.algorithm.output_size(100).unwrap();
            assert_eq!(observation.digest.len(), expected);
        }
    }

    #[test]
    fn test_unsupported_algorithm_is_not_fatal() {
        struct Sha3_256Only;

        impl ErrorType for Sha3_256Only {
            type Error = ErrorKind;
        }

        impl DigestProvider for Sha3_256Only {
            fn source(&self) -> Source {
                Source::Candidate
            }

            fn supported_algorithms(&self) -> &[Algorithm] {
                &[Algorithm::Sha3_256]
            }

            fn compute(&self, _: Algorithm, _: &[u8], _: usize) -> Result<Digest, ErrorKind> {
                Ok(Digest::from([0u8; 32]))
            }
        }

        let harness = Harness::new(scripted(Source::Reference, 1), Sha3_256Only);
        let outcome = harness.run(&HarnessConfig::default()).unwrap();
        assert_eq!(outcome.observations.len(), 2);
        assert_eq!(outcome.failures.len(), 5);
        assert!(outcome.failures.iter().all(|e| e.kind() == Some(ErrorKind::UnsupportedAlgorithm)));
    }
}
