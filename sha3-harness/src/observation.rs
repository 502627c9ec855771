//! Order-preserving collection of digest observations and its CSV rendering.

use std::io::{self, Write};

use digest_traits::{Algorithm, Digest, Source};

/// Column names of the report header.
pub const HEADER: [&str; 3] = ["algo", "source", "digest"];

/// One digest computation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub algorithm: Algorithm,
    pub source: Source,
    pub digest: Digest,
}

/// Adjacent reference/candidate rows for one algorithm.
#[derive(Debug, Clone, Copy)]
pub struct Pair<'a> {
    pub algorithm: Algorithm,
    pub reference: &'a Digest,
    pub candidate: &'a Digest,
}

impl Pair<'_> {
    pub fn matches(&self) -> bool {
        self.reference == self.candidate
    }
}

/// Append-only, insertion-ordered sequence of observations.
///
/// No validation, deduplication or sorting happens here: rows come out of
/// [`render`](Self::render) exactly as they went in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ObservationSet {
    rows: Vec<Observation>,
}

impl ObservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, algorithm: Algorithm, source: Source, digest: Digest) {
        self.rows.push(Observation { algorithm, source, digest });
    }

    /// Appends the reference row, then the candidate row.
    pub fn append_pair(&mut self, algorithm: Algorithm, reference: Digest, candidate: Digest) {
        self.rows.reserve(2);
        self.append(algorithm, Source::Reference, reference);
        self.append(algorithm, Source::Candidate, candidate);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.rows.iter()
    }

    /// Reference/candidate pairs, for rows laid out the way the driver
    /// appends them. Rows that do not form such a pair are skipped.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<'_>> + '_ {
        self.rows.chunks_exact(2).filter_map(|rows| match rows {
            [r, c]
                if r.algorithm == c.algorithm
                    && r.source == Source::Reference
                    && c.source == Source::Candidate =>
            {
                Some(Pair { algorithm: r.algorithm, reference: &r.digest, candidate: &c.digest })
            }
            _ => None,
        })
    }

    /// Writes the header and one row per observation, digests in lowercase hex.
    pub fn render<W: Write>(&self, mut sink: W) -> io::Result<()> {
        writeln!(sink, "{}", HEADER.join(","))?;
        for row in &self.rows {
            writeln!(sink, "{},{},{}", row.algorithm, row.source, row.digest.to_hex())?;
        }
        sink.flush()
    }

    pub fn render_to_string(&self) -> String {
        let mut out = Vec::with_capacity(32 + self.rows.len() * 96);
        self.render(&mut out).expect("writing into a Vec cannot fail");
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(report: &str) -> Vec<(String, String, String)> {
        report
            .lines()
            .skip(1)
            .map(|line| {
                let cols: Vec<&str> = line.split(',').collect();
                assert_eq!(cols.len(), 3, "malformed row {line:?}");
                (cols[0].to_string(), cols[1].to_string(), cols[2].to_string())
            })
            .collect()
    }

    #[test]
    fn test_empty_set_renders_header_only() {
        let set = ObservationSet::new();
        assert!(set.is_empty());
        assert_eq!(set.render_to_string(), "algo,source,digest\n");
    }

    #[test]
    fn test_rows_keep_insertion_order() {
        let mut set = ObservationSet::new();
        set.append(Algorithm::Sha3_512, Source::Candidate, Digest::from([0xff]));
        set.append(Algorithm::Shake128Xof, Source::Reference, Digest::from([0x01, 0x02]));
        set.append(Algorithm::Sha3_512, Source::Candidate, Digest::from([0xff]));

        assert_eq!(
            set.render_to_string(),
            "algo,source,digest\n\
             sha3-512,candidate,ff\n\
             shake128-xof,reference,0102\n\
             sha3-512,candidate,ff\n"
        );
    }

    #[test]
    fn test_no_length_validation() {
        let mut set = ObservationSet::new();
        set.append(Algorithm::Sha3_256, Source::Reference, Digest::from(Vec::new()));
        assert_eq!(set.len(), 1);
        assert_eq!(set.render_to_string(), "algo,source,digest\nsha3-256,reference,\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut set = ObservationSet::new();
        set.append_pair(Algorithm::Sha3_224, Digest::from([1, 2]), Digest::from([3, 4]));
        assert_eq!(set.render_to_string(), set.render_to_string());
    }

    #[test]
    fn test_pairs() {
        let mut set = ObservationSet::new();
        set.append_pair(Algorithm::Sha3_224, Digest::from([1]), Digest::from([1]));
        set.append_pair(Algorithm::Sha3_256, Digest::from([1]), Digest::from([0]));

        let pairs: Vec<_> = set.pairs().map(|p| (p.algorithm, p.matches())).collect();
        assert_eq!(pairs, [(Algorithm::Sha3_224, true), (Algorithm::Sha3_256, false)]);

        let mut loose = ObservationSet::new();
        loose.append(Algorithm::Sha3_224, Source::Candidate, Digest::from([1]));
        loose.append(Algorithm::Sha3_224, Source::Reference, Digest::from([1]));
        assert_eq!(loose.pairs().count(), 0);
    }

    fn observation() -> impl Strategy<Value = (Algorithm, Source, Vec<u8>)> {
        (
            proptest::sample::select(Algorithm::ALL.to_vec()),
            proptest::sample::select(vec![Source::Reference, Source::Candidate]),
            proptest::collection::vec(any::<u8>(), 0..80),
        )
    }

    proptest! {
        #[test]
        fn rendered_report_round_trips(rows in proptest::collection::vec(observation(), 0..24)) {
            let mut set = ObservationSet::new();
            for (algorithm, source, digest) in &rows {
                set.append(*algorithm, *source, Digest::from(digest.clone()));
            }

            let report = set.render_to_string();
            prop_assert_eq!(report.lines().next(), Some("algo,source,digest"));

            let parsed = parse(&report);
            prop_assert_eq!(parsed.len(), rows.len());
            for ((algorithm, source, digest), (a, s, d)) in rows.iter().zip(&parsed) {
                prop_assert_eq!(a.parse::<Algorithm>().unwrap(), *algorithm);
                prop_assert_eq!(s, source.name());
                prop_assert_eq!(hex::decode(d).unwrap(), digest.clone());
                prop_assert_eq!(d, &d.to_lowercase());
            }
        }
    }
}
