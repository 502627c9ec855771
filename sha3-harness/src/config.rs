//! Run configuration and its command-line front end.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use digest_traits::Algorithm;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::HarnessError;

/// Input of the canonical run.
pub const DEFAULT_INPUT: &[u8] = b"foo bar";

/// SHAKE output length of the canonical run, in bytes.
pub const DEFAULT_XOF_LEN: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(len) => len,
    None => panic!("default XOF length must be non-zero"),
};

/// What to hash, how long the XOF outputs are, and which algorithms to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub input: Vec<u8>,
    pub xof_len: NonZeroUsize,
    /// Subset to run. Order and duplicates are irrelevant; see
    /// [`HarnessConfig::algorithms`].
    pub algorithms: Vec<Algorithm>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_vec(),
            xof_len: DEFAULT_XOF_LEN,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl HarnessConfig {
    pub fn with_input(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_xof_len(mut self, xof_len: NonZeroUsize) -> Self {
        self.xof_len = xof_len;
        self
    }

    /// Configured algorithms in report order, each at most once.
    pub fn algorithms(&self) -> impl Iterator<Item = Algorithm> + '_ {
        Algorithm::ALL
            .into_iter()
            .filter(move |algorithm| self.algorithms.contains(algorithm))
    }
}

/// Input bytes given as a hex string on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

fn parse_hex(s: &str) -> Result<HexBytes, String> {
    hex::decode(s.trim()).map(HexBytes).map_err(|e| format!("invalid hex input: {e}"))
}

fn parse_xof_len(s: &str) -> Result<NonZeroUsize, String> {
    let len: usize = s.parse().map_err(|e| format!("`{s}` is not a byte count: {e}"))?;
    NonZeroUsize::new(len).ok_or_else(|| "XOF output length must be at least 1 byte".to_string())
}

/// Compare SHA-3 digests from a reference and a candidate implementation.
///
/// Prints one CSV row per (algorithm, source) to stdout: `algo,source,digest`.
#[derive(Debug, Parser)]
#[command(name = "sha3-harness", version, about, long_about = None)]
pub struct Cli {
    /// Input as UTF-8 text [default: "foo bar"].
    #[arg(long, env = "SHA3_HARNESS_DATA", group = "input")]
    pub data: Option<String>,

    /// Input as hex-encoded bytes.
    #[arg(long, group = "input", value_name = "HEX", value_parser = parse_hex)]
    pub hex: Option<HexBytes>,

    /// Read input bytes from a file.
    #[arg(long, group = "input", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Hash LEN pseudo-random bytes.
    #[arg(long, group = "input", value_name = "LEN")]
    pub random: Option<usize>,

    /// Seed for --random [default: 0].
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// SHAKE128/SHAKE256 output length in bytes.
    #[arg(long, env = "SHA3_HARNESS_XOF_LEN", default_value = "32", value_parser = parse_xof_len)]
    pub xof_len: NonZeroUsize,

    /// Run only this algorithm (repeatable). Rows keep the canonical order.
    #[arg(long = "algo", value_name = "NAME")]
    pub algorithms: Vec<Algorithm>,

    /// More log output on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    fn input(&self) -> Result<Vec<u8>, HarnessError> {
        if let Some(data) = &self.data {
            return Ok(data.as_bytes().to_vec());
        }
        if let Some(HexBytes(bytes)) = &self.hex {
            return Ok(bytes.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read(path).map_err(|source| HarnessError::Input { path: path.clone(), source });
        }
        if let Some(len) = self.random {
            let mut bytes = Vec::new();
            bytes
                .try_reserve_exact(len)
                .map_err(|_| HarnessError::Config(format!("cannot allocate {len} bytes of random input")))?;
            bytes.resize(len, 0);
            StdRng::seed_from_u64(self.seed.unwrap_or(0)).fill_bytes(&mut bytes);
            return Ok(bytes);
        }
        Ok(DEFAULT_INPUT.to_vec())
    }

    pub fn into_config(self) -> Result<HarnessConfig, HarnessError> {
        let input = self.input()?;
        let algorithms = if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms
        };
        tracing::debug!(input_len = input.len(), xof_len = self.xof_len.get(), "configuration loaded");
        Ok(HarnessConfig { input, xof_len: self.xof_len, algorithms })
    }
}
