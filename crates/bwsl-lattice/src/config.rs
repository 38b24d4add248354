//! Lattice configuration, validation, and error types.
//!
//! [`LatticeConfig`] names a canonical Bravais lattice, the grid extents and
//! the boundary condition. [`validate()`](LatticeConfig::validate) checks
//! structural invariants without building any tables;
//! [`build()`](LatticeConfig::build) validates and constructs the
//! [`Lattice`].

use std::error::Error;
use std::fmt;

use crate::boundary::Boundaries;
use crate::bravais::BravaisKind;
use crate::error::LatticeError;
use crate::grid::HyperCubicGrid;
use crate::lattice::Lattice;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`LatticeConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid or lattice construction failed.
    Lattice(LatticeError),
    /// The number of extents does not match the lattice kind.
    WrongDimension {
        /// The configured lattice kind.
        kind: BravaisKind,
        /// Dimensionality of that kind.
        expected: usize,
        /// Number of extents supplied.
        got: usize,
    },
    /// A size string could not be parsed.
    InvalidSize {
        /// The offending input.
        input: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::WrongDimension {
                kind,
                expected,
                got,
            } => write!(f, "{kind} lattice needs {expected} extents, got {got}"),
            Self::InvalidSize { input } => write!(
                f,
                "invalid size '{input}': expected comma-separated positive integers"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

/// Parse extents written as `"4,4"` or `"8x8x8"`.
///
/// Whitespace around each extent is ignored. Zero extents parse and are
/// rejected later by [`LatticeConfig::validate`].
pub fn parse_size(input: &str) -> Result<Vec<usize>, ConfigError> {
    let invalid = || ConfigError::InvalidSize {
        input: input.to_string(),
    };
    if input.trim().is_empty() {
        return Err(invalid());
    }
    input
        .split(|c: char| c == ',' || c == 'x')
        .map(|s| s.trim().parse::<usize>().map_err(|_| invalid()))
        .collect()
}

// ── LatticeConfig ──────────────────────────────────────────────────

/// Complete description of a finite lattice built on a canonical Bravais
/// lattice.
///
/// # Examples
///
/// ```
/// use bwsl_lattice::{BravaisKind, Boundaries, LatticeConfig};
///
/// let config = LatticeConfig::new(BravaisKind::Square, vec![4, 4]);
/// assert_eq!(config.boundaries, Boundaries::Closed);
/// let lattice = config.build().unwrap();
/// assert_eq!(lattice.num_sites(), 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeConfig {
    /// Which canonical Bravais lattice to realise.
    pub kind: BravaisKind,
    /// Extent of the grid along each axis.
    pub size: Vec<usize>,
    /// Boundary condition. Default: closed.
    pub boundaries: Boundaries,
}

impl LatticeConfig {
    /// Configuration with closed boundaries.
    pub fn new(kind: BravaisKind, size: Vec<usize>) -> Self {
        Self {
            kind,
            size,
            boundaries: Boundaries::default(),
        }
    }

    /// Replace the boundary condition.
    pub fn with_boundaries(mut self, boundaries: Boundaries) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Validate all structural invariants.
    ///
    /// This is a pure validation pass: it builds no lattice tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let expected = self.kind.lattice().dim();
        if self.size.len() != expected {
            return Err(ConfigError::WrongDimension {
                kind: self.kind,
                expected,
                got: self.size.len(),
            });
        }
        HyperCubicGrid::new(&self.size, self.boundaries)?;
        Ok(())
    }

    /// Validate and build the lattice.
    pub fn build(&self) -> Result<Lattice, ConfigError> {
        self.validate()?;
        Ok(Lattice::new(self.kind.lattice(), &self.size, self.boundaries)?)
    }
}
