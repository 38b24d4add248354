//! Comma-separated dumps of lattice tables.
//!
//! [`TableWriter`] streams a header line followed by one numeric row per
//! record to any `Write` sink. [`Lattice::write_table`] uses it to dump the
//! precomputed geometry in the layouts named by [`Table`].

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use log::trace;
use smallvec::SmallVec;

use crate::error::LatticeError;
use crate::lattice::Lattice;

/// Writes comma-separated rows to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production code
/// can use `BufWriter<File>`. The header is written immediately on
/// construction.
///
/// # Examples
///
/// ```
/// use bwsl_lattice::TableWriter;
///
/// let mut buf = Vec::new();
/// let mut w = TableWriter::new(&mut buf, ["i", "x0"]).unwrap();
/// w.write_row(&[0], [0.5]).unwrap();
/// w.write_row(&[1], [-1.0]).unwrap();
/// assert_eq!(w.rows_written(), 2);
/// drop(w);
/// assert_eq!(String::from_utf8(buf).unwrap(), "i,x0\n0,0.5\n1,-1\n");
/// ```
pub struct TableWriter<W: Write> {
    writer: W,
    columns: usize,
    rows_written: u64,
}

impl<W: Write> TableWriter<W> {
    /// Create a writer and emit the header line.
    pub fn new<I, S>(mut writer: W, header: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns = 0;
        for name in header {
            if columns > 0 {
                writer.write_all(b",")?;
            }
            writer.write_all(name.as_ref().as_bytes())?;
            columns += 1;
        }
        writer.write_all(b"\n")?;
        Ok(Self {
            writer,
            columns,
            rows_written: 0,
        })
    }

    /// Write one row: integer labels first, then values.
    ///
    /// # Panics
    ///
    /// Panics if the row does not have as many fields as the header. Nothing
    /// is written in that case.
    pub fn write_row<I>(&mut self, labels: &[usize], values: I) -> io::Result<()>
    where
        I: IntoIterator<Item = f64>,
    {
        let values: SmallVec<[f64; 16]> = values.into_iter().collect();
        let fields = labels.len() + values.len();
        assert_eq!(
            fields, self.columns,
            "row has {fields} fields, header has {}",
            self.columns
        );
        for (i, label) in labels.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b",")?;
            }
            write!(self.writer, "{label}")?;
        }
        for (i, value) in values.iter().enumerate() {
            if i > 0 || !labels.is_empty() {
                self.writer.write_all(b",")?;
            }
            write!(self.writer, "{value}")?;
        }
        self.writer.write_all(b"\n")?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of rows written so far, header excluded.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// The lattice tables that can be dumped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    /// `i,x0..`: position of every site.
    Positions,
    /// `i,d0..`: vector from site 0 to every site.
    Vectors,
    /// `i,k0..`: every allowed momentum (no rows under open boundaries).
    Momenta,
    /// `i,a,b,x0..,y0..,d0..`: for every ordered pair, the vectors from site
    /// 0 to `a` and to `b` and from `a` to `b`.
    Pairs,
    /// `a,b,r,d0..`: distance and vector for every ordered pair.
    Distances,
}

impl Table {
    /// All tables in declaration order.
    pub const ALL: [Table; 5] = [
        Table::Positions,
        Table::Vectors,
        Table::Momenta,
        Table::Pairs,
        Table::Distances,
    ];

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Table::Positions => "positions",
            Table::Vectors => "vectors",
            Table::Momenta => "momenta",
            Table::Pairs => "pairs",
            Table::Distances => "distances",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LatticeError::UnknownName {
                what: "table",
                name: s.to_string(),
            })
    }
}

fn axis_columns(prefix: char, dim: usize) -> impl Iterator<Item = String> {
    (0..dim).map(move |i| format!("{prefix}{i}"))
}

impl Lattice {
    /// Dump `table` to `out`, returning the number of data rows written.
    pub fn write_table<W: Write>(&self, table: Table, out: W) -> io::Result<u64> {
        let rows = match table {
            Table::Positions => self.write_positions(out)?,
            Table::Vectors => self.write_vectors(out)?,
            Table::Momenta => self.write_momenta(out)?,
            Table::Pairs => self.write_pairs(out)?,
            Table::Distances => self.write_distances(out)?,
        };
        trace!("wrote {rows} rows of the {table} table");
        Ok(rows)
    }

    /// Dump [`Table::Positions`].
    pub fn write_positions<W: Write>(&self, out: W) -> io::Result<u64> {
        let header = std::iter::once("i".to_string()).chain(axis_columns('x', self.dim()));
        let mut w = TableWriter::new(out, header)?;
        for i in self.grid().sites() {
            w.write_row(&[i], self.position(i).iter().copied())?;
        }
        w.flush()?;
        Ok(w.rows_written())
    }

    /// Dump [`Table::Vectors`].
    pub fn write_vectors<W: Write>(&self, out: W) -> io::Result<u64> {
        let header = std::iter::once("i".to_string()).chain(axis_columns('d', self.dim()));
        let mut w = TableWriter::new(out, header)?;
        for i in self.grid().sites() {
            w.write_row(&[i], self.vector(0, i))?;
        }
        w.flush()?;
        Ok(w.rows_written())
    }

    /// Dump [`Table::Momenta`].
    pub fn write_momenta<W: Write>(&self, out: W) -> io::Result<u64> {
        let header = std::iter::once("i".to_string()).chain(axis_columns('k', self.dim()));
        let mut w = TableWriter::new(out, header)?;
        for k in 0..self.num_momenta() {
            if let Some(m) = self.momentum(k) {
                w.write_row(&[k], m.iter().copied())?;
            }
        }
        w.flush()?;
        Ok(w.rows_written())
    }

    /// Dump [`Table::Pairs`], in pair-index order.
    pub fn write_pairs<W: Write>(&self, out: W) -> io::Result<u64> {
        let dim = self.dim();
        let header = ["i", "a", "b"]
            .into_iter()
            .map(str::to_string)
            .chain(axis_columns('x', dim))
            .chain(axis_columns('y', dim))
            .chain(axis_columns('d', dim));
        let mut w = TableWriter::new(out, header)?;
        let grid = self.grid();
        for p in 0..grid.num_pairs() {
            let (a, b) = grid.individual_indices(p);
            let values = self
                .vector(0, a)
                .into_iter()
                .chain(self.vector(0, b))
                .chain(self.vector(a, b));
            w.write_row(&[p, a, b], values)?;
        }
        w.flush()?;
        Ok(w.rows_written())
    }

    /// Dump [`Table::Distances`], `a` varying slowest.
    pub fn write_distances<W: Write>(&self, out: W) -> io::Result<u64> {
        let header = ["a", "b", "r"]
            .into_iter()
            .map(str::to_string)
            .chain(axis_columns('d', self.dim()));
        let mut w = TableWriter::new(out, header)?;
        for a in self.grid().sites() {
            for b in self.grid().sites() {
                let values = std::iter::once(self.distance(a, b)).chain(self.vector(a, b));
                w.write_row(&[a, b], values)?;
            }
        }
        w.flush()?;
        Ok(w.rows_written())
    }
}
