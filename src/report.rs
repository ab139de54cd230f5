//! The line-oriented text report.
//!
//! Every line starts with a tag followed by space separated values:
//!
//! ```text
//! APART: <i> <j> <gap>
//! SMALLEST APART: <i> <j> <gap>
//! CLOSE: <i> <front> <back> <left> <right>
//! CLOSEST: <front-idx> <front> <back-idx> <back> <left-idx> <left> <right-idx> <right>
//! ```
//!
//! A result that doesn't exist is written as `undefined` in place of each of its values.

use crate::analysis::{Analyzer, EdgeProximity, EdgeResult, PairGap};
use crate::boundary::EdgeClearances;
use std::fmt::{self, Display};
use std::io::{self, Write};

const UNDEFINED: &str = "undefined";

/// Writes the full report: every pair, the closest pair, every obstacle's clearances
/// and the closest obstacle to each edge.
pub fn write_report(out: &mut impl Write, analyzer: &Analyzer) -> io::Result<()> {
    let closest = analyzer.scan_pairs(|pair| writeln!(out, "APART: {}", PairLine(Some(pair))))?;
    writeln!(out, "SMALLEST APART: {}", PairLine(closest.as_ref()))?;

    let proximity = analyzer.scan_edges(|idx, clearances| {
        writeln!(out, "CLOSE: {} {}", idx, ClearanceLine(clearances))
    })?;
    writeln!(out, "CLOSEST: {}", ProximityLine(&proximity))?;
    Ok(())
}

struct PairLine<'a>(Option<&'a PairGap>);

struct ClearanceLine<'a>(&'a EdgeClearances);

struct ProximityLine<'a>(&'a EdgeProximity);

impl Display for PairLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(pair) => write!(f, "{} {} {}", pair.i, pair.j, pair.gap),
            None => write!(f, "{0} {0} {0}", UNDEFINED),
        }
    }
}

impl Display for ClearanceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.0.iter().map(|(_, clearance)| clearance);
        write!(f, "{}", itertools::join(values, " "))
    }
}

impl Display for ProximityLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.0.iter().map(|(_, result)| match result {
            Some(EdgeResult {
                obstacle_index,
                distance,
            }) => format!("{} {}", obstacle_index, distance),
            None => format!("{0} {0}", UNDEFINED),
        });
        write!(f, "{}", itertools::join(values, " "))
    }
}
