//! Reading and writing quadrature table files.
//!
//! A table file holds one block per order, ascending from 1. Each block is
//! a `#-order <n>` header line, n `<node> <weight>` data lines, and a
//! closing line holding a single `#`. Fields are space separated and
//! floating-point values use the default `f64` representation. The parser
//! treats every line starting with `#` as a separator, so headers and
//! closing lines are handled uniformly and the order of a block is implied
//! by its position: block k must hold exactly k pairs.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use itertools::izip;
use ndarray::Array1;
use thiserror::Error;

use crate::quadrature::{GaussLegendre, QuadratureError};

/// Errors from writing or parsing a table file.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Quadrature(#[from] QuadratureError),

    #[error(
        "Separator or comment line at line {line} arrived before all {order} points of order {order} were read."
    )]
    PrematureSeparator { order: usize, line: usize },

    #[error("Line {line} does not hold a `<node> <weight>` pair.")]
    MalformedRow { line: usize },

    #[error("File ended with an incomplete block for order {order}.")]
    TrailingData { order: usize },
}

/// Name of the table file for a given maximum order.
pub fn file_name(max_order: u32) -> String {
    format!("gauss_quad_points_{max_order}.dat")
}

/// Writes rules for orders `1..=max_order` to `path`, truncating any
/// existing file.
///
/// Orders are written ascending, each as its own block. A failure part-way
/// leaves whatever was already flushed on disk; there is no rollback.
pub fn write<P: AsRef<Path>>(path: P, max_order: u32) -> Result<(), TableError> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    for order in 1..=max_order {
        let rule = GaussLegendre::new(order as usize)?;
        log::debug!("order {order}: computed {} points", rule.order());

        writeln!(out, "#-order {order}")?;
        for (x, w) in izip!(&rule.nodes, &rule.weights) {
            writeln!(out, "{x} {w}")?;
        }
        writeln!(out, "#")?;
    }

    out.flush()?;
    Ok(())
}

/// Quadrature rules for orders `1..=max_order`, parsed from a table file.
#[derive(Debug, Clone)]
pub struct QuadratureTable {
    rules: Vec<GaussLegendre>,
}

impl QuadratureTable {
    /// Parses a table file produced by [`write`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut rules = Vec::new();
        let mut nodes: Vec<f64> = Vec::new();
        let mut weights: Vec<f64> = Vec::new();
        let mut order = 1usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_num = idx + 1;

            if line.is_empty() || line.starts_with('#') {
                // A separator is only legal between blocks.
                if !nodes.is_empty() {
                    return Err(TableError::PrematureSeparator {
                        order,
                        line: line_num,
                    });
                }
                continue;
            }

            let mut fields = line.split_whitespace();
            let (x, w) = match (fields.next(), fields.next(), fields.next()) {
                (Some(x), Some(w), None) => {
                    let x = x
                        .parse::<f64>()
                        .map_err(|_| TableError::MalformedRow { line: line_num })?;
                    let w = w
                        .parse::<f64>()
                        .map_err(|_| TableError::MalformedRow { line: line_num })?;
                    (x, w)
                }
                _ => return Err(TableError::MalformedRow { line: line_num }),
            };
            nodes.push(x);
            weights.push(w);

            if nodes.len() == order {
                rules.push(GaussLegendre {
                    nodes: Array1::from(std::mem::take(&mut nodes)),
                    weights: Array1::from(std::mem::take(&mut weights)),
                });
                order += 1;
            }
        }

        if !nodes.is_empty() {
            return Err(TableError::TrailingData { order });
        }

        log::debug!("loaded table with orders 1..={}", rules.len());
        Ok(Self { rules })
    }

    /// Highest order held by the table.
    pub fn max_order(&self) -> usize {
        self.rules.len()
    }

    /// The order-`order` rule, if the table holds one.
    pub fn rule(&self, order: usize) -> Option<&GaussLegendre> {
        order.checked_sub(1).and_then(|i| self.rules.get(i))
    }
}
