/*
 * Copyright (c) 2019-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A small module to read networks from ascii art.
//!
//! See [`from_ascii`] for a detailed explanation.
//!
//! *Warning*: the main purpose of this module is its use in
//! documentation comments and test cases. It is not meant for
//! production use.

use crate::builder::{Buildable, Builder};
use crate::network::Network;
use crate::traits::{Directed, GraphType};

use std::collections::{HashMap, HashSet, VecDeque};
use std::error;
use std::num::ParseIntError;
use std::str::{from_utf8, Utf8Error};

/// Error reading an ascii-art network.
#[derive(Debug)]
pub enum Error {
    /// An invalid character appeared in the ascii text.
    InvalidCharacter(char),
    /// Parsing a number (arc capacity) failed.
    InvalidNumber(Box<dyn error::Error>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Error::InvalidCharacter(c) => write!(fmt, "Invalid character: {}", c),
            Error::InvalidNumber(e) => write!(fmt, "Invalid number: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseIntError> for Error {
    fn from(e: ParseIntError) -> Error {
        Error::InvalidNumber(e.into())
    }
}

impl From<Utf8Error> for Error {
    fn from(e: Utf8Error) -> Error {
        Error::InvalidNumber(e.into())
    }
}

/// The data returned by `from_ascii`.
pub struct Data<'a, G>
where
    G: GraphType<'a>,
{
    /// The network.
    pub graph: G,
    /// Map from character to node for named nodes.
    pub nodes: HashMap<char, G::Node>,
    /// The arc capacities indexed by edge id.
    pub capacities: Vec<usize>,
}

/// Create a network from an ascii art drawing with arc capacities.
///
/// Parses an ascii-art drawing and generates the corresponding
/// network. Nodes are `*` or letters (except for `v` which is used to
/// draw arrow heads), arcs are strokes of `-`, `|`, `/` and `\`
/// characters. Strokes may cross.
///
/// Capacities are non-negative numbers along the strokes. Arcs
/// without explicit capacity receive the capacity 0. The capacities
/// are returned in a vector indexed by `g.edge_id`.
///
/// A stroke ending in one of the characters `<`, `>`, `^`, `v` or `@`
/// in front of a node is directed towards that node and becomes a
/// single arc (the `@` can be used in place of any of the other head
/// characters and is the only head for diagonal strokes). A stroke
/// without a head becomes a pair of opposite arcs with the same
/// capacity, one for each direction.
///
/// ```
/// use rs_flow::traits::*;
/// use rs_flow::string::{from_ascii, Data};
/// use rs_flow::Net;
///
/// let Data { graph: g, capacities, nodes } = from_ascii::<Net>(r"
///      *---3-->b
///     @         \
///    /           5
///   4             \
///  /               @
/// s----2-->a---7--->t").unwrap();
///
/// let s = nodes[&'s'];
/// let t = nodes[&'t'];
///
/// assert_eq!(g.num_nodes(), 5);
/// assert_eq!(g.num_edges(), 5);
/// assert_eq!(g.outedges(s).count(), 2);
/// assert_eq!(g.inedges(s).count(), 0);
/// assert_eq!(g.outedges(t).count(), 0);
/// assert_eq!(g.inedges(t).count(), 2);
/// assert_eq!(g.outedges(s).map(|(e, _)| capacities[g.edge_id(e)]).sum::<usize>(), 6);
/// ```
///
/// Strokes without heads are useful for symmetric networks. Each one
/// contributes two arcs, so every node of the following network has
/// as many outgoing as incoming arcs.
///
/// ```
/// use rs_flow::traits::*;
/// use rs_flow::string::{from_ascii, Data};
/// use rs_flow::Net;
///
/// let Data { graph: g, capacities, .. } = from_ascii::<Net>(r"
///    a--3--b
///    |     |
///    2     4
///    |     |
///    c--1--d").unwrap();
///
/// assert_eq!(g.num_nodes(), 4);
/// assert_eq!(g.num_edges(), 8);
/// for u in g.nodes() {
///     assert_eq!(g.outedges(u).count(), 2);
///     assert_eq!(g.inedges(u).count(), 2);
/// }
/// assert_eq!(capacities.iter().sum::<usize>(), 2 * (3 + 2 + 4 + 1));
/// ```
///
/// Nodes are created (and thus numbered) row-wise. Nodes that have a
/// character label can be accessed through the `nodes` field of the
/// returned data. The arcs are created in the order in which the
/// traces from their tail nodes complete, which is deterministic but
/// otherwise unspecified.
///
/// *Note*: this function is meant to be used in test cases, it should
/// not be used in production code.
#[allow(clippy::cognitive_complexity)]
pub fn from_ascii<G>(text: &str) -> Result<Data<G>, Error>
where
    G: Buildable,
    G: for<'a> GraphType<'a, Node = <<G as Buildable>::Builder as Builder>::Node>,
{
    let lines = text.lines().map(|l| l.as_bytes()).collect::<Vec<_>>();

    // compute numbers of rows and columns
    let nrows = lines.len();
    let ncols = lines.iter().map(|l| l.len()).max().unwrap_or(0);

    for line in &lines {
        for &ch in line.iter() {
            if !is_valid(ch) {
                return Err(Error::InvalidCharacter(ch as char));
            }
        }
    }

    // cells outside the drawing read as blanks
    let at = |i: usize, j: usize| -> u8 { lines.get(i).and_then(|l| l.get(j)).copied().unwrap_or(b' ') };

    let mut h = Network::<u32>::new_builder();
    let hnodes = (0..nrows)
        .map(|_| (0..ncols).map(|_| h.add_node()).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let mut hweights = HashMap::new();

    // insert horizontal stroke connections
    for i in 0..nrows {
        for j in 1..ncols {
            if (at(i, j - 1) == b'-' && is_node_or(at(i, j), b"/\\-"))
                || (at(i, j) == b'-' && is_node_or(at(i, j - 1), b"/\\-"))
            {
                h.add_edge(hnodes[i][j - 1], hnodes[i][j]);
                h.add_edge(hnodes[i][j], hnodes[i][j - 1]);
            }
        }
    }

    // insert vertical stroke connections
    for j in 0..ncols {
        for i in 1..nrows {
            if (at(i - 1, j) == b'|' && is_node_or(at(i, j), b"/\\|"))
                || (at(i, j) == b'|' && is_node_or(at(i - 1, j), b"/\\|"))
            {
                h.add_edge(hnodes[i - 1][j], hnodes[i][j]);
                h.add_edge(hnodes[i][j], hnodes[i - 1][j]);
            }
        }
    }

    // insert main diagonal stroke connections
    for j in 1..ncols {
        for i in 1..nrows {
            if (at(i - 1, j - 1) == b'\\' && is_node_or(at(i, j), b"\\-|"))
                || (at(i, j) == b'\\' && is_node_or(at(i - 1, j - 1), b"\\-|"))
            {
                h.add_edge(hnodes[i - 1][j - 1], hnodes[i][j]);
                h.add_edge(hnodes[i][j], hnodes[i - 1][j - 1]);
            }
        }
    }

    // insert secondary diagonal stroke connections
    for j in 0..ncols {
        for i in 1..nrows {
            if (at(i - 1, j + 1) == b'/' && is_node_or(at(i, j), b"/-|*"))
                || (at(i, j) == b'/' && is_node_or(at(i - 1, j + 1), b"/-|*"))
            {
                h.add_edge(hnodes[i - 1][j + 1], hnodes[i][j]);
                h.add_edge(hnodes[i][j], hnodes[i - 1][j + 1]);
            }
        }
    }

    // insert the arrow heads >, <, ^, v or @. Each head is a one-way
    // connection from the stroke to the node it points at, so the
    // trace of a directed stroke can only be completed from its tail.
    for i in 0..nrows {
        for j in 0..ncols {
            let hd = at(i, j);
            if (hd == b'@' || hd == b'>') && j > 0 && at(i, j - 1) == b'-' && is_node(at(i, j + 1)) {
                h.add_edge(hnodes[i][j - 1], hnodes[i][j + 1]);
            }
            if (hd == b'@' || hd == b'<') && j > 0 && is_node(at(i, j - 1)) && at(i, j + 1) == b'-' {
                h.add_edge(hnodes[i][j + 1], hnodes[i][j - 1]);
            }
            if (hd == b'@' || hd == b'^') && i > 0 && is_node(at(i - 1, j)) && at(i + 1, j) == b'|' {
                h.add_edge(hnodes[i + 1][j], hnodes[i - 1][j]);
            }
            if (hd == b'@' || hd == b'v') && i > 0 && at(i - 1, j) == b'|' && is_node(at(i + 1, j)) {
                h.add_edge(hnodes[i - 1][j], hnodes[i + 1][j]);
            }
            // diagonal heads
            if hd == b'@' && i > 0 && j > 0 {
                if at(i - 1, j - 1) == b'\\' && is_node(at(i + 1, j + 1)) {
                    h.add_edge(hnodes[i - 1][j - 1], hnodes[i + 1][j + 1]);
                }
                if is_node(at(i - 1, j - 1)) && at(i + 1, j + 1) == b'\\' {
                    h.add_edge(hnodes[i + 1][j + 1], hnodes[i - 1][j - 1]);
                }
                if at(i - 1, j + 1) == b'/' && is_node(at(i + 1, j - 1)) {
                    h.add_edge(hnodes[i - 1][j + 1], hnodes[i + 1][j - 1]);
                }
                if is_node(at(i - 1, j + 1)) && at(i + 1, j - 1) == b'/' {
                    h.add_edge(hnodes[i + 1][j - 1], hnodes[i - 1][j + 1]);
                }
            }
        }
    }

    let get_weight = |i: usize, j: usize| -> Result<usize, Error> {
        let mut beg = j;
        while beg > 0 && at(i, beg - 1).is_ascii_digit() {
            beg -= 1;
        }
        let mut end = j;
        while at(i, end).is_ascii_digit() {
            end += 1;
        }
        Ok(from_utf8(&lines[i][beg..end])?.parse::<usize>()?)
    };

    // insert connections jumping over crossings and capacity digits
    for j in 0..ncols {
        for i in 0..nrows {
            // horizontal
            if j > 0
                && at(i, j - 1) == b'-'
                && at(i, j + 1) == b'-'
                && (at(i, j) == b'|' || at(i, j).is_ascii_digit())
            {
                let e = h.add_edge(hnodes[i][j - 1], hnodes[i][j + 1]);
                let f = h.add_edge(hnodes[i][j + 1], hnodes[i][j - 1]);
                if at(i, j) != b'|' {
                    let w = get_weight(i, j)?;
                    hweights.insert(e, w);
                    hweights.insert(f, w);
                }
            }
            // vertical
            if i > 0
                && at(i - 1, j) == b'|'
                && at(i + 1, j) == b'|'
                && (at(i, j) == b'-' || at(i, j).is_ascii_digit())
            {
                let e = h.add_edge(hnodes[i - 1][j], hnodes[i + 1][j]);
                let f = h.add_edge(hnodes[i + 1][j], hnodes[i - 1][j]);
                if at(i, j) != b'-' {
                    let w = get_weight(i, j)?;
                    hweights.insert(e, w);
                    hweights.insert(f, w);
                }
            }
            // main diagonal
            if i > 0
                && j > 0
                && at(i - 1, j - 1) == b'\\'
                && at(i + 1, j + 1) == b'\\'
                && (at(i, j) == b'/' || at(i, j).is_ascii_digit())
            {
                let e = h.add_edge(hnodes[i - 1][j - 1], hnodes[i + 1][j + 1]);
                let f = h.add_edge(hnodes[i + 1][j + 1], hnodes[i - 1][j - 1]);
                if at(i, j) != b'/' {
                    let w = get_weight(i, j)?;
                    hweights.insert(e, w);
                    hweights.insert(f, w);
                }
            }
            // secondary diagonal
            if i > 0
                && j > 0
                && at(i - 1, j + 1) == b'/'
                && at(i + 1, j - 1) == b'/'
                && (at(i, j) == b'\\' || at(i, j).is_ascii_digit())
            {
                let e = h.add_edge(hnodes[i - 1][j + 1], hnodes[i + 1][j - 1]);
                let f = h.add_edge(hnodes[i + 1][j - 1], hnodes[i - 1][j + 1]);
                if at(i, j) != b'\\' {
                    let w = get_weight(i, j)?;
                    hweights.insert(e, w);
                    hweights.insert(f, w);
                }
            }
        }
    }

    // insert connections jumping over multi-digit horizontal numbers
    for i in 0..nrows {
        for j in 1..ncols {
            if at(i, j - 1) == b'-' && at(i, j).is_ascii_digit() {
                let mut k = j;
                while at(i, k).is_ascii_digit() {
                    k += 1;
                }
                if k >= j + 2 && at(i, k) == b'-' {
                    let e = h.add_edge(hnodes[i][j - 1], hnodes[i][k]);
                    let f = h.add_edge(hnodes[i][k], hnodes[i][j - 1]);
                    let w = from_utf8(&lines[i][j..k])?.parse::<usize>()?;
                    hweights.insert(e, w);
                    hweights.insert(f, w);
                }
            }
        }
    }

    let h = h.into_graph();

    // construct the network from the cell graph
    let mut b = G::Builder::new();
    let mut bnodes = HashMap::new();
    let mut scan = vec![];
    let mut capacities = vec![];
    let mut namednodes = HashMap::new();

    for i in 0..nrows {
        for j in 0..lines[i].len() {
            if lines[i][j] == b'*' {
                let u = b.add_node();
                bnodes.insert(hnodes[i][j], u);
                scan.push((hnodes[i][j], u));
            } else if is_node(lines[i][j]) {
                let u = b.add_node();
                namednodes.insert(lines[i][j] as char, u);
                bnodes.insert(hnodes[i][j], u);
                scan.push((hnodes[i][j], u));
            }
        }
    }

    // Trace the strokes from each node cell in row-major order. Each
    // trace reaching another node cell contributes one arc with the
    // accumulated capacity. The two traces of an undirected stroke
    // complete from both ends and yield a pair of opposite arcs, a
    // directed stroke completes only from its tail.
    for &(h_u, u) in &scan {
        let mut queue = VecDeque::new();
        let mut seen = HashSet::new();
        queue.push_back((h_u, 0));
        seen.insert(h_u);
        while let Some((h_v, w)) = queue.pop_front() {
            if let Some(&v) = if h_v != h_u { bnodes.get(&h_v) } else { None } {
                // v is connected to u, add the arc
                b.add_edge(u, v);
                capacities.push(w);
            } else {
                // otherwise continue the trace
                for (e, h_w) in h.outedges(h_v) {
                    if !seen.contains(&h_w) {
                        seen.insert(h_w);
                        queue.push_back((h_w, w + hweights.get(&e).unwrap_or(&0)));
                    }
                }
            }
        }
    }

    Ok(Data {
        graph: b.into_graph(),
        nodes: namednodes,
        capacities,
    })
}

fn is_node(ch: u8) -> bool {
    ch == b'*' || (ch.is_ascii_alphabetic() && ch != b'v')
}

fn is_node_or(ch: u8, chars: &[u8]) -> bool {
    is_node(ch) || chars.contains(&ch)
}

fn is_valid(ch: u8) -> bool {
    ch == b' ' || ch.is_ascii_alphanumeric() || b"-|/\\<>^@*".contains(&ch)
}
