// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! This module implements the max flow algorithm of Dinitz.
//!
//! The algorithm works in phases. Each phase computes the BFS
//! distance ("level") of every node from the source in the residual
//! network and then augments along shortest paths until every
//! source-sink path in this level graph contains a saturated edge.
//! Only then are the levels recomputed. The sink's level strictly
//! increases from phase to phase, so the number of phases is at most
//! the number of nodes.
//!
//! # Example
//!
//! ```
//! use rs_flow::traits::*;
//! use rs_flow::dinitz::dinitz;
//! use rs_flow::Net;
//! use rs_flow::string::{Data, from_ascii};
//!
//! let Data { graph: g, capacities: upper, nodes } = from_ascii::<Net>(r"
//!      a---3-->b
//!     @|        \
//!    / |         4
//!   5  2          \
//!  /   |           @
//! s    |            t
//!  \   |           @
//!   4  |          /
//!    \ |         5
//!     @v        /
//!      c---4-->d
//!     ").unwrap();
//!
//! let s = nodes[&'s'];
//! let t = nodes[&'t'];
//! let a = nodes[&'a'];
//! let c = nodes[&'c'];
//!
//! let (value, flow, mut mincut) = dinitz(&g, s, t, |e| upper[e.index()]);
//!
//! assert_eq!(value, 7);
//! assert!(flow.iter().all(|&(e, f)| f >= 0 && f <= upper[e.index()]));
//! assert!(g.nodes().filter(|&u| u != s && u != t).all(|u| {
//!     g.outedges(u).map(|(e,_)| flow[g.edge_id(e)].1).sum::<usize>() ==
//!     g.inedges(u).map(|(e,_)| flow[g.edge_id(e)].1).sum::<usize>()
//! }));
//!
//! mincut.sort_by_key(|u| u.index());
//! assert_eq!(mincut, vec![a, s, c]);
//! ```
//!
//! A solver instance can be reused and bounded by a cutoff value. A
//! run stopped by the cutoff reports `Termination::Cutoff` and leaves
//! a valid, but possibly non-maximum flow:
//!
//! ```
//! use rs_flow::traits::*;
//! use rs_flow::dinitz::{Dinitz, Termination};
//! use rs_flow::Net;
//! use rs_flow::string::{Data, from_ascii};
//!
//! let Data { graph: g, capacities: upper, nodes } =
//!     from_ascii::<Net>("s---3-->a---1-->t").unwrap();
//!
//! let s = nodes[&'s'];
//! let t = nodes[&'t'];
//!
//! let mut df = Dinitz::new(&g);
//! df.solve(s, t, |e| upper[e.index()]);
//! assert_eq!(df.value(), 1);
//! // the final level graph does not reach the sink anymore
//! assert_eq!(df.level(t), None);
//!
//! assert_eq!(df.solve_cutoff(s, t, |e| upper[e.index()], 5), Termination::Maximum);
//! assert_eq!(df.value(), 1);
//!
//! assert_eq!(df.solve_cutoff(s, t, |e| upper[e.index()], 1), Termination::Cutoff);
//! assert_eq!(df.value(), 1);
//! assert_eq!(df.level(t), Some(2));
//! ```

use crate::traits::IndexDigraph;

use std::cmp::min;
use std::collections::VecDeque;

use crate::num::traits::NumAssign;

/// The way a run of the algorithm terminated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// No augmenting path was left. The computed flow is a maximum flow.
    Maximum,
    /// The cutoff value was reached. The computed flow is feasible but
    /// possibly not maximum.
    Cutoff,
}

/// The Dinitz max-flow algorithm.
pub struct Dinitz<'a, G, F>
where
    G: 'a + IndexDigraph<'a>,
{
    g: &'a G,
    neighs: Vec<Vec<(usize, usize)>>,
    levels: Vec<usize>,
    parents: Vec<(usize, usize)>,
    residual: Vec<F>,
    queue: VecDeque<usize>,
    value: F,
}

impl<'a, G, F> Dinitz<'a, G, F>
where
    G: IndexDigraph<'a>,
    F: NumAssign + Ord + Copy,
{
    /// Create a new Dinitz algorithm instance for a graph.
    pub fn new(g: &'a G) -> Self {
        Dinitz {
            g,
            neighs: g
                .nodes()
                .map(|u| {
                    g.outedges(u)
                        .map(|(e, v)| (g.edge_id(e) << 1, g.node_id(v)))
                        .chain(g.inedges(u).map(|(e, v)| ((g.edge_id(e) << 1) | 1, g.node_id(v))))
                        .collect()
                })
                .collect(),
            levels: vec![g.num_nodes(); g.num_nodes()],
            parents: vec![(usize::max_value(), usize::max_value()); g.num_nodes()],
            residual: vec![F::zero(); g.num_edges() * 2],
            queue: VecDeque::with_capacity(g.num_nodes()),
            value: F::zero(),
        }
    }

    /// Return the underlying graph.
    pub fn as_graph(&self) -> &'a G {
        self.g
    }

    /// Return the value of the latest computed flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the flow value on edge `e`.
    pub fn flow(&self, e: G::Edge) -> F {
        self.residual[(self.g.edge_id(e) << 1) | 1]
    }

    /// Return the level of node `u` in the final level graph.
    ///
    /// This is the BFS distance from the source in the residual
    /// network of the last search. Nodes that are not reachable over
    /// edges with positive residual capacity have no level. After a
    /// complete run the sink has no level.
    pub fn level(&self, u: G::Node) -> Option<usize> {
        let d = self.levels[self.g.node_id(u)];
        if d < self.levels.len() {
            Some(d)
        } else {
            None
        }
    }

    /// Solve the maxflow problem.
    ///
    /// The method computes a maximum flow from the source node `src`
    /// to the sink node `snk` with the given `upper` capacity bounds
    /// on the edges.
    ///
    /// The method panics if `src` and `snk` are the same node.
    pub fn solve<Us>(&mut self, src: G::Node, snk: G::Node, upper: Us)
    where
        Us: Fn(G::Edge) -> F,
    {
        self.run(src, snk, upper, None);
    }

    /// Solve the maxflow problem with a cutoff value.
    ///
    /// This is the same as `solve` except that the computation stops
    /// as soon as the accumulated flow value reaches `cutoff`. The
    /// returned state says whether the run ended because no
    /// augmenting path was left (the flow is maximum) or because the
    /// cutoff was reached (the flow is feasible but possibly not
    /// maximum). The flow satisfies the capacity and conservation
    /// constraints in both cases.
    pub fn solve_cutoff<Us>(&mut self, src: G::Node, snk: G::Node, upper: Us, cutoff: F) -> Termination
    where
        Us: Fn(G::Edge) -> F,
    {
        self.run(src, snk, upper, Some(cutoff))
    }

    /// Return the minimal cut associated with the last maximum flow.
    ///
    /// These are the nodes reachable from the source in the final
    /// residual network. The cut is only a minimal one if the last
    /// run terminated with `Termination::Maximum`.
    pub fn mincut(&self) -> Vec<G::Node> {
        let n = self.g.num_nodes();
        self.g
            .nodes()
            .filter(|&u| self.levels[self.g.node_id(u)] < n)
            .collect()
    }

    fn run<Us>(&mut self, src: G::Node, snk: G::Node, upper: Us, cutoff: Option<F>) -> Termination
    where
        Us: Fn(G::Edge) -> F,
    {
        let src = self.g.node_id(src);
        let snk = self.g.node_id(snk);
        assert_ne!(src, snk, "Source and sink node must not be equal");

        // initialize the residual capacities
        for (x, r) in self.residual.iter_mut().enumerate() {
            if (x & 1) == 0 {
                *r = upper(self.g.id2edge(x >> 1));
                debug_assert!(*r >= F::zero(), "Edge capacities must be non-negative");
            } else {
                *r = F::zero();
            }
        }
        self.value = F::zero();

        if cutoff.map_or(false, |c| self.value >= c) {
            return Termination::Cutoff;
        }

        while self.search(src, snk) {
            loop {
                let df = self.augment(src, snk);
                self.value += df;
                if cutoff.map_or(false, |c| self.value >= c) {
                    return Termination::Cutoff;
                }
                if !self.advance(src, snk) {
                    break;
                }
            }
        }

        Termination::Maximum
    }

    /// Start a new phase.
    ///
    /// Computes the level of each node reachable over positive
    /// residual capacities by a BFS from the source and records the
    /// BFS tree predecessor of each node. The search stops once the
    /// sink's layer is complete, so all nodes on shortest paths keep
    /// their level. Returns whether the sink has been reached.
    fn search(&mut self, src: usize, snk: usize) -> bool {
        let n = self.g.num_nodes();

        for lvl in &mut self.levels {
            *lvl = n;
        }
        self.parents.fill((usize::max_value(), usize::max_value()));
        self.levels[src] = 0;
        // just some dummy edge
        self.parents[src] = (0, 0);

        self.queue.clear();
        self.queue.push_back(src);

        let mut snk_d = n;
        while let Some(u) = self.queue.pop_front() {
            let d = self.levels[u];
            if d >= snk_d {
                return true;
            }
            for &(x, v) in &self.neighs[u] {
                if self.levels[v] == n && self.residual[x] > F::zero() {
                    self.levels[v] = d + 1;
                    self.parents[v] = (x, u);
                    self.queue.push_back(v);
                    if v == snk {
                        snk_d = d + 1;
                    }
                }
            }
        }

        false
    }

    /// Find the next augmenting path of the current phase.
    ///
    /// Recomputes the parent map by a BFS restricted to the level
    /// graph, i.e. to edges with positive residual capacity leading
    /// from one layer to the next. The levels themselves are not
    /// modified. Returns whether the sink is still reachable.
    fn advance(&mut self, src: usize, snk: usize) -> bool {
        let n = self.g.num_nodes();

        self.parents.fill((usize::max_value(), usize::max_value()));
        self.parents[src] = (0, 0);

        self.queue.clear();
        self.queue.push_back(src);

        while let Some(u) = self.queue.pop_front() {
            let d = self.levels[u];
            if d + 1 >= n {
                continue;
            }
            for &(x, v) in &self.neighs[u] {
                if self.levels[v] == d + 1
                    && self.parents[v].0 == usize::max_value()
                    && self.residual[x] > F::zero()
                {
                    self.parents[v] = (x, u);
                    if v == snk {
                        return true;
                    }
                    self.queue.push_back(v);
                }
            }
        }

        false
    }

    /// Augment along the path recorded in the parent map.
    ///
    /// The path is walked twice from the sink back to the source,
    /// first to compute the bottleneck residual capacity, then to
    /// push that amount. Pushing lowers the residual capacity of
    /// every path edge and raises it on the paired reverse edge, so
    /// a later phase may reroute flow pushed here.
    fn augment(&mut self, src: usize, snk: usize) -> F {
        debug_assert!(
            self.parents[snk].0 != usize::max_value(),
            "Augmentation requires the sink to be reachable"
        );

        // compute the bottleneck, seeded from the sink's path edge
        let mut v = snk;
        let mut df = self.residual[self.parents[v].0];
        while v != src {
            let (x, u) = self.parents[v];
            df = min(df, self.residual[x]);
            v = u;
        }

        debug_assert!(!df.is_zero());

        // now push the flow
        let mut v = snk;
        while v != src {
            let (x, u) = self.parents[v];
            self.residual[x] -= df;
            self.residual[x ^ 1] += df;
            v = u;
        }

        df
    }
}

/// Solve the maxflow problem using the algorithm of Dinitz.
///
/// The function solves the max flow problem from the source node
/// `src` to the sink node `snk` with the given `upper` bounds on
/// the edges.
///
/// The function returns the flow value, the flow on each edge and the
/// nodes in a minimal cut.
pub fn dinitz<'a, G, F, Us>(g: &'a G, src: G::Node, snk: G::Node, upper: Us) -> (F, Vec<(G::Edge, F)>, Vec<G::Node>)
where
    G: IndexDigraph<'a>,
    F: 'a + NumAssign + Ord + Copy,
    Us: Fn(G::Edge) -> F,
{
    let mut maxflow = Dinitz::new(g);
    maxflow.solve(src, snk, upper);
    (
        maxflow.value(),
        g.edges().map(|e| (e, maxflow.flow(e))).collect(),
        maxflow.mincut(),
    )
}
