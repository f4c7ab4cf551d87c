/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Checking flows for feasibility.
//!
//! A feasible flow respects the capacity of every edge and conserves
//! flow at every node except the source and the sink. The checks in
//! this module verify a supplied flow independently of the algorithm
//! that produced it.

use crate::traits::IndexDigraph;

use crate::num::traits::NumAssign;

use std::error;
use std::fmt;

/// Error describing why a flow is infeasible.
#[derive(Debug, PartialEq, Eq)]
pub enum FlowError<F> {
    /// An edge carries negative flow.
    Negative { edge: usize, flow: F },
    /// An edge carries more flow than its capacity.
    Capacity { edge: usize, flow: F, upper: F },
    /// A node violates the flow conservation constraint.
    Conservation { node: usize, inflow: F, outflow: F },
}

impl<F> fmt::Display for FlowError<F>
where
    F: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::FlowError::*;
        match self {
            Negative { edge, flow } => write!(fmt, "Negative flow {} on edge {}", flow, edge),
            Capacity { edge, flow, upper } => {
                write!(fmt, "Flow {} on edge {} exceeds the capacity {}", flow, edge, upper)
            }
            Conservation { node, inflow, outflow } => {
                write!(fmt, "Node {} has inflow {} but outflow {}", node, inflow, outflow)
            }
        }
    }
}

impl<F> error::Error for FlowError<F> where F: fmt::Debug + fmt::Display {}

/// Check a flow for feasibility and return its value.
///
/// The flow given by the map `flow` is verified against the network:
/// every edge must carry a flow between zero and its capacity given
/// by `upper`, and for every node except `src` and `snk` the inflow
/// must equal the outflow. The source must not receive more flow
/// than it sends, i.e. flows with a negative value are rejected.
///
/// On success the net outflow of the source is returned. This equals
/// the net inflow of the sink.
///
/// # Example
///
/// ```
/// use rs_flow::{Buildable, Builder, Net};
/// use rs_flow::traits::*;
/// use rs_flow::check::{check_flow, FlowError};
///
/// let mut b = Net::new_builder();
/// let s = b.add_node();
/// let a = b.add_node();
/// let t = b.add_node();
/// b.add_edge(s, a);
/// b.add_edge(a, t);
/// let g = b.into_graph();
///
/// let upper = vec![3, 2];
/// let (s, t) = (g.id2node(0), g.id2node(2));
///
/// let flow = vec![2, 2];
/// assert_eq!(check_flow(&g, s, t, |e| upper[e.index()], |e| flow[e.index()]), Ok(2));
///
/// // pushing more than the capacity is rejected
/// let flow = vec![3, 3];
/// assert_eq!(
///     check_flow(&g, s, t, |e| upper[e.index()], |e| flow[e.index()]),
///     Err(FlowError::Capacity { edge: 1, flow: 3, upper: 2 })
/// );
///
/// // so is a leak at an inner node
/// let flow = vec![2, 1];
/// assert_eq!(
///     check_flow(&g, s, t, |e| upper[e.index()], |e| flow[e.index()]),
///     Err(FlowError::Conservation { node: 1, inflow: 2, outflow: 1 })
/// );
/// ```
pub fn check_flow<'a, G, F, Us, Fs>(
    g: &'a G,
    src: G::Node,
    snk: G::Node,
    upper: Us,
    flow: Fs,
) -> std::result::Result<F, FlowError<F>>
where
    G: IndexDigraph<'a>,
    F: NumAssign + Ord + Copy,
    Us: Fn(G::Edge) -> F,
    Fs: Fn(G::Edge) -> F,
{
    for e in g.edges() {
        let f = flow(e);
        if f < F::zero() {
            return Err(FlowError::Negative {
                edge: g.edge_id(e),
                flow: f,
            });
        }
        if f > upper(e) {
            return Err(FlowError::Capacity {
                edge: g.edge_id(e),
                flow: f,
                upper: upper(e),
            });
        }
    }

    let mut value = F::zero();
    for u in g.nodes() {
        if u == snk {
            continue;
        }
        let fin = g.inedges(u).fold(F::zero(), |acc, (e, _)| acc + flow(e));
        let fout = g.outedges(u).fold(F::zero(), |acc, (e, _)| acc + flow(e));
        if u == src {
            if fin > fout {
                return Err(FlowError::Conservation {
                    node: g.node_id(u),
                    inflow: fin,
                    outflow: fout,
                });
            }
            value = fout - fin;
        } else if fin != fout {
            return Err(FlowError::Conservation {
                node: g.node_id(u),
                inflow: fin,
                outflow: fout,
            });
        }
    }

    Ok(value)
}

/// Return the capacity of a cut.
///
/// The cut is given by the nodes on its source side. Its capacity is
/// the total capacity of the edges leaving this set. By the
/// max-flow-min-cut theorem the value of a maximum flow equals the
/// capacity of a minimal cut.
pub fn cut_value<'a, G, F, Us>(g: &'a G, cut: &[G::Node], upper: Us) -> F
where
    G: IndexDigraph<'a>,
    F: NumAssign + Ord + Copy,
    Us: Fn(G::Edge) -> F,
{
    let mut inside = vec![false; g.num_nodes()];
    for &u in cut {
        inside[g.node_id(u)] = true;
    }
    g.edges()
        .filter(|&e| inside[g.node_id(g.src(e))] && !inside[g.node_id(g.snk(e))])
        .fold(F::zero(), |acc, e| acc + upper(e))
}

#[cfg(test)]
mod tests {
    use super::{check_flow, cut_value, FlowError};
    use crate::traits::*;
    use crate::{Buildable, Builder, Net};

    fn diamond() -> Net {
        Net::new_with(|b| {
            let nodes = b.add_nodes(4);
            b.add_edge(nodes[0], nodes[1]);
            b.add_edge(nodes[1], nodes[3]);
            b.add_edge(nodes[0], nodes[2]);
            b.add_edge(nodes[2], nodes[3]);
        })
    }

    #[test]
    fn test_feasible() {
        let g = diamond();
        let (s, t) = (g.id2node(0), g.id2node(3));
        let upper = vec![10, 10, 5, 5];
        let flow = vec![10, 10, 5, 5];
        assert_eq!(check_flow(&g, s, t, |e| upper[e.index()], |e| flow[e.index()]), Ok(15));

        // a partial flow is feasible, too
        let flow = vec![4, 4, 0, 0];
        assert_eq!(check_flow(&g, s, t, |e| upper[e.index()], |e| flow[e.index()]), Ok(4));

        // the zero flow always is
        assert_eq!(check_flow(&g, s, t, |e| upper[e.index()], |_| 0), Ok(0));
    }

    #[test]
    fn test_negative() {
        let g = diamond();
        let (s, t) = (g.id2node(0), g.id2node(3));
        let upper = vec![10, 10, 5, 5];
        let flow = vec![3, 3, -1, -1];
        assert_eq!(
            check_flow(&g, s, t, |e| upper[e.index()], |e| flow[e.index()]),
            Err(FlowError::Negative { edge: 2, flow: -1 })
        );
    }

    #[test]
    fn test_conservation() {
        let g = diamond();
        let (s, t) = (g.id2node(0), g.id2node(3));
        let upper = vec![10, 10, 5, 5];
        let flow = vec![10, 8, 0, 0];
        assert_eq!(
            check_flow(&g, s, t, |e| upper[e.index()], |e| flow[e.index()]),
            Err(FlowError::Conservation {
                node: 1,
                inflow: 10,
                outflow: 8
            })
        );
    }

    #[test]
    fn test_backward_flow_rejected() {
        let g = Net::new_with(|b| {
            let s = b.add_node();
            let t = b.add_node();
            b.add_edge(t, s);
        });
        let (s, t) = (g.id2node(0), g.id2node(1));
        // feasible edge-wise, but the value would be negative
        assert_eq!(
            check_flow(&g, s, t, |_| 2, |_| 1),
            Err(FlowError::Conservation {
                node: 0,
                inflow: 1,
                outflow: 0
            })
        );
    }

    #[test]
    fn test_cut_value() {
        let g = Net::new_with(|b| {
            let nodes = b.add_nodes(3);
            b.add_edge(nodes[0], nodes[1]);
            b.add_edge(nodes[1], nodes[2]);
        });
        let upper = vec![3, 1];
        assert_eq!(cut_value(&g, &[g.id2node(0)], |e| upper[e.index()]), 3);
        assert_eq!(cut_value(&g, &[g.id2node(0), g.id2node(1)], |e| upper[e.index()]), 1);
    }
}
