// Copyright (c) 2016-2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common network classes.

use crate::builder::{Buildable, Builder};
use crate::traits::Digraph;

/// Returns a directed path with `m` edges.
///
/// The path runs from the first node to the last node.
pub fn path<'a, G>(m: usize) -> G
where
    G: Digraph<'a> + Buildable,
{
    let mut b = G::Builder::with_capacities(m + 1, m);
    let nodes: Vec<_> = (0..=m).map(|_| b.add_node()).collect();
    for (u, v) in nodes.iter().zip(nodes.iter().skip(1)) {
        b.add_edge(*u, *v);
    }
    b.into_graph()
}

/// Returns a layered network.
///
/// The network consists of a source node, one layer of nodes per
/// entry of `widths`, and a sink node. The source is connected to
/// every node of the first layer, consecutive layers are connected
/// completely, and every node of the last layer is connected to the
/// sink. All edges point away from the source.
///
/// The source is the first node, the sink the last one. If `widths`
/// is empty the network is a single source-sink edge. With unit
/// capacities the maximum flow is the cheapest cut between
/// consecutive layers: the minimum of the first width, the last
/// width and the products `widths[i] * widths[i + 1]`.
///
/// # Example
///
/// ```
/// use rs_flow::Net;
/// use rs_flow::traits::*;
/// use rs_flow::classes;
///
/// let g: Net = classes::layered(&[2, 3]);
/// assert_eq!(g.num_nodes(), 7);
/// assert_eq!(g.num_edges(), 2 + 2 * 3 + 3);
/// ```
pub fn layered<'a, G>(widths: &[usize]) -> G
where
    G: Digraph<'a> + Buildable,
{
    let nnodes = 2 + widths.iter().sum::<usize>();
    let mut nedges = widths.windows(2).map(|w| w[0] * w[1]).sum::<usize>();
    nedges += widths.first().map_or(1, |&w| w);
    nedges += widths.last().map_or(0, |&w| w);

    let mut b = G::Builder::with_capacities(nnodes, nedges);
    let s = b.add_node();
    let mut prev = vec![s];
    for &w in widths {
        let layer = b.add_nodes(w);
        for &u in &prev {
            for &v in &layer {
                b.add_edge(u, v);
            }
        }
        prev = layer;
    }
    let t = b.add_node();
    for &u in &prev {
        b.add_edge(u, t);
    }
    b.into_graph()
}

#[cfg(test)]
mod tests {

    use super::{layered, path};
    use crate::traits::*;
    use crate::Net;

    #[test]
    fn test_path() {
        let g = path::<Net>(5);
        assert_eq!(g.num_nodes(), 6);
        assert_eq!(g.num_edges(), 5);
        for e in g.edges() {
            assert_eq!(g.node_id(g.src(e)) + 1, g.node_id(g.snk(e)));
        }
        for u in g.nodes() {
            let deg = if g.node_id(u) + 1 < g.num_nodes() { 1 } else { 0 };
            assert_eq!(g.outedges(u).count(), deg);
        }
    }

    #[test]
    fn test_layered() {
        let g = layered::<Net>(&[3, 4, 2]);
        assert_eq!(g.num_nodes(), 2 + 3 + 4 + 2);
        assert_eq!(g.num_edges(), 3 + 12 + 8 + 2);

        let s = g.id2node(0);
        let t = g.id2node(g.num_nodes() - 1);
        assert_eq!(g.outedges(s).count(), 3);
        assert_eq!(g.inedges(t).count(), 2);

        // every edge points towards the sink side
        for e in g.edges() {
            assert!(g.node_id(g.src(e)) < g.node_id(g.snk(e)));
        }
    }

    #[test]
    fn test_layered_empty() {
        let g = layered::<Net>(&[]);
        assert_eq!(g.num_nodes(), 2);
        assert_eq!(g.num_edges(), 1);
        let e = g.id2edge(0);
        assert_eq!(g.node_id(g.src(e)), 0);
        assert_eq!(g.node_id(g.snk(e)), 1);
    }
}
