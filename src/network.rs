/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A compact, static network data structure.
//!
//! `Network` stores a directed graph in three flat vectors. Each edge
//! occupies two *slots*: slot `2*i` is edge `i` seen from its source
//! (listed among the outgoing edges), slot `2*i + 1` is the same edge
//! seen from its sink (listed among the incoming edges). Flow
//! algorithms exploit this encoding directly: the slot number doubles
//! as an index into per-slot residual capacities, and `slot ^ 1`
//! flips between an edge and its paired reverse edge.

use crate::builder::{Buildable, Builder};
use crate::traits::{Directed, FiniteDigraph, GraphIterator, GraphType};
use crate::traits::{IndexDigraph, Indexable};

use crate::num::iter::{range, range_step, Range, RangeStep};
use crate::num::traits::{PrimInt, Unsigned};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice::Iter as SliceIter;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Node of a network.
///
/// This is basically a newtype of the node index.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Node<ID = u32>(ID)
where
    ID: PrimInt + Unsigned;

impl<ID> fmt::Display for Node<ID>
where
    ID: PrimInt + Unsigned + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl<ID> Indexable for Node<ID>
where
    ID: PrimInt + Unsigned,
{
    fn index(&self) -> usize {
        self.0.to_usize().unwrap()
    }
}

/// Edge of a network.
///
/// This is a newtype of the edge *slot* number. An edge and its
/// paired reverse slot compare equal and hash identically, so
/// capacity and flow maps never distinguish the two directions of the
/// same edge.
#[derive(Eq, Clone, Copy, Debug)]
pub struct Edge<ID = u32>(ID)
where
    ID: PrimInt + Unsigned;

impl<ID> PartialEq for Edge<ID>
where
    ID: PrimInt + Unsigned,
{
    fn eq(&self, other: &Self) -> bool {
        (self.0 >> 1) == (other.0 >> 1)
    }
}

impl<ID> fmt::Display for Edge<ID>
where
    ID: PrimInt + Unsigned + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}{}",
            if (self.0 & ID::one()).is_zero() { "+" } else { "-" },
            self.0 >> 1
        )
    }
}

impl<ID> Hash for Edge<ID>
where
    ID: PrimInt + Unsigned + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.0 >> 1).hash(state)
    }
}

impl<ID> Indexable for Edge<ID>
where
    ID: PrimInt + Unsigned,
{
    fn index(&self) -> usize {
        (self.0 >> 1).to_usize().unwrap()
    }
}

/// Data for a node in a network.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
struct NodeData<ID> {
    firstout: ID,
    firstin: ID,
}

/// Data for an edge in a network.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
struct EdgeData<ID> {
    nodes: [ID; 2],
}

/// A vector based network data structure.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Network<ID = u32> {
    nodes: Vec<NodeData<ID>>,
    edges: Vec<EdgeData<ID>>,
    // The list of adjacencies. This list contains the edge slots in
    // a specific order, so that for each node the incident outgoing
    // and incoming edges are in successive positions.
    adj: Vec<ID>,
}

/// A graph iterator over all nodes of a network.
#[derive(Clone)]
pub struct NodeIt<ID>(Range<ID>);

impl<'a, ID> GraphIterator<Network<ID>> for NodeIt<ID>
where
    ID: 'a + PrimInt + Unsigned,
{
    type Item = Node<ID>;

    fn next(&mut self, _g: &Network<ID>) -> Option<Self::Item> {
        Iterator::next(&mut self.0).map(Node)
    }

    fn size_hint(&self, _g: &Network<ID>) -> (usize, Option<usize>) {
        Iterator::size_hint(&self.0)
    }

    fn count(self, _g: &Network<ID>) -> usize {
        Iterator::count(self.0)
    }
}

/// An iterator over all edges of a network.
///
/// This iterator only returns the forward edges.
#[derive(Clone)]
pub struct EdgeIt<ID>(RangeStep<ID>);

impl<'a, ID> GraphIterator<Network<ID>> for EdgeIt<ID>
where
    ID: 'a + PrimInt + Unsigned,
{
    type Item = Edge<ID>;

    fn next(&mut self, _g: &Network<ID>) -> Option<Self::Item> {
        Iterator::next(&mut self.0).map(Edge)
    }

    fn size_hint(&self, _g: &Network<ID>) -> (usize, Option<usize>) {
        Iterator::size_hint(&self.0)
    }

    fn count(self, _g: &Network<ID>) -> usize {
        Iterator::count(self.0)
    }
}

impl<'a, ID> GraphType<'a> for Network<ID>
where
    ID: 'a + PrimInt + Unsigned,
{
    type Node = Node<ID>;
    type Edge = Edge<ID>;
}

impl<'a, ID> FiniteDigraph<'a> for Network<ID>
where
    ID: 'a + PrimInt + Unsigned,
{
    type NodeIt = NodeIt<ID>;
    type EdgeIt = EdgeIt<ID>;

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn nodes_iter(&self) -> Self::NodeIt {
        NodeIt(range(ID::zero(), ID::from(self.num_nodes()).unwrap()))
    }

    fn edges_iter(&self) -> Self::EdgeIt {
        EdgeIt(range_step(
            ID::zero(),
            ID::from(2 * self.edges.len()).unwrap(),
            ID::from(2).unwrap(),
        ))
    }

    fn src(&self, e: Self::Edge) -> Self::Node {
        let eid = e.0.to_usize().unwrap();
        Node(self.edges[eid >> 1].nodes[0])
    }

    fn snk(&self, e: Self::Edge) -> Self::Node {
        let eid = e.0.to_usize().unwrap();
        Node(self.edges[eid >> 1].nodes[1])
    }
}

/// A graph iterator over the edges incident with a node.
///
/// Each item is the incident slot together with the neighbor at the
/// other end of the edge.
#[derive(Clone)]
pub struct AdjIt<'a, ID>(SliceIter<'a, ID>);

impl<'a, ID> GraphIterator<Network<ID>> for AdjIt<'a, ID>
where
    ID: 'a + PrimInt + Unsigned,
{
    type Item = (Edge<ID>, Node<ID>);

    fn next(&mut self, g: &Network<ID>) -> Option<Self::Item> {
        self.0.next().map(|&eid| {
            let i = eid.to_usize().unwrap();
            (Edge(eid), Node(g.edges[i >> 1].nodes[1 - (i & 1)]))
        })
    }
}

impl<'a, ID> Directed<'a> for Network<ID>
where
    ID: 'a + PrimInt + Unsigned,
{
    type OutIt = AdjIt<'a, ID>;

    type InIt = AdjIt<'a, ID>;

    fn out_iter(&'a self, u: Self::Node) -> Self::OutIt {
        let uid = u.index();
        let beg = self.nodes[uid].firstout.to_usize().unwrap();
        let end = self.nodes[uid].firstin.to_usize().unwrap();
        AdjIt(self.adj[beg..end].iter())
    }

    fn in_iter(&'a self, u: Self::Node) -> Self::InIt {
        let uid = u.index();
        let beg = self.nodes[uid].firstin.to_usize().unwrap();
        let end = self
            .nodes
            .get(uid + 1)
            .map(|n| n.firstout.to_usize().unwrap())
            .unwrap_or_else(|| self.adj.len());
        AdjIt(self.adj[beg..end].iter())
    }
}

impl<'a, ID> IndexDigraph<'a> for Network<ID>
where
    ID: 'a + PrimInt + Unsigned,
{
    fn node_id(&self, u: Self::Node) -> usize {
        u.index()
    }

    fn id2node(&self, id: usize) -> Self::Node {
        debug_assert!(id < self.nodes.len(), "Invalid node id");
        Node(ID::from(id).unwrap())
    }

    fn edge_id(&self, e: Self::Edge) -> usize {
        e.index()
    }

    fn id2edge(&self, id: usize) -> Self::Edge {
        debug_assert!(
            id < self.edges.len(),
            "Invalid edge id: {}({}), must be in 0..{}",
            id,
            id << 1,
            self.edges.len()
        );
        Edge(ID::from(id << 1).unwrap())
    }
}

/// A builder for a `Network`.
///
/// The basic task is to arrange the final outgoing and incoming edges
/// in the adjacency vector appropriately (i.e. first outgoing, then
/// incoming edges).
pub struct NetworkBuilder<ID> {
    /// The outgoing and incoming edges of each node.
    nodes: Vec<[Vec<ID>; 2]>,

    /// The end nodes of each edge.
    edges: Vec<EdgeData<ID>>,
}

impl<ID> Builder for NetworkBuilder<ID>
where
    ID: PrimInt + Unsigned,
{
    type Graph = Network<ID>;
    type Node = Node<ID>;
    type Edge = Edge<ID>;

    fn with_capacities(nnodes: usize, nedges: usize) -> Self {
        NetworkBuilder {
            nodes: Vec::with_capacity(nnodes),
            edges: Vec::with_capacity(nedges),
        }
    }

    fn reserve(&mut self, nnodes: usize, nedges: usize) {
        self.nodes.reserve(nnodes);
        self.edges.reserve(nedges);
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn add_node(&mut self) -> Self::Node {
        assert!(
            self.nodes.len() + 1 < ID::max_value().to_usize().unwrap(),
            "Node capacity exceeded"
        );
        let id = self.nodes.len();
        self.nodes.push([vec![], vec![]]);
        Node(ID::from(id).unwrap())
    }

    fn add_edge(&mut self, u: Self::Node, v: Self::Node) -> Self::Edge {
        assert!(
            self.edges.len() * 2 + 2 < ID::max_value().to_usize().unwrap(),
            "Edge capacity exceeded"
        );
        let eid = ID::from(self.edges.len() << 1).unwrap();
        self.edges.push(EdgeData { nodes: [u.0, v.0] });
        self.nodes[u.index()][0].push(eid);
        self.nodes[v.index()][1].push(eid | ID::one());
        Edge(eid)
    }

    fn node2id(&self, u: Self::Node) -> usize {
        u.index()
    }

    fn edge2id(&self, e: Self::Edge) -> usize {
        e.index()
    }

    fn into_graph(self) -> Network<ID> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut adj = Vec::with_capacity(self.edges.len() * 2);

        for [outs, ins] in self.nodes.into_iter() {
            nodes.push(NodeData {
                firstout: ID::from(adj.len()).unwrap(),
                firstin: ID::from(adj.len() + outs.len()).unwrap(),
            });
            adj.extend(outs);
            adj.extend(ins);
        }

        Network {
            nodes,
            edges: self.edges,
            adj,
        }
    }
}

impl<ID> Buildable for Network<ID>
where
    ID: PrimInt + Unsigned,
{
    type Builder = NetworkBuilder<ID>;
}

impl<ID> Network<ID>
where
    ID: PrimInt + Unsigned,
{
    pub fn new() -> Network<ID> {
        Network {
            nodes: vec![],
            edges: vec![],
            adj: vec![],
        }
    }
}

impl<ID> Default for Network<ID>
where
    ID: PrimInt + Unsigned,
{
    fn default() -> Self {
        Network::new()
    }
}
