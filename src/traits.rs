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

//! Traits for network data structures.
//!
//! All graphs in this crate are finite and directed: each edge has a
//! designated source and a designated sink node, and the edges
//! entering and leaving each node can be listed. The traits build on
//! each other:
//!
//! 1. `FiniteDigraph`: node and edge counts, iteration over all nodes
//!    and edges, and the end nodes of each edge.
//! 2. `Directed`: iteration over the edges leaving or entering a
//!    single node.
//! 3. `Digraph`: umbrella trait for the two above.
//! 4. `IndexDigraph`: a `Digraph` whose nodes and edges are numbered
//!    `0..num_nodes()` and `0..num_edges()`. Algorithms that need
//!    node or edge attributes store them in plain vectors indexed by
//!    these ids.

/// A graph iterator.
///
/// This is roughly the same interface as a standard iterator. However,
/// all its method take additionally the graph itself as parameter. This
/// allows the iterator to not contain a reference to internal graph data.
///
/// This might be useful for algorithms that need to store several
/// iterators because they require less memory (they do not need to store
/// a reference to the same graph, each!).
pub trait GraphIterator<G: ?Sized>: Clone {
    type Item;

    fn next(&mut self, g: &G) -> Option<Self::Item>;

    fn size_hint(&self, _g: &G) -> (usize, Option<usize>) {
        (0, None)
    }

    fn count(mut self, g: &G) -> usize {
        let mut c = 0;
        while self.next(g).is_some() {
            c += 1
        }
        c
    }

    fn iter(self, g: &G) -> GraphIter<G, Self>
    where
        G: Sized,
    {
        GraphIter(self, g)
    }
}

/// A graph iterator as a standard iterator.
///
/// This is a pair consisting of a graph iterator and a reference the
/// graph itself. It can be used as a standard iterator.
pub struct GraphIter<'a, G, I>(pub(crate) I, pub(crate) &'a G);

impl<'a, G, I> Clone for GraphIter<'a, G, I>
where
    I: Clone,
{
    fn clone(&self) -> Self {
        GraphIter(self.0.clone(), self.1)
    }
}

impl<'a, G, I> Iterator for GraphIter<'a, G, I>
where
    I: GraphIterator<G>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next(self.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint(self.1)
    }

    fn count(self) -> usize {
        self.0.count(self.1)
    }
}

/// Base information of a graph.
pub trait GraphType<'a> {
    /// Type of a node.
    type Node: 'a + Copy + Eq;

    /// Type of an edge.
    type Edge: 'a + Copy + Eq;
}

/// Iterator over all nodes of a graph.
pub type NodeIterator<'a, G> = GraphIter<'a, G, <G as FiniteDigraph<'a>>::NodeIt>;

/// Iterator over all edges of a graph.
pub type EdgeIterator<'a, G> = GraphIter<'a, G, <G as FiniteDigraph<'a>>::EdgeIt>;

/// A finite directed graph with a known number of nodes and edges.
///
/// Finite graphs provide access to the list of all nodes and edges
/// and to the end nodes of each edge.
pub trait FiniteDigraph<'a>: GraphType<'a> {
    /// Type of an iterator over all nodes.
    type NodeIt: GraphIterator<Self, Item = Self::Node>;

    /// Type of an iterator over all edges.
    type EdgeIt: GraphIterator<Self, Item = Self::Edge>;

    /// Return the number of nodes in the graph.
    fn num_nodes(&self) -> usize;
    /// Return the number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// Return a graph iterator over all nodes.
    fn nodes_iter(&'a self) -> Self::NodeIt;

    /// Return an iterator over all nodes.
    fn nodes(&'a self) -> NodeIterator<'a, Self>
    where
        Self: Sized,
    {
        GraphIter(self.nodes_iter(), self)
    }

    /// Return a graph iterator over all edges.
    ///
    /// This iterator traverses only the forward edges.
    fn edges_iter(&'a self) -> Self::EdgeIt;

    /// Return an iterator over all edges.
    ///
    /// This iterator traverses only the forward edges.
    fn edges(&'a self) -> EdgeIterator<'a, Self>
    where
        Self: Sized,
    {
        GraphIter(self.edges_iter(), self)
    }

    /// Return the source node of an edge.
    fn src(&'a self, e: Self::Edge) -> Self::Node;

    /// Return the sink node of an edge.
    fn snk(&'a self, e: Self::Edge) -> Self::Node;
}

/// Iterator over edges leaving a node.
type OutIterator<'a, G> = GraphIter<'a, G, <G as Directed<'a>>::OutIt>;

/// Iterator over edges entering a node.
type InIterator<'a, G> = GraphIter<'a, G, <G as Directed<'a>>::InIt>;

/// A graph with list access to directed incident edges.
///
/// The direction information can be used in the following ways:
///
///  - The iterators `outedges` and `inedges` iterate only over edges
///    leaving or entering a certain node, respectively.
///  - Each item is an edge together with the neighbor at its other
///    end, so adjacency scans need no extra end-node lookup.
pub trait Directed<'a>: GraphType<'a> {
    /// Type of a graph iterator over edges leaving a node.
    type OutIt: GraphIterator<Self, Item = (Self::Edge, Self::Node)>;

    /// Type of a graph iterator over edges entering a node.
    type InIt: GraphIterator<Self, Item = (Self::Edge, Self::Node)>;

    /// Return a graph iterator over the edges leaving a node.
    fn out_iter(&'a self, u: Self::Node) -> Self::OutIt;

    /// Return an iterator over the edges leaving a node.
    fn outedges(&'a self, u: Self::Node) -> OutIterator<'a, Self>
    where
        Self: Sized,
    {
        GraphIter(self.out_iter(u), self)
    }

    /// Return a graph iterator over the edges entering a node.
    fn in_iter(&'a self, u: Self::Node) -> Self::InIt;

    /// Return an iterator over the edges entering a node.
    fn inedges(&'a self, u: Self::Node) -> InIterator<'a, Self>
    where
        Self: Sized,
    {
        GraphIter(self.in_iter(u), self)
    }
}

/// A trait for general directed, finite graphs.
pub trait Digraph<'a>: FiniteDigraph<'a> + Directed<'a> {}

impl<'a, G> Digraph<'a> for G where G: FiniteDigraph<'a> + Directed<'a> {}

/// An item that has an index.
pub trait Indexable {
    fn index(&self) -> usize;
}

/// Associates nodes and edges with unique ids.
pub trait IndexDigraph<'a>: Digraph<'a> {
    /// Return a unique id associated with a node.
    fn node_id(&self, u: Self::Node) -> usize;

    /// Return the node associated with the given id.
    ///
    /// The method panics if the id is invalid.
    fn id2node(&'a self, id: usize) -> Self::Node;

    /// Return a unique id associated with an edge.
    ///
    /// The returned id is the same for the edge and its reverse edge.
    fn edge_id(&self, e: Self::Edge) -> usize;

    /// Return the edge associated with the given id.
    ///
    /// The method returns the forward edge.
    ///
    /// The method panics if the id is invalid.
    fn id2edge(&'a self, id: usize) -> Self::Edge;
}
