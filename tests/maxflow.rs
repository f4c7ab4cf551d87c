/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_flow::check::{check_flow, cut_value};
use rs_flow::classes;
use rs_flow::dinitz::{dinitz, Dinitz, Termination};
use rs_flow::string::from_ascii;
use rs_flow::traits::*;
use rs_flow::{Buildable, Builder, Net};

use ordered_float::NotNan;
use std::error::Error;

/// Builds a network with `nnodes` nodes and one edge per entry of
/// `edges`, returning the network and the vector of upper bounds.
fn network(nnodes: usize, edges: &[(usize, usize, usize)]) -> (Net, Vec<usize>) {
    let mut b = Net::new_builder();
    let nodes = b.add_nodes(nnodes);
    let mut upper = Vec::with_capacity(edges.len());
    for &(u, v, ub) in edges {
        b.add_edge(nodes[u], nodes[v]);
        upper.push(ub);
    }
    (b.into_graph(), upper)
}

#[test]
fn test_diamond() {
    let (g, upper) = network(4, &[(0, 1, 10), (1, 3, 10), (0, 2, 5), (2, 3, 5)]);
    let s = g.id2node(0);
    let t = g.id2node(3);

    let mut df = Dinitz::new(&g);
    df.solve(s, t, |e| upper[e.index()]);

    assert_eq!(df.value(), 15);
    // Both paths are disjoint, so all edges must be saturated.
    for eid in 0..g.num_edges() {
        assert_eq!(df.flow(g.id2edge(eid)), upper[eid]);
    }
    assert_eq!(check_flow(&g, s, t, |e| upper[e.index()], |e| df.flow(e)), Ok(15));
    assert_eq!(df.mincut(), vec![s]);
    assert_eq!(cut_value(&g, &[s], |e| upper[e.index()]), 15);
}

#[test]
fn test_single_edge() {
    let mut b = Net::new_builder();
    let s = b.add_node();
    let t = b.add_node();
    let e = b.add_edge(s, t);
    let g = b.into_graph();

    let (value, flows, cut) = dinitz(&g, s, t, |_| 7);
    assert_eq!(value, 7);
    assert_eq!(flows, vec![(e, 7)]);
    assert_eq!(cut, vec![s]);
}

#[test]
fn test_bottleneck() {
    let (g, upper) = network(3, &[(0, 1, 3), (1, 2, 1)]);
    let s = g.id2node(0);
    let t = g.id2node(2);

    let mut df = Dinitz::new(&g);
    df.solve(s, t, |e| upper[e.index()]);

    assert_eq!(df.value(), 1);
    assert_eq!(df.flow(g.id2edge(0)), 1);
    assert_eq!(df.flow(g.id2edge(1)), 1);

    let cut = df.mincut();
    assert_eq!(cut, vec![s, g.id2node(1)]);
    assert_eq!(cut_value(&g, &cut, |e| upper[e.index()]), 1);
}

#[test]
fn test_disconnected_sink() {
    // The sink has no entering edge at all.
    let (g, upper) = network(3, &[(0, 1, 5)]);
    let s = g.id2node(0);
    let t = g.id2node(2);

    let mut df = Dinitz::new(&g);
    df.solve(s, t, |e| upper[e.index()]);

    assert_eq!(df.value(), 0);
    assert_eq!(df.level(s), Some(0));
    assert_eq!(df.level(t), None);
    assert_eq!(df.mincut(), vec![s, g.id2node(1)]);
}

#[test]
fn test_parallel_paths() {
    let (g, upper) = network(4, &[(0, 1, 4), (1, 3, 4), (0, 2, 4), (2, 3, 4)]);
    let s = g.id2node(0);
    let t = g.id2node(3);

    let (value, flows, cut) = dinitz(&g, s, t, |e| upper[e.index()]);
    assert_eq!(value, 8);
    assert!(flows.iter().all(|&(_, f)| f == 4));
    assert_eq!(cut, vec![s]);
}

#[test]
fn test_selfloop_zerocap() {
    // The self-loop never enters a level graph and the zero capacity
    // edge is never admissible.
    let (g, upper) = network(3, &[(0, 1, 3), (1, 1, 5), (1, 2, 2), (0, 2, 0)]);
    let s = g.id2node(0);
    let t = g.id2node(2);

    let mut df = Dinitz::new(&g);
    df.solve(s, t, |e| upper[e.index()]);

    assert_eq!(df.value(), 2);
    assert_eq!(df.flow(g.id2edge(1)), 0);
    assert_eq!(df.flow(g.id2edge(3)), 0);

    let cut = df.mincut();
    assert_eq!(cut, vec![s, g.id2node(1)]);
    assert_eq!(cut_value(&g, &cut, |e| upper[e.index()]), 2);
    assert_eq!(check_flow(&g, s, t, |e| upper[e.index()], |e| df.flow(e)), Ok(2));
}

#[test]
fn test_parallel_edges() {
    // Parallel and antiparallel edges between the same pair of nodes
    // keep separate residuals.
    let (g, upper) = network(3, &[(0, 1, 4), (0, 1, 3), (1, 0, 2), (1, 2, 7)]);
    let s = g.id2node(0);
    let t = g.id2node(2);

    let mut df = Dinitz::new(&g);
    df.solve(s, t, |e| upper[e.index()]);

    assert_eq!(df.value(), 7);
    assert_eq!(df.flow(g.id2edge(0)), 4);
    assert_eq!(df.flow(g.id2edge(1)), 3);
    assert_eq!(df.flow(g.id2edge(2)), 0);
    assert_eq!(df.flow(g.id2edge(3)), 7);
    assert_eq!(df.mincut(), vec![s]);
    assert_eq!(check_flow(&g, s, t, |e| upper[e.index()], |e| df.flow(e)), Ok(7));
}

#[test]
fn test_reroute() {
    // Node 0 is the source, node 5 the sink. The first phase routes
    // one unit along 0-1-2-5. The only remaining path 0-3-2 ... 1-4-5
    // pushes that unit back over the edge (1,2).
    let (g, upper) = network(
        6,
        &[(0, 1, 1), (0, 3, 1), (1, 2, 1), (1, 4, 1), (3, 2, 1), (2, 5, 1), (4, 5, 1)],
    );
    let s = g.id2node(0);
    let t = g.id2node(5);

    let mut df = Dinitz::new(&g);
    df.solve(s, t, |e| upper[e.index()]);

    assert_eq!(df.value(), 2);
    assert_eq!(df.flow(g.id2edge(2)), 0);
    assert_eq!(df.flow(g.id2edge(3)), 1);
    assert_eq!(df.flow(g.id2edge(4)), 1);
    assert_eq!(df.mincut(), vec![s]);
    assert_eq!(check_flow(&g, s, t, |e| upper[e.index()], |e| df.flow(e)), Ok(2));
}

#[test]
fn test_rerun() {
    let (g, upper) = network(4, &[(0, 1, 10), (1, 3, 10), (0, 2, 5), (2, 3, 5)]);
    let s = g.id2node(0);
    let t = g.id2node(3);

    let mut df = Dinitz::new(&g);
    df.solve(s, t, |e| upper[e.index()]);
    let first = df.value();
    df.solve(s, t, |e| upper[e.index()]);
    assert_eq!(df.value(), first);

    // The same instance can be solved with different capacities.
    df.solve(s, t, |e| 2 * upper[e.index()]);
    assert_eq!(df.value(), 30);
}

#[test]
fn test_cutoff() {
    let (g, upper) = network(4, &[(0, 1, 10), (1, 3, 10), (0, 2, 5), (2, 3, 5)]);
    let s = g.id2node(0);
    let t = g.id2node(3);

    let mut df = Dinitz::new(&g);
    let mut prev = 0;
    for cutoff in 0..=16usize {
        let term = df.solve_cutoff(s, t, |e| upper[e.index()], cutoff);
        if cutoff <= 15 {
            // The flow value reaches the cutoff eventually, possibly
            // overshooting it by the last augmentation.
            assert_eq!(term, Termination::Cutoff);
            assert!(df.value() >= cutoff);
        } else {
            assert_eq!(term, Termination::Maximum);
            assert_eq!(df.value(), 15);
        }
        assert!(df.value() <= 15);
        assert!(df.value() >= prev);
        prev = df.value();
        assert!(check_flow(&g, s, t, |e| upper[e.index()], |e| df.flow(e)).is_ok());
    }
}

#[test]
fn test_layered() {
    // With unit capacities the maximum flow is the cheapest cut
    // between consecutive layers, e.g. the four edges entering the
    // middle node for [4, 1, 4].
    for &(widths, maxflow) in &[
        (&[3usize, 2][..], 2),
        (&[4, 1, 4], 4),
        (&[2, 5, 3], 2),
        (&[6], 6),
    ] {
        let g: Net = classes::layered(widths);
        let s = g.id2node(0);
        let t = g.id2node(g.num_nodes() - 1);

        let (value, _, cut) = dinitz(&g, s, t, |_| 1usize);
        assert_eq!(value, maxflow);
        assert_eq!(cut_value(&g, &cut, |_| 1usize), value);
    }

    let g: Net = classes::layered(&[]);
    let (value, _, _) = dinitz(&g, g.id2node(0), g.id2node(1), |_| 1usize);
    assert_eq!(value, 1);
}

#[test]
fn test_float() -> Result<(), Box<dyn Error>> {
    let (g, upper) = network(4, &[(0, 1, 10), (1, 3, 10), (0, 2, 5), (2, 3, 5)]);
    let s = g.id2node(0);
    let t = g.id2node(3);

    let caps = upper
        .iter()
        .map(|&ub| NotNan::new(ub as f64 / 2.0))
        .collect::<Result<Vec<_>, _>>()?;

    let mut df = Dinitz::new(&g);
    df.solve(s, t, |e| caps[e.index()]);
    assert_eq!(df.value(), NotNan::new(7.5)?);
    assert_eq!(
        check_flow(&g, s, t, |e| caps[e.index()], |e| df.flow(e)),
        Ok(NotNan::new(7.5)?)
    );
    Ok(())
}

#[test]
fn test_ascii() -> Result<(), Box<dyn Error>> {
    let data = from_ascii::<Net>(
        "
   a---5---b
   |       |
   2       4
   |       |
   c---3---d
",
    )?;
    let g = data.graph;
    let caps = data.capacities;
    let (a, b, d) = (data.nodes[&'a'], data.nodes[&'b'], data.nodes[&'d']);

    let mut df = Dinitz::new(&g);
    df.solve(a, d, |e| caps[e.index()]);

    assert_eq!(df.value(), 6);
    assert_eq!(df.mincut(), vec![a, b]);
    assert_eq!(check_flow(&g, a, d, |e| caps[e.index()], |e| df.flow(e)), Ok(6));
    Ok(())
}
