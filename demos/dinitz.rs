/*
 * Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use time::OffsetDateTime;

use rustop::opts;

use rs_flow::check::{check_flow, cut_value};
use rs_flow::classes;
use rs_flow::dinitz::{Dinitz, Termination};
use rs_flow::traits::*;
use rs_flow::Net;

use std::fmt::{Debug, Display};

use num_traits::{FromPrimitive, NumAssign};
use ordered_float::NotNan;

fn run<'a, G, F, Us>(
    df: &mut Dinitz<'a, G, F>,
    src: G::Node,
    snk: G::Node,
    upper: Us,
    cutoff: Option<F>,
    niter: usize,
) -> Termination
where
    G: 'a + IndexDigraph<'a>,
    F: Display + num_traits::NumAssign + Ord + Copy,
    Us: Fn(G::Edge) -> F + Copy,
{
    let mut term = Termination::Maximum;
    let tstart = OffsetDateTime::now_utc();
    for _ in 0..niter {
        term = match cutoff {
            Some(c) => df.solve_cutoff(src, snk, upper, c),
            None => {
                df.solve(src, snk, upper);
                Termination::Maximum
            }
        };
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("Flow: {}", df.value());
    term
}

fn build_and_run<F>(layers: usize, width: usize, num: usize, cutoff: Option<usize>, typ: &str)
where
    F: Debug + Display + NumAssign + FromPrimitive + Copy + Ord,
{
    let tstart = OffsetDateTime::now_utc();
    let g: Net = classes::layered(&vec![width; layers]);
    let s = g.id2node(0);
    let t = g.id2node(g.num_nodes() - 1);
    let upper: Vec<_> = (0..g.num_edges()).map(|i| F::from_usize(i % 9 + 1).unwrap()).collect();

    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  graph: {}", std::any::type_name::<Net>());
    println!("  number type: {}", typ);
    println!("  number of nodes: {}", g.num_nodes());
    println!("  number of arcs: {}", g.num_edges());

    let mut df = Dinitz::new(&g);
    let term = run(
        &mut df,
        s,
        t,
        |e| upper[g.edge_id(e)],
        cutoff.map(|c| F::from_usize(c).unwrap()),
        num,
    );

    let value = check_flow(&g, s, t, |e| upper[g.edge_id(e)], |e| df.flow(e)).unwrap();
    assert_eq!(value, df.value());
    if term == Termination::Maximum {
        assert_eq!(cut_value(&g, &df.mincut(), |e| upper[g.edge_id(e)]), df.value());
    } else {
        println!("  cutoff reached, the flow may not be maximum");
    }
}

fn main() {
    let (args, _) = opts! {
        synopsis "Solve a max-flow problem on a layered network with the algorithm of Dinitz.";
        opt layers:usize=3, desc:"Number of node layers between source and sink.";
        opt width:usize=10, desc:"Number of nodes per layer.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        opt cutoff:Option<usize>, desc:"Stop as soon as the flow value reaches this bound.";
        opt real:bool, desc:"Use real valued flows.";
    }
    .parse_or_exit();

    if !args.real {
        build_and_run::<i32>(args.layers, args.width, args.num, args.cutoff, "i32");
    } else {
        build_and_run::<NotNan<f64>>(args.layers, args.width, args.num, args.cutoff, "f64");
    }
}
