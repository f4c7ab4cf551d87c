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

//#![forbid(unsafe_code)]

//! A library for maximum-flow computation on capacitated networks.

mod num {
    pub use num_iter as iter;
    pub use num_traits as traits;
}

// # Data structures

pub mod traits;
pub use self::traits::{Digraph, FiniteDigraph, IndexDigraph};

pub mod builder;
pub use crate::builder::{Buildable, Builder};

pub mod network;
pub use self::network::Network;

/// Network classes
pub mod classes;

/// The default network type.
///
/// A network with up to 2^31 nodes and edges.
pub type Net = self::Network<u32>;

// # Algorithms

pub mod check;
pub mod dinitz;

// # Drawing

pub mod string;
