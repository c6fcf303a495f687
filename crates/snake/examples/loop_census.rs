//! Closed-loop census timing probe.
//!
//! Purpose
//! - Count closed loops for even prism counts up to a limit under the full
//!   symmetry group and report simulator work and wall time per size.
//!
//! Usage: `cargo run -p snake --release --example loop_census -- 16`

use std::time::Instant;

use snake::search::{SearchCfg, Solutions};
use snake::symmetry::Symmetry;

fn main() {
    let max_prisms: usize = std::env::args()
        .nth(1)
        .map(|a| a.parse().expect("prism limit must be an integer"))
        .unwrap_or(14);
    let cfg = SearchCfg {
        physical: true,
        symmetry: Symmetry {
            reverse: true,
            chiral: true,
            cyclic: true,
        },
    };
    println!("prisms,loops,simulations,ms");
    for prisms in (4..=max_prisms).step_by(2) {
        let start = Instant::now();
        let mut sols = Solutions::new(prisms - 1, cfg).expect("indexable length");
        let loops = sols.by_ref().count();
        let ms = start.elapsed().as_secs_f64() * 1e3;
        println!("{prisms},{loops},{},{ms:.1}", sols.stats().simulations);
    }
}
