//! Cross-checks for the index-jumping enumerator.
//!
//! The recursive generate-then-filter search below is the slow, obviously
//! correct formulation; every skip rule must reproduce its output exactly.

use super::*;
use crate::lattice::simulate;
use crate::state::State;
use crate::symmetry::{cyclic_orbit, normalize, Symmetry};

fn st(s: &str) -> State {
    s.parse().unwrap()
}

fn cfg(physical: bool, reverse: bool, chiral: bool, cyclic: bool) -> SearchCfg {
    SearchCfg {
        physical,
        symmetry: Symmetry {
            reverse,
            chiral,
            cyclic,
        },
    }
}

fn oracle(len: usize, cfg: SearchCfg) -> Vec<State> {
    fn recur(prefix: &mut Vec<u8>, len: usize, cfg: SearchCfg, out: &mut Vec<State>) {
        if prefix.len() == len {
            let s = State::new(prefix.clone()).unwrap();
            let sym = cfg.symmetry;
            if normalize(&s, sym.reverse, sym.chiral) != s {
                return;
            }
            if cfg.simulates() && !simulate(&s, sym.cyclic).is_physical() {
                return;
            }
            out.push(s);
            return;
        }
        for d in 0..4 {
            prefix.push(d);
            recur(prefix, len, cfg, out);
            prefix.pop();
        }
    }
    let mut out = Vec::new();
    recur(&mut Vec::with_capacity(len), len, cfg, &mut out);
    out
}

fn all_cfgs() -> impl Iterator<Item = SearchCfg> {
    (0u8..16).map(|bits| cfg(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0))
}

fn solve(len: usize, c: SearchCfg) -> Vec<State> {
    Solutions::new(len, c).unwrap().collect()
}

#[test]
fn enumerator_matches_recursive_oracle() {
    for len in 0..=6 {
        for c in all_cfgs() {
            let fast: Vec<State> = Enumerator::new(len, c).unwrap().collect();
            assert_eq!(fast, oracle(len, c), "len={len} cfg={c:?}");
        }
    }
}

#[test]
fn cyclic_solutions_match_deduplicated_oracle() {
    for len in [3, 5, 7] {
        for c in all_cfgs().filter(|c| c.symmetry.cyclic) {
            let sym = c.symmetry;
            let slow: Vec<State> =
                CyclicDedup::new(oracle(len, c).into_iter(), sym.reverse, sym.chiral).collect();
            assert_eq!(solve(len, c), slow, "len={len} cfg={c:?}");
        }
    }
}

#[test]
fn unconstrained_count_equals_brute_force() {
    for len in 1..=7 {
        let brute = (0..4u64.pow(len as u32))
            .map(|i| State::from_index(i, len))
            .filter(|s| simulate(s, false).is_physical())
            .count();
        assert_eq!(solve(len, SearchCfg::default()).len(), brute, "len={len}");
    }
}

#[test]
fn reference_counts() {
    // (len, [none, reverse, chiral, both]) for physical search.
    let physical: [(usize, [usize; 4]); 6] = [
        (1, [4, 4, 3, 3]),
        (2, [16, 10, 10, 7]),
        (3, [64, 40, 36, 24]),
        (4, [241, 127, 127, 70]),
        (5, [920, 490, 472, 258]),
        (6, [3384, 1718, 1714, 880]),
    ];
    for (len, counts) in physical {
        let got = [
            solve(len, cfg(true, false, false, false)).len(),
            solve(len, cfg(true, true, false, false)).len(),
            solve(len, cfg(true, false, true, false)).len(),
            solve(len, cfg(true, true, true, false)).len(),
        ];
        assert_eq!(got, counts, "len={len}");
    }
    assert_eq!(solve(4, cfg(false, false, false, false)).len(), 256);
    assert_eq!(solve(5, cfg(false, true, false, false)).len(), 544);
    assert_eq!(solve(5, cfg(false, false, true, false)).len(), 528);
    assert_eq!(solve(6, cfg(false, true, true, false)).len(), 1072);
}

#[test]
fn output_is_ascending() {
    let sols = solve(6, cfg(true, true, true, false));
    assert!(sols.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(sols[0], st("000000"));
}

#[test]
fn small_closed_loops_with_full_symmetry() {
    let all = cfg(true, true, true, true);
    assert_eq!(solve(3, all), vec![st("222")]);
    assert_eq!(solve(5, all), vec![st("12312"), st("13131")]);
    assert_eq!(
        solve(7, all),
        vec![st("0022002"), st("0123032"), st("1232123")]
    );
    assert_eq!(solve(9, all).len(), 13);
}

#[test]
fn twelve_prism_loops() {
    let all = cfg(true, true, true, true);
    let mut sols = Solutions::new(11, all).unwrap();
    let found: Vec<State> = sols.by_ref().collect();
    assert_eq!(found.len(), 70);
    assert_eq!(found[0], st("00002200002"));
    assert_eq!(found[69], st("12132312132"));
    for s in &found {
        assert_eq!(simulate(s, true).as_pair(), (true, 10), "{s}");
    }
    let stats = sols.stats();
    assert_eq!(stats.simulations, 106_159);
    assert_eq!(stats.accepted, 575);
}

#[test]
fn cyclic_counts_per_symmetry_group() {
    // (len, flags, raw loops, classes)
    let cases = [
        (5, (false, false), 8, 3),
        (5, (true, false), 5, 2),
        (5, (false, true), 4, 2),
        (7, (false, false), 16, 3),
        (7, (true, false), 10, 3),
        (7, (false, true), 10, 3),
    ];
    for (len, (reverse, chiral), raw, classes) in cases {
        let mut sols = Solutions::new(len, cfg(true, reverse, chiral, true)).unwrap();
        let n = sols.by_ref().count();
        assert_eq!(n, classes, "len={len} reverse={reverse} chiral={chiral}");
        assert_eq!(sols.stats().accepted, raw);
    }
}

#[test]
fn simulation_counts_are_reproducible() {
    let all = cfg(true, true, true, true);
    for (len, sims) in [(3, 24), (5, 151), (7, 1173), (9, 12_164)] {
        let mut sols = Solutions::new(len, all).unwrap();
        sols.by_ref().for_each(drop);
        assert_eq!(sols.stats().simulations, sims, "len={len}");
    }
}

#[test]
fn yielded_loops_are_pairwise_inequivalent() {
    for c in [cfg(true, true, true, true), cfg(true, false, false, true)] {
        let sym = c.symmetry;
        let sols = solve(9, c);
        for (i, a) in sols.iter().enumerate() {
            let orbit = cyclic_orbit(a, sym.reverse, sym.chiral);
            for b in &sols[i + 1..] {
                assert!(!orbit.contains(b), "{a} ~ {b}");
            }
        }
    }
}

#[test]
fn early_stop_does_less_work() {
    let mut sols = Solutions::new(10, SearchCfg::default()).unwrap();
    let first: Vec<State> = sols.by_ref().take(3).collect();
    assert_eq!(first, vec![st("0000000000"), st("0000000001"), st("0000000002")]);
    assert_eq!(sols.stats().accepted, 3);
    assert_eq!(sols.stats().candidates, 3);
}

#[test]
fn empty_length_is_the_single_prism() {
    assert_eq!(solve(0, SearchCfg::default()), vec![State::default()]);
    assert!(solve(0, cfg(true, true, true, true)).is_empty());
}

#[test]
fn overlong_lengths_are_rejected() {
    assert!(Enumerator::new(32, SearchCfg::default()).is_err());
    assert!(Solutions::new(31, SearchCfg::default()).is_ok());
}
