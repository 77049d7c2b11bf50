//! A* search and the Temple Trap solver built on it
//!
//! [`astar`] is generic over the state type: anything `Clone + Eq + Hash`
//! works, with successors, goal test, heuristic and step cost supplied as
//! closures. The open set is a binary heap ordered by f-score with an
//! insertion counter as tie-breaker, so equal-score states are expanded in
//! the order they were discovered and the result is deterministic.
//!
//! [`solve`] runs it over boards with the Temple Trap move set, unit step
//! cost and the Manhattan distance from the pawn to the goal as heuristic.

use super::board::Board;
use super::rules::{Step, TempleTrapRules};
use super::tiles::Terrain;
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

struct OpenNode<S> {
    f: u32,
    counter: u64,
    state: S,
}

impl<S> PartialEq for OpenNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.counter == other.counter
    }
}

impl<S> Eq for OpenNode<S> {}

impl<S> PartialOrd for OpenNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for OpenNode<S> {
    // BinaryHeap is a max-heap; reverse so the lowest f (then oldest) pops first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.counter.cmp(&self.counter))
    }
}

/// Generic A* search
///
/// Returns the sequence of states from `start` to the first goal state
/// expanded, both ends included, or `None` when the goal is unreachable.
/// The heuristic must be admissible for the path to be optimal.
pub fn astar<S, Succ, Goal, Heur, Cost>(
    start: &S,
    mut successors: Succ,
    mut is_goal: Goal,
    mut heuristic: Heur,
    mut cost: Cost,
) -> Option<Vec<S>>
where
    S: Clone + Eq + Hash,
    Succ: FnMut(&S) -> Vec<S>,
    Goal: FnMut(&S) -> bool,
    Heur: FnMut(&S) -> u32,
    Cost: FnMut(&S, &S) -> u32,
{
    if is_goal(start) {
        return Some(vec![start.clone()]);
    }

    let mut g_score: HashMap<S, u32> = HashMap::new();
    let mut f_score: HashMap<S, u32> = HashMap::new();
    let mut came_from: HashMap<S, S> = HashMap::new();
    let mut open = BinaryHeap::new();
    let mut counter = 0u64;

    let start_f = heuristic(start);
    g_score.insert(start.clone(), 0);
    f_score.insert(start.clone(), start_f);
    open.push(OpenNode {
        f: start_f,
        counter,
        state: start.clone(),
    });

    while let Some(OpenNode { f, state, .. }) = open.pop() {
        // stale heap entry, a cheaper route was found after it was pushed
        if f_score.get(&state).is_some_and(|best| f > *best) {
            continue;
        }

        if is_goal(&state) {
            let mut path = vec![state.clone()];
            let mut current = state;
            while let Some(prev) = came_from.get(&current) {
                path.push(prev.clone());
                current = prev.clone();
            }
            path.reverse();
            return Some(path);
        }

        let g_current = g_score.get(&state).copied().unwrap_or(u32::MAX);
        for next in successors(&state) {
            let tentative = g_current.saturating_add(cost(&state, &next));
            let improved = match g_score.entry(next.clone()) {
                Entry::Occupied(mut e) if tentative < *e.get() => {
                    e.insert(tentative);
                    true
                }
                Entry::Occupied(_) => false,
                Entry::Vacant(e) => {
                    e.insert(tentative);
                    true
                }
            };
            if !improved || next == *start {
                continue;
            }
            let next_f = tentative.saturating_add(heuristic(&next));
            came_from.insert(next.clone(), state.clone());
            f_score.insert(next.clone(), next_f);
            counter += 1;
            open.push(OpenNode {
                f: next_f,
                counter,
                state: next,
            });
        }
    }

    None
}

/// Shortest move sequence that brings the pawn to the goal
///
/// Returns an empty list when the board is already solved and `None` when
/// no sequence exists.
pub fn solve(board: &Board) -> Option<Vec<Step>> {
    let rules = TempleTrapRules;
    let goal = board.find_cell(|c| c.terrain == Terrain::Goal)?;

    let path = astar(
        board,
        |b| rules.successors(b).into_iter().map(|(_, next)| next).collect(),
        |b| rules.is_solved(b),
        |b| {
            b.pawns()
                .map(|p| p.coord.manhattan(goal))
                .min()
                .unwrap_or(0)
        },
        |_, _| 1,
    )?;

    let steps = path
        .windows(2)
        .filter_map(|pair| {
            rules
                .successors(&pair[0])
                .into_iter()
                .find(|(_, next)| *next == pair[1])
                .map(|(step, _)| step)
        })
        .collect();
    Some(steps)
}
