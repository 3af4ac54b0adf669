//! Generic informed (A*) search over implicit graphs.
//!
//! The graph is never materialized: edges come from an injected neighbor
//! function, costs and estimates from two more. Any equality-comparable,
//! hashable node type works — tile indices, tiles, abstract states.

use std::collections::HashSet;
use std::hash::Hash;

use crate::path::Path;
use crate::queue::OpenQueue;

/// Caps on a single search call.
///
/// The open set of an informed search is unbounded in the worst case
/// (a large or disconnected graph); a per-call expansion budget keeps
/// latency predictable for frame-driven callers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Maximum number of nodes to expand before giving up; `None` is
    /// unlimited.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No limits: run until the queue empties.
    pub const UNLIMITED: Self = Self {
        max_expansions: None,
    };

    /// Limit the search to `max` node expansions.
    pub const fn expansions(max: usize) -> Self {
        Self {
            max_expansions: Some(max),
        }
    }
}

/// Result of a limited search. No-path and limit-reached are ordinary
/// outcomes, not errors.
#[derive(Debug)]
pub enum SearchOutcome<T> {
    /// The goal was reached; the path runs from start to goal inclusive.
    Found(Path<T>),
    /// The open queue emptied without reaching the goal.
    NoPath,
    /// The expansion budget ran out first; reachability is undecided.
    LimitReached,
}

impl<T> SearchOutcome<T> {
    /// The found path, if any.
    pub fn into_path(self) -> Option<Path<T>> {
        match self {
            SearchOutcome::Found(p) => Some(p),
            _ => None,
        }
    }
}

/// Shortest-path search from `start` to `goal`, or `None` when the goal is
/// unreachable.
///
/// - `step_cost(a, b)` — cost of moving along the edge `a → b`; must be
///   positive.
/// - `estimate(a, goal)` — heuristic remaining cost. Admissibility (never
///   overestimating) is the caller's obligation; the search does not check.
/// - `neighbors(a)` — the outgoing edges of `a`, generated lazily. Obstacle
///   filtering belongs entirely in here.
///
/// Equal-cost candidates are expanded in insertion order, so repeated calls
/// over an unchanged graph return identical paths.
pub fn find_path<T, C, H, N, I>(
    start: T,
    goal: T,
    step_cost: C,
    estimate: H,
    neighbors: N,
) -> Option<Path<T>>
where
    T: Clone + Eq + Hash,
    C: FnMut(&T, &T) -> f64,
    H: FnMut(&T, &T) -> f64,
    N: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    find_path_limited(start, goal, step_cost, estimate, neighbors, SearchLimits::UNLIMITED)
        .into_path()
}

/// [`find_path`] with an explicit expansion budget.
pub fn find_path_limited<T, C, H, N, I>(
    start: T,
    goal: T,
    mut step_cost: C,
    mut estimate: H,
    mut neighbors: N,
    limits: SearchLimits,
) -> SearchOutcome<T>
where
    T: Clone + Eq + Hash,
    C: FnMut(&T, &T) -> f64,
    H: FnMut(&T, &T) -> f64,
    N: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    if start == goal {
        return SearchOutcome::Found(Path::new(start));
    }

    let mut closed: HashSet<T> = HashSet::new();
    let mut open: OpenQueue<Path<T>> = OpenQueue::new();
    let seed_key = estimate(&start, &goal);
    open.push(seed_key, Path::new(start));

    let mut expanded: usize = 0;

    while let Some(path) = open.pop() {
        let current = path.last_step();

        // A cheaper path to this node was expanded earlier; this queue entry
        // is stale.
        if closed.contains(current) {
            continue;
        }
        if *current == goal {
            return SearchOutcome::Found(path);
        }

        if limits.max_expansions.is_some_and(|max| expanded >= max) {
            return SearchOutcome::LimitReached;
        }
        closed.insert(current.clone());
        expanded += 1;

        for next in neighbors(current) {
            // Closed terminals would be discarded at pop anyway; skip the
            // allocation.
            if closed.contains(&next) {
                continue;
            }
            let cost = step_cost(current, &next);
            let key = path.total_cost() + cost + estimate(&next, &goal);
            open.push(key, path.extend(next, cost));
        }
    }

    SearchOutcome::NoPath
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::hex_steps;
    use hexfield_core::{MapConfig, Point, TileGrid, TileKind};
    use std::collections::{HashMap, VecDeque};

    fn open_grid(w: i32, h: i32) -> TileGrid {
        TileGrid::new(&MapConfig {
            count_x: w,
            count_y: h,
            ..Default::default()
        })
        .unwrap()
    }

    fn walkable_neighbors<'a>(grid: &'a TileGrid) -> impl FnMut(&Point) -> Vec<Point> + 'a {
        move |p: &Point| {
            grid.neighbors(*p)
                .filter(|&n| grid[n].kind.is_walkable())
                .collect()
        }
    }

    /// Brute-force shortest step count over the same neighbor function.
    fn bfs_steps(grid: &TileGrid, start: Point, goal: Point) -> Option<usize> {
        let mut dist: HashMap<Point, usize> = HashMap::new();
        let mut queue = VecDeque::new();
        dist.insert(start, 0);
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            if p == goal {
                return Some(dist[&p]);
            }
            let d = dist[&p];
            for n in grid.neighbors(p).filter(|&n| grid[n].kind.is_walkable()) {
                dist.entry(n).or_insert_with(|| {
                    queue.push_back(n);
                    d + 1
                });
            }
        }
        None
    }

    fn hex_estimate(a: &Point, b: &Point) -> f64 {
        hex_steps(*a, *b) as f64
    }

    #[test]
    fn line_graph_shortest_path() {
        let path = find_path(
            2i32,
            7,
            |_, _| 1.0,
            |n, goal| (goal - n).abs() as f64,
            |n| {
                let n = *n;
                (0..10).filter(move |&m| (m - n).abs() == 1)
            },
        )
        .expect("reachable");
        assert_eq!(path.to_vec(), vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(path.total_cost(), 5.0);
    }

    #[test]
    fn start_equals_goal_is_a_single_node_zero_cost_path() {
        let grid = open_grid(3, 3);
        let p = Point::new(1, 1);
        let path = find_path(p, p, |_, _| 1.0, hex_estimate, walkable_neighbors(&grid))
            .expect("trivial");
        assert_eq!(path.len(), 1);
        assert_eq!(path.total_cost(), 0.0);
        assert_eq!(*path.last_step(), p);
    }

    #[test]
    fn matches_bfs_on_fully_walkable_grid() {
        let grid = open_grid(3, 3);
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);

        let path = find_path(start, goal, |_, _| 1.0, hex_estimate, walkable_neighbors(&grid))
            .expect("open grid");
        assert_eq!(*path.last_step(), goal);
        assert_eq!(path.to_vec()[0], start);

        let shortest = bfs_steps(&grid, start, goal).unwrap();
        assert_eq!(path.len() - 1, shortest);
        assert_eq!(path.total_cost(), shortest as f64);

        // Every consecutive pair is hex-adjacent.
        let steps = path.to_vec();
        for pair in steps.windows(2) {
            assert_eq!(hex_steps(pair[0], pair[1]), 1);
        }
    }

    #[test]
    fn walled_in_goal_has_no_path() {
        let mut grid = open_grid(5, 5);
        let goal = Point::new(3, 2);
        let ring: Vec<Point> = grid.neighbors(goal).collect();
        for n in ring {
            grid.set_kind(n, TileKind::Wall);
        }
        let result = find_path(
            Point::new(0, 0),
            goal,
            |_, _| 1.0,
            hex_estimate,
            walkable_neighbors(&grid),
        );
        assert!(result.is_none());
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let mut grid = open_grid(6, 6);
        grid.set_kind(Point::new(2, 2), TileKind::Wall);
        grid.set_kind(Point::new(3, 2), TileKind::Wall);
        let run = |grid: &TileGrid| {
            find_path(
                Point::new(0, 0),
                Point::new(5, 5),
                |_, _| 1.0,
                hex_estimate,
                walkable_neighbors(grid),
            )
            .expect("reachable")
            .to_vec()
        };
        let first = run(&grid);
        for _ in 0..4 {
            assert_eq!(run(&grid), first);
        }
    }

    #[test]
    fn toggling_an_obstacle_is_reflected_on_the_next_search() {
        // 1-wide corridor: walls across the middle column except one gap.
        let mut grid = open_grid(5, 5);
        for y in 0..5 {
            grid.set_kind(Point::new(2, y), TileKind::Wall);
        }
        let start = Point::new(0, 2);
        let goal = Point::new(4, 2);
        let search = |grid: &TileGrid| {
            find_path(start, goal, |_, _| 1.0, hex_estimate, walkable_neighbors(grid))
        };

        assert!(search(&grid).is_none());

        let gap = Point::new(2, 2);
        grid.set_kind(gap, TileKind::Wall.toggled());
        let through = search(&grid).expect("gap opened");
        assert!(through.steps().any(|&p| p == gap));

        grid.set_kind(gap, TileKind::Wall);
        assert!(search(&grid).is_none());
    }

    #[test]
    fn expansion_budget_stops_runaway_searches() {
        // Infinite forward-only graph; the goal is behind the start and
        // unreachable, so an unlimited search would never terminate.
        let outcome = find_path_limited(
            0i64,
            -1,
            |_, _| 1.0,
            |_, _| 0.0,
            |n| [n + 1],
            SearchLimits::expansions(100),
        );
        assert!(matches!(outcome, SearchOutcome::LimitReached));
    }

    #[test]
    fn budget_large_enough_still_finds_the_path() {
        let grid = open_grid(4, 4);
        let outcome = find_path_limited(
            Point::new(0, 0),
            Point::new(3, 3),
            |_, _| 1.0,
            hex_estimate,
            walkable_neighbors(&grid),
            SearchLimits::expansions(1000),
        );
        let path = outcome.into_path().expect("within budget");
        assert_eq!(*path.last_step(), Point::new(3, 3));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_limits_round_trip() {
        let limits = SearchLimits::expansions(512);
        let json = serde_json::to_string(&limits).unwrap();
        let back: SearchLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(limits, back);
    }
}
