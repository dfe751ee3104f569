use crate::util::FxIndexMap;

use indexmap::map::Entry;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Marks the start node, which has no parent.
const NO_PARENT: usize = usize::MAX;

#[derive(Debug)]
struct SmallestHolder {
    rank: usize,
    cost: f64,
    index: usize,
}

impl PartialEq for SmallestHolder {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SmallestHolder {}

impl PartialOrd for SmallestHolder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestHolder {
    /// Reversed, so the heap yields the lowest rank first, then the
    /// cheapest entry. Equal costs yield the entry discovered first.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .rank
            .cmp(&self.rank)
            .then_with(|| other.cost.total_cmp(&self.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// A path found by [`Dijkstra::shortest_path`].
///
/// Every step holds the node reached and the edge used to reach it.
/// The first step is the start node, reached by no edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<N, E> {
    pub cost: f64,
    pub steps: Vec<(N, Option<E>)>,
}

/// Single-pair shortest path search over floating point weights.
///
/// Every node carries a rank. Lower ranks are expanded first, and
/// within a rank the cheapest node goes first. When every edge leads
/// to a strictly higher rank, as between the layers of a pseudo graph,
/// all predecessors of a node are expanded before it, so each node is
/// expanded exactly once and negative weights need no special care.
///
/// Should an edge lead to an equal or lower rank, the node it reaches
/// is expanded again whenever its cost drops. The result stays exact
/// for graphs without negative cycles, at the cost of repeated work.
///
/// Successors are relaxed in the order they are yielded. A node keeps
/// the first parent which reached it at its final cost.
pub struct Dijkstra;

impl Dijkstra {
    pub fn shortest_path<N, E, FR, FN, IN>(
        &self,
        start: N,
        target: N,
        mut rank: FR,
        mut successors: FN,
    ) -> Option<ShortestPath<N, E>>
    where
        N: Copy + Eq + Hash,
        E: Copy,
        FR: FnMut(&N) -> usize,
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, E, f64)>,
    {
        let mut to_see: BinaryHeap<SmallestHolder> = BinaryHeap::with_capacity(64);
        to_see.push(SmallestHolder {
            rank: rank(&start),
            cost: 0.0,
            index: 0,
        });

        // Node -> (parent index, edge used, best cost)
        let mut parents: FxIndexMap<N, (usize, Option<E>, f64)> = FxIndexMap::default();
        parents.insert(start, (NO_PARENT, None, 0.0));

        while let Some(SmallestHolder { cost, index, .. }) = to_see.pop() {
            let Some((node, (_, _, best))) = parents.get_index(index) else {
                continue;
            };

            // Superseded by a cheaper entry pushed later.
            if cost > *best {
                continue;
            }

            let node = *node;
            for (successor, edge, move_cost) in successors(&node) {
                let new_cost = cost + move_cost;

                let pushed = match parents.entry(successor) {
                    Entry::Vacant(e) => {
                        let n = e.index();
                        e.insert((index, Some(edge), new_cost));
                        n
                    }
                    Entry::Occupied(mut e) => {
                        if new_cost < e.get().2 {
                            e.insert((index, Some(edge), new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };

                to_see.push(SmallestHolder {
                    rank: rank(&successor),
                    cost: new_cost,
                    index: pushed,
                });
            }
        }

        let mut cursor = parents.get_index_of(&target)?;
        let cost = parents.get_index(cursor)?.1 .2;

        let mut steps = Vec::new();
        while cursor != NO_PARENT {
            let (node, (parent, edge, _)) = parents.get_index(cursor)?;
            steps.push((*node, *edge));
            cursor = *parent;
        }

        steps.reverse();
        Some(ShortestPath { cost, steps })
    }
}
