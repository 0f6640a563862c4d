/*! Linear-time selection: find the k-th smallest element of a slice by
repeatedly draining a soft heap for an approximate pivot, partitioning, and
recursing into the side that must contain rank k.

Six [`Policy`] variants tune how many items go into the heap, how many are
drained, and what corruption `eps` the heap is built with, each trading
accuracy for delete-min calls differently depending on where `k` sits
relative to `n`.
*/

use std::cmp::Reverse;

use rand::Rng;

use crate::error::SelectError;
use crate::softheap::SoftHeap;

/// A pivot-selection strategy. See each variant's `plan_for` arm for the
/// heap size / corruption / sampling choices it makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Baseline,
    TuneEps,
    TuneBoth,
    Mirror,
    Sample,
    RandomPivot,
}

/// Observation hook for external tooling (visualizers, instrumentation)
/// that wants to watch a selection run without altering it. Both methods
/// default to no-ops; implement only the one you need.
pub trait Observer<T> {
    fn on_input(&mut self, k: usize, xs: &[T]) {
        let _ = (k, xs);
    }
    fn on_partition(&mut self, pivot: &T, l: &[T], r: &[T]) {
        let _ = (pivot, l, r);
    }
}

/// The default observer: watches nothing.
pub struct NullObserver;
impl<T> Observer<T> for NullObserver {}

enum PivotPlan {
    RandomFromInput,
    Heap { max_heap: bool, sample: bool, delete_min_calls: usize, eps: f64 },
}

fn mirrored(k: usize, n: usize, max_heap: bool) -> (usize, f64) {
    let k_h = if max_heap { n - k + 1 } else { k };
    (k_h, k_h as f64 / n as f64)
}

fn clamp_eps(eps: f64) -> f64 {
    eps.max(0.0)
}

fn plan_for(policy: Policy, k: usize, n: usize) -> PivotPlan {
    let r = k as f64 / n as f64;
    let at_least_one = |v: usize| v.max(1);

    match policy {
        Policy::Baseline => PivotPlan::Heap {
            max_heap: false,
            sample: false,
            delete_min_calls: at_least_one(n / 3),
            eps: 1.0 / 3.0,
        },
        Policy::TuneEps => {
            let eps = if r >= 1.0 / 3.0 { r - 1.0 / 3.0 } else { 0.1 };
            PivotPlan::Heap {
                max_heap: false,
                sample: false,
                delete_min_calls: at_least_one(n / 3),
                eps: clamp_eps(eps),
            }
        }
        Policy::TuneBoth => {
            if r >= 2.0 / 3.0 {
                PivotPlan::Heap {
                    max_heap: false,
                    sample: false,
                    delete_min_calls: at_least_one(2 * n / 3),
                    eps: clamp_eps(r - 2.0 / 3.0),
                }
            } else if r >= 1.0 / 3.0 {
                PivotPlan::Heap {
                    max_heap: false,
                    sample: false,
                    delete_min_calls: at_least_one(n / 3),
                    eps: clamp_eps(r - 1.0 / 3.0),
                }
            } else {
                PivotPlan::Heap {
                    max_heap: false,
                    sample: false,
                    delete_min_calls: at_least_one(k),
                    eps: clamp_eps(r),
                }
            }
        }
        Policy::Mirror => {
            let max_heap = r > 0.5;
            let (k_h, r_h) = mirrored(k, n, max_heap);
            if r_h >= 1.0 / 3.0 {
                PivotPlan::Heap {
                    max_heap,
                    sample: false,
                    delete_min_calls: at_least_one(n / 3),
                    eps: clamp_eps(r_h - 1.0 / 3.0),
                }
            } else {
                PivotPlan::Heap {
                    max_heap,
                    sample: false,
                    delete_min_calls: at_least_one(k_h),
                    eps: clamp_eps(r_h),
                }
            }
        }
        Policy::Sample => {
            let max_heap = r > 0.5;
            let (k_h, r_h) = mirrored(k, n, max_heap);
            if r_h >= 1.0 / 3.0 {
                PivotPlan::Heap {
                    max_heap,
                    sample: true,
                    delete_min_calls: at_least_one(n / 15),
                    eps: clamp_eps(r_h - 1.0 / 6.0),
                }
            } else {
                PivotPlan::Heap {
                    max_heap,
                    sample: false,
                    delete_min_calls: at_least_one(k_h),
                    eps: clamp_eps(r_h),
                }
            }
        }
        Policy::RandomPivot => {
            let max_heap = r > 0.5;
            let (k_h, r_h) = mirrored(k, n, max_heap);
            if r_h >= 1.0 / 3.0 {
                PivotPlan::RandomFromInput
            } else {
                PivotPlan::Heap {
                    max_heap,
                    sample: false,
                    delete_min_calls: at_least_one(k_h),
                    eps: clamp_eps(r_h),
                }
            }
        }
    }
}

fn sample_without_replacement<K: Clone>(rng: &mut impl Rng, items: Vec<K>) -> Vec<K> {
    let n = items.len();
    let m = ((n as f64) / 5.0).ceil() as usize;
    let m = m.clamp(1, n);
    rand::seq::index::sample(rng, n, m).into_iter().map(|i| items[i].clone()).collect()
}

/// Inserts every item into a fresh heap of the given corruption, then
/// performs `delete_min_calls` find-min/delete-min pairs, returning the
/// largest key observed along the way (in `K`'s own ordering; callers
/// pass `Reverse<T>` for the max-heap policies and unwrap the result).
fn drain_tracking_max<K: Ord + Clone>(
    eps: f64,
    items: impl IntoIterator<Item = K>,
    delete_min_calls: usize,
) -> K {
    let mut heap = SoftHeap::new(eps)
        .expect("select: policy eps is always clamped to [0, 1)");
    for item in items {
        heap.insert(item);
    }
    let mut max_seen: Option<K> = None;
    for _ in 0..delete_min_calls {
        if heap.is_empty() {
            break;
        }
        let cur = heap
            .find_min()
            .expect("select: heap reported non-empty by is_empty")
            .clone();
        heap.delete_min().expect("select: heap reported non-empty by is_empty");
        max_seen = match max_seen {
            Some(prev) if prev >= cur => Some(prev),
            _ => Some(cur),
        };
    }
    max_seen.expect("select: delete_min_calls is clamped to at least 1 over a non-empty input")
}

fn choose_pivot<T: Ord + Clone>(k: usize, xs: &[T], policy: Policy, rng: &mut impl Rng) -> T {
    let n = xs.len();
    match plan_for(policy, k, n) {
        PivotPlan::RandomFromInput => {
            let idx = rng.random_range(0..n);
            xs[idx].clone()
        }
        PivotPlan::Heap { max_heap, sample, delete_min_calls, eps } => {
            if max_heap {
                let prepared: Vec<Reverse<T>> = xs.iter().cloned().map(Reverse).collect();
                let prepared = if sample { sample_without_replacement(rng, prepared) } else { prepared };
                drain_tracking_max(eps, prepared, delete_min_calls).0
            } else {
                let prepared: Vec<T> = xs.to_vec();
                let prepared = if sample { sample_without_replacement(rng, prepared) } else { prepared };
                drain_tracking_max(eps, prepared, delete_min_calls)
            }
        }
    }
}

/// Returns the k-th smallest (1-indexed) element of `xs`.
///
/// `xs` is read-only; all work happens on cloned copies. Recurses into
/// whichever side of the pivot partition must contain rank `k`.
pub fn select<T: Ord + Clone>(
    k: usize,
    xs: &[T],
    policy: Policy,
    rng: &mut impl Rng,
    observer: &mut impl Observer<T>,
) -> Result<T, SelectError> {
    let n = xs.len();
    if n == 0 {
        return Err(SelectError::Empty);
    }
    if k == 0 || k > n {
        return Err(SelectError::InvalidRank { k, n });
    }
    observer.on_input(k, xs);

    if n <= 3 {
        let mut sorted = xs.to_vec();
        sorted.sort();
        return Ok(sorted[k - 1].clone());
    }

    let pivot = choose_pivot(k, xs, policy, rng);

    let mut l = Vec::new();
    let mut r = Vec::new();
    for x in xs {
        if *x < pivot {
            l.push(x.clone());
        } else if *x > pivot {
            r.push(x.clone());
        }
    }
    observer.on_partition(&pivot, &l, &r);

    if l.len() == k - 1 {
        Ok(pivot)
    } else if l.len() >= k {
        select(k, &l, policy, rng, observer)
    } else {
        select(k - l.len() - 1, &r, policy, rng, observer)
    }
}

/// `select` with no observer attached.
pub fn select_simple<T: Ord + Clone>(
    k: usize,
    xs: &[T],
    policy: Policy,
    rng: &mut impl Rng,
) -> Result<T, SelectError> {
    select(k, xs, policy, rng, &mut NullObserver)
}
