/// Orders `pool` non-decreasing by `key` using repeated minimum extraction.
///
/// Ties keep their original relative order: the scan only replaces the current
/// minimum on a strictly smaller key, so the first occurrence wins each round.
/// Downstream placement relies on this to stay reproducible, so do not swap
/// this out for an unstable sort. O(n²), which is fine at roster scale.
pub fn rank_ascending<T, K, F>(mut pool: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut ranked = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let mut min_idx = 0;
        for i in 1..pool.len() {
            if key(&pool[i]) < key(&pool[min_idx]) {
                min_idx = i;
            }
        }
        ranked.push(pool.remove(min_idx));
    }
    ranked
}
