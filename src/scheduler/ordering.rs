//! Ordering and selection helpers shared by the policies.

use crate::models::Process;

/// Stable sort by ascending arrival time. Equal arrivals keep input order.
pub(crate) fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by_key(|p| p.arrival_time);
}

/// Index of the arrived, unfinished process with the smallest `key`.
///
/// Ties go to the lowest index, which after [`sort_by_arrival`] is the
/// earliest arrival.
pub(crate) fn select_min<F>(processes: &[Process], now: i64, key: F) -> Option<usize>
where
    F: Fn(&Process) -> i64,
{
    let mut best: Option<(usize, i64)> = None;
    for (index, p) in processes.iter().enumerate() {
        if p.is_completed() || p.arrival_time > now {
            continue;
        }
        let k = key(p);
        if best.map_or(true, |(_, best_k)| k < best_k) {
            best = Some((index, k));
        }
    }
    best.map(|(index, _)| index)
}

/// Earliest arrival among unfinished processes.
pub(crate) fn next_arrival(processes: &[Process]) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_completed())
        .map(|p| p.arrival_time)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_stable() {
        let mut ps = vec![
            Process::new("B", 2, 1),
            Process::new("A1", 0, 1),
            Process::new("C", 2, 1),
            Process::new("A2", 0, 1),
        ];
        sort_by_arrival(&mut ps);
        let ids: Vec<&str> = ps.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A2", "B", "C"]);
    }

    #[test]
    fn test_select_min_first_found_wins_ties() {
        let ps = vec![
            Process::new("A", 0, 3),
            Process::new("B", 1, 3),
            Process::new("C", 1, 2),
        ];
        assert_eq!(select_min(&ps, 0, |p| p.burst_time), Some(0));
        assert_eq!(select_min(&ps, 1, |p| p.burst_time), Some(2));
        let ps = vec![Process::new("A", 0, 3), Process::new("B", 0, 3)];
        assert_eq!(select_min(&ps, 5, |p| p.burst_time), Some(0));
    }

    #[test]
    fn test_select_min_skips_future_and_completed() {
        let mut ps = vec![Process::new("A", 0, 1), Process::new("B", 4, 1)];
        ps[0].dispatch(0);
        ps[0].execute(1, 1);
        assert_eq!(select_min(&ps, 1, |p| p.remaining_time()), None);
        assert_eq!(next_arrival(&ps), Some(4));
    }
}
