//! Random workload generation.
//!
//! Produces synthetic process sets for experiments and tests. Pass a seeded
//! RNG for reproducible sets.

use rand::Rng;

use crate::models::Process;

/// Generator for random process sets.
///
/// IDs are `P1..Pn` in generation order. Ranges are inclusive.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let processes = WorkloadGenerator::new(5).generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    arrival: (i64, i64),
    burst: (i64, i64),
    priority: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges:
    /// arrival 0..=20, burst 1..=10, priority 0..=4.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: (0, 20),
            burst: (1, 10),
            priority: (0, 4),
        }
    }

    /// Sets the arrival time range. Negative bounds are clamped to 0.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(0);
        self.arrival = (min, max.max(min));
        self
    }

    /// Sets the burst time range. Bounds below 1 are clamped to 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        let min = min.max(1);
        self.burst = (min, max.max(min));
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = (min, max.max(min));
        self
    }

    /// Generates a process set.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(self.arrival.0..=self.arrival.1),
                    rng.random_range(self.burst.0..=self.burst.1),
                )
                .with_priority(rng.random_range(self.priority.0..=self.priority.1))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_within_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let ps = WorkloadGenerator::new(50)
            .with_arrival_range(3, 9)
            .with_burst_range(2, 4)
            .with_priority_range(-1, 1)
            .generate(&mut rng);

        assert_eq!(ps.len(), 50);
        for p in &ps {
            assert!((3..=9).contains(&p.arrival_time));
            assert!((2..=4).contains(&p.burst_time));
            assert!((-1..=1).contains(&p.priority));
        }
        assert!(validate_processes(&ps).is_ok());
    }

    #[test]
    fn test_generate_is_reproducible() {
        let generator = WorkloadGenerator::new(10);
        let a = generator.generate(&mut StdRng::seed_from_u64(99));
        let b = generator.generate(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ranges_are_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let ps = WorkloadGenerator::new(20)
            .with_arrival_range(-5, -1)
            .with_burst_range(0, 0)
            .generate(&mut rng);
        for p in &ps {
            assert_eq!(p.arrival_time, 0);
            assert_eq!(p.burst_time, 1);
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut rng = StdRng::seed_from_u64(5);
        let ps = WorkloadGenerator::new(3).generate(&mut rng);
        let ids: Vec<&str> = ps.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3"]);
    }
}
