//! Classic load-balancing strategies.

use rand::Rng;

use super::LoadMetrics;

/// Round robin: request `i` goes to instance `i mod instances`.
pub fn round_robin(requests: u64, instances: usize) -> LoadMetrics {
    if instances == 0 {
        return LoadMetrics::calculate(Vec::new()).with_algorithm("Round Robin");
    }

    let mut distribution = vec![0u64; instances];
    for i in 0..requests {
        distribution[(i % instances as u64) as usize] += 1;
    }
    LoadMetrics::calculate(distribution).with_algorithm("Round Robin")
}

/// Least connections: each request goes to the currently lightest instance
/// (ties: lowest index).
///
/// `initial_loads` seeds the per-instance connection counts, so a skewed
/// starting state is balanced out before new load accumulates evenly.
pub fn least_connections(requests: u64, initial_loads: &[u64]) -> LoadMetrics {
    let mut loads = initial_loads.to_vec();
    for _ in 0..requests {
        let mut lightest = 0usize;
        for (index, &load) in loads.iter().enumerate() {
            if load < loads[lightest] {
                lightest = index;
            }
        }
        if let Some(load) = loads.get_mut(lightest) {
            *load += 1;
        }
    }
    LoadMetrics::calculate(loads).with_algorithm("Least Connections")
}

/// Random: each request goes to a uniformly random instance.
pub fn random<R: Rng + ?Sized>(requests: u64, instances: usize, rng: &mut R) -> LoadMetrics {
    if instances == 0 {
        return LoadMetrics::calculate(Vec::new()).with_algorithm("Random");
    }

    let mut distribution = vec![0u64; instances];
    for _ in 0..requests {
        distribution[rng.random_range(0..instances)] += 1;
    }
    LoadMetrics::calculate(distribution).with_algorithm("Random")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round_robin_is_even() {
        let m = round_robin(9, 3);
        assert_eq!(m.distribution, vec![3, 3, 3]);
        assert_eq!(m.load_imbalance, 0);
    }

    #[test]
    fn test_round_robin_remainder_goes_to_front() {
        let m = round_robin(10, 3);
        assert_eq!(m.distribution, vec![4, 3, 3]);
        assert_eq!(m.total_requests(), 10);
    }

    #[test]
    fn test_round_robin_no_instances() {
        let m = round_robin(10, 0);
        assert!(m.distribution.is_empty());
    }

    #[test]
    fn test_least_connections_balances_skewed_start() {
        // Instance 0 starts with 5 open connections; new requests avoid it
        // until the others catch up.
        let m = least_connections(10, &[5, 0, 0]);
        assert_eq!(m.distribution, vec![5, 5, 5]);
        assert_eq!(m.total_requests(), 15);
    }

    #[test]
    fn test_least_connections_tie_prefers_lowest_index() {
        let m = least_connections(1, &[0, 0]);
        assert_eq!(m.distribution, vec![1, 0]);
    }

    #[test]
    fn test_random_conserves_requests() {
        let mut rng = StdRng::seed_from_u64(3);
        let m = random(100, 4, &mut rng);
        assert_eq!(m.total_requests(), 100);
        assert_eq!(m.distribution.len(), 4);
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let a = random(50, 5, &mut StdRng::seed_from_u64(9));
        let b = random(50, 5, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.distribution, b.distribution);
    }
}
