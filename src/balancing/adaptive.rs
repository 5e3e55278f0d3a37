//! Adaptive load-balancing heuristics.
//!
//! Five "smart" balancers for what-if comparisons against the classic
//! strategies: a genetic search over whole distributions, a resource-aware
//! greedy picker, an epsilon-greedy reinforcement loop, an IoT-signal
//! scorer, and a transfer-learning variant seeded from a pretrained policy.
//!
//! These are deliberately small, illustrative heuristics. They make no
//! claim of statistical validity; they exist so the simulator can put
//! numbers next to the classic strategies.

use rand::Rng;

use super::LoadMetrics;

/// Genetic search parameters.
#[derive(Debug, Clone, Copy)]
pub struct GeneticConfig {
    /// Number of generations to evolve.
    pub generations: usize,
    /// Candidate distributions per generation.
    pub population_size: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            generations: 40,
            population_size: 10,
        }
    }
}

impl GeneticConfig {
    /// Sets the generation count.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }
}

/// Epsilon-greedy reinforcement parameters.
#[derive(Debug, Clone, Copy)]
pub struct ReinforcementConfig {
    /// Exploration probability per request.
    pub epsilon: f64,
    /// Q-value learning rate.
    pub learning_rate: f64,
}

impl Default for ReinforcementConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.1,
            learning_rate: 0.2,
        }
    }
}

impl ReinforcementConfig {
    /// Sets the exploration probability.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }
}

/// Declared capacity and per-request cost of one service instance.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCapacity {
    /// Total CPU headroom.
    pub cpu_capacity: f64,
    /// Total memory headroom.
    pub mem_capacity: f64,
    /// CPU consumed per assigned request.
    pub cpu_cost: f64,
    /// Memory consumed per assigned request.
    pub mem_cost: f64,
}

impl ServiceCapacity {
    /// Creates a capacity with unit per-request costs.
    pub fn new(cpu_capacity: f64, mem_capacity: f64) -> Self {
        Self {
            cpu_capacity,
            mem_capacity,
            cpu_cost: 1.0,
            mem_cost: 1.0,
        }
    }

    /// Sets the per-request resource costs.
    pub fn with_costs(mut self, cpu_cost: f64, mem_cost: f64) -> Self {
        self.cpu_cost = cpu_cost;
        self.mem_cost = mem_cost;
        self
    }
}

/// Ambient telemetry of one service instance's host.
#[derive(Debug, Clone, Copy)]
pub struct IotSignal {
    /// Observed request latency.
    pub latency: f64,
    /// Host CPU temperature.
    pub cpu_temp: f64,
    /// Network path delay.
    pub network_delay: f64,
}

impl IotSignal {
    /// Creates a signal sample.
    pub fn new(latency: f64, cpu_temp: f64, network_delay: f64) -> Self {
        Self {
            latency,
            cpu_temp,
            network_delay,
        }
    }
}

/// Outcome of the transfer-learning balancer: the distribution metrics plus
/// the adapted policy values.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// Distribution statistics.
    pub metrics: LoadMetrics,
    /// Q-values after adaptation, one per instance.
    pub final_q: Vec<f64>,
}

/// Genetic algorithm: evolves whole request distributions toward minimal
/// variance.
///
/// Fitness is negated population variance. Each generation keeps the two
/// best candidates, then breeds the rest by single-point crossover between
/// parents drawn from the top five, repairing children so every candidate
/// keeps assigning exactly `requests` requests.
pub fn genetic<R: Rng + ?Sized>(
    requests: u64,
    instances: usize,
    config: GeneticConfig,
    rng: &mut R,
) -> LoadMetrics {
    const NAME: &str = "Genetic Algorithm LB";

    if instances == 0 {
        return LoadMetrics::calculate(Vec::new()).with_algorithm(NAME);
    }
    if instances == 1 {
        return LoadMetrics::calculate(vec![requests]).with_algorithm(NAME);
    }

    let population_size = config.population_size.max(2);
    let mut population: Vec<Vec<u64>> = (0..population_size)
        .map(|_| random_distribution(requests, instances, rng))
        .collect();

    for _ in 0..config.generations {
        population.sort_by(|a, b| variance_of(a).partial_cmp(&variance_of(b)).unwrap_or(std::cmp::Ordering::Equal));

        let mut next: Vec<Vec<u64>> = population[..2].to_vec();
        let parent_pool = population.len().min(5);
        while next.len() < population_size {
            let first = rng.random_range(0..parent_pool);
            let mut second = rng.random_range(0..parent_pool - 1);
            if second >= first {
                second += 1;
            }

            let cut = rng.random_range(1..instances);
            let mut child: Vec<u64> = population[first][..cut]
                .iter()
                .chain(&population[second][cut..])
                .copied()
                .collect();
            repair(&mut child, requests, rng);
            next.push(child);
        }
        population = next;
    }

    population.sort_by(|a, b| variance_of(a).partial_cmp(&variance_of(b)).unwrap_or(std::cmp::Ordering::Equal));
    let best = population.into_iter().next().unwrap_or_default();
    LoadMetrics::calculate(best).with_algorithm(NAME)
}

fn random_distribution<R: Rng + ?Sized>(
    requests: u64,
    instances: usize,
    rng: &mut R,
) -> Vec<u64> {
    let mut distribution = vec![0u64; instances];
    for _ in 0..requests {
        distribution[rng.random_range(0..instances)] += 1;
    }
    distribution
}

fn variance_of(distribution: &[u64]) -> f64 {
    let n = distribution.len() as f64;
    let mean = distribution.iter().sum::<u64>() as f64 / n;
    distribution
        .iter()
        .map(|&x| {
            let d = x as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

/// Adjusts a crossover child until it assigns exactly `requests` requests.
fn repair<R: Rng + ?Sized>(child: &mut [u64], requests: u64, rng: &mut R) {
    let mut total: u64 = child.iter().sum();
    while total < requests {
        child[rng.random_range(0..child.len())] += 1;
        total += 1;
    }
    while total > requests {
        let index = rng.random_range(0..child.len());
        if child[index] > 0 {
            child[index] -= 1;
            total -= 1;
        }
    }
}

/// Resource-based (IRB): each request goes to the instance with the most
/// combined CPU + memory headroom, which then pays its per-request cost.
pub fn resource_based(requests: u64, capacities: &[ServiceCapacity]) -> LoadMetrics {
    const NAME: &str = "IRB LB";

    if capacities.is_empty() {
        return LoadMetrics::calculate(Vec::new()).with_algorithm(NAME);
    }

    let mut used_cpu = vec![0.0f64; capacities.len()];
    let mut used_mem = vec![0.0f64; capacities.len()];
    let mut distribution = vec![0u64; capacities.len()];

    for _ in 0..requests {
        let mut best = 0usize;
        let mut best_headroom = f64::NEG_INFINITY;
        for (index, cap) in capacities.iter().enumerate() {
            let headroom =
                (cap.cpu_capacity - used_cpu[index]) + (cap.mem_capacity - used_mem[index]);
            if headroom > best_headroom {
                best_headroom = headroom;
                best = index;
            }
        }

        distribution[best] += 1;
        used_cpu[best] += capacities[best].cpu_cost;
        used_mem[best] += capacities[best].mem_cost;
    }

    LoadMetrics::calculate(distribution).with_algorithm(NAME)
}

/// Reinforcement round-robin (RRB): epsilon-greedy selection on per-instance
/// Q-values, rewarded by the inverse of a load-proportional response time.
pub fn reinforcement<R: Rng + ?Sized>(
    requests: u64,
    instances: usize,
    config: ReinforcementConfig,
    rng: &mut R,
) -> LoadMetrics {
    const NAME: &str = "RRB LB";

    if instances == 0 {
        return LoadMetrics::calculate(Vec::new()).with_algorithm(NAME);
    }

    let mut q = vec![1.0f64; instances];
    let mut loads = vec![0u64; instances];
    let mut distribution = vec![0u64; instances];

    for _ in 0..requests {
        let index = if rng.random::<f64>() < config.epsilon {
            rng.random_range(0..instances)
        } else {
            argmax(&q)
        };

        let response = 1.0 + 0.15 * loads[index] as f64;
        let reward = 1.0 / response;
        q[index] += config.learning_rate * (reward - q[index]);

        distribution[index] += 1;
        loads[index] += 1;
    }

    LoadMetrics::calculate(distribution).with_algorithm(NAME)
}

/// IoT-aware: scores each instance by summed inverse telemetry (latency,
/// network delay, CPU temperature) and routes greedily.
///
/// Signals are sampled once for the whole batch, so the best-scoring host
/// absorbs every request; the point of the comparison is how skewed that
/// leaves the distribution.
pub fn iot_aware(requests: u64, signals: &[IotSignal]) -> LoadMetrics {
    const NAME: &str = "IoT-based CI/CD LB";
    const EPS: f64 = 1e-6;

    if signals.is_empty() {
        return LoadMetrics::calculate(Vec::new()).with_algorithm(NAME);
    }

    let scores: Vec<f64> = signals
        .iter()
        .map(|s| 1.0 / (s.latency + EPS) + 1.0 / (s.network_delay + EPS) + 1.0 / (s.cpu_temp + EPS))
        .collect();

    let mut distribution = vec![0u64; signals.len()];
    for _ in 0..requests {
        distribution[argmax(&scores)] += 1;
    }

    LoadMetrics::calculate(distribution).with_algorithm(NAME)
}

/// Transfer learning (TL): starts from a pretrained Q vector and adapts it
/// greedily while routing; returns the adapted policy alongside the metrics.
///
/// `pretrained_q` is truncated to `instances` entries and padded with the
/// neutral initial value 1.0 when shorter.
pub fn transfer_learning(
    requests: u64,
    instances: usize,
    pretrained_q: &[f64],
    learning_rate: f64,
) -> TransferOutcome {
    const NAME: &str = "TL-based CI/CD LB";

    if instances == 0 {
        return TransferOutcome {
            metrics: LoadMetrics::calculate(Vec::new()).with_algorithm(NAME),
            final_q: Vec::new(),
        };
    }

    let mut q: Vec<f64> = pretrained_q.iter().copied().take(instances).collect();
    q.resize(instances, 1.0);

    let mut loads = vec![0u64; instances];
    let mut distribution = vec![0u64; instances];

    for _ in 0..requests {
        let index = argmax(&q);
        let response = 1.0 + 0.2 * loads[index] as f64;
        let reward = 1.0 / response;
        q[index] += learning_rate * (reward - q[index]);

        distribution[index] += 1;
        loads[index] += 1;
    }

    TransferOutcome {
        metrics: LoadMetrics::calculate(distribution).with_algorithm(NAME),
        final_q: q,
    }
}

/// Index of the largest value; ties go to the lowest index.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0usize;
    for (index, &value) in values.iter().enumerate() {
        if value > values[best] {
            best = index;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_genetic_conserves_requests() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = GeneticConfig::default()
            .with_generations(10)
            .with_population_size(6);
        let m = genetic(20, 4, config, &mut rng);

        assert_eq!(m.total_requests(), 20);
        assert_eq!(m.distribution.len(), 4);
    }

    #[test]
    fn test_genetic_improves_on_random_spread() {
        let mut rng = StdRng::seed_from_u64(2);
        let m = genetic(100, 5, GeneticConfig::default(), &mut rng);

        // Variance-minimizing search should end far closer to even than a
        // single random assignment typically lands.
        assert!(m.variance < 40.0);
        assert_eq!(m.total_requests(), 100);
    }

    #[test]
    fn test_genetic_degenerate_instance_counts() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(genetic(10, 0, GeneticConfig::default(), &mut rng)
            .distribution
            .is_empty());
        assert_eq!(
            genetic(10, 1, GeneticConfig::default(), &mut rng).distribution,
            vec![10]
        );
    }

    #[test]
    fn test_resource_based_prefers_headroom() {
        let capacities = [
            ServiceCapacity::new(1.0, 1.0),
            ServiceCapacity::new(100.0, 100.0),
        ];
        let m = resource_based(10, &capacities);

        // The big instance absorbs everything before its headroom drops
        // below the small one's.
        assert_eq!(m.distribution, vec![0, 10]);
    }

    #[test]
    fn test_resource_based_alternates_between_equals() {
        let capacities = [ServiceCapacity::new(50.0, 50.0); 2];
        let m = resource_based(10, &capacities);

        assert_eq!(m.distribution, vec![5, 5]);
    }

    #[test]
    fn test_reinforcement_conserves_requests() {
        let mut rng = StdRng::seed_from_u64(4);
        let m = reinforcement(200, 3, ReinforcementConfig::default(), &mut rng);

        assert_eq!(m.total_requests(), 200);
        assert_eq!(m.distribution.len(), 3);
    }

    #[test]
    fn test_reinforcement_greedy_only_still_spreads() {
        // With epsilon 0 the decaying reward pushes selection off saturated
        // instances, so more than one instance gets traffic.
        let mut rng = StdRng::seed_from_u64(5);
        let config = ReinforcementConfig::default().with_epsilon(0.0);
        let m = reinforcement(100, 4, config, &mut rng);

        let active = m.distribution.iter().filter(|&&x| x > 0).count();
        assert!(active > 1);
    }

    #[test]
    fn test_iot_routes_to_healthiest_host() {
        let signals = [
            IotSignal::new(10.0, 80.0, 5.0),
            IotSignal::new(1.0, 40.0, 1.0),
        ];
        let m = iot_aware(8, &signals);

        assert_eq!(m.distribution, vec![0, 8]);
    }

    #[test]
    fn test_iot_empty_signals() {
        assert!(iot_aware(5, &[]).distribution.is_empty());
    }

    #[test]
    fn test_transfer_learning_follows_pretrained_policy() {
        let outcome = transfer_learning(10, 3, &[0.1, 0.9, 0.2], 0.1);

        // Highest pretrained Q attracts the first request.
        assert!(outcome.metrics.distribution[1] > 0);
        assert_eq!(outcome.metrics.total_requests(), 10);
        assert_eq!(outcome.final_q.len(), 3);
    }

    #[test]
    fn test_transfer_learning_pads_short_q_vector() {
        let outcome = transfer_learning(4, 4, &[0.5], 0.1);
        assert_eq!(outcome.final_q.len(), 4);
        assert_eq!(outcome.metrics.distribution.len(), 4);
    }

    #[test]
    fn test_argmax_tie_is_lowest_index() {
        assert_eq!(argmax(&[1.0, 1.0, 0.5]), 0);
    }
}
