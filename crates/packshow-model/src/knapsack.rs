use packshow_solver::{ConstraintOp, MipProblem, SolutionStatus, Solver};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A randomly generated 0/1 knapsack instance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackInstance {
    /// Item values, drawn uniformly from [1, 25)
    pub values: Vec<f64>,
    /// Item weights, drawn uniformly from [5, 100)
    pub weights: Vec<f64>,
    /// 70% of the total generated weight
    pub capacity: f64,
}

impl KnapsackInstance {
    /// Generate an instance from a fixed seed. The same seed and item
    /// count always produce the same values, weights, and capacity.
    pub fn generate(num_items: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::generate_with(num_items, &mut rng)
    }

    /// Generate an instance from a caller-supplied random source.
    pub fn generate_with(num_items: usize, rng: &mut impl Rng) -> Self {
        let values: Vec<f64> = (0..num_items).map(|_| rng.gen_range(1.0..25.0)).collect();
        let weights: Vec<f64> = (0..num_items).map(|_| rng.gen_range(5.0..100.0)).collect();
        let capacity = 0.7 * weights.iter().sum::<f64>();
        Self {
            values,
            weights,
            capacity,
        }
    }

    /// Build the binary program: maximize total value of the selected
    /// items subject to the single capacity constraint.
    pub fn to_problem(&self) -> MipProblem {
        let mut problem = MipProblem::new();
        for i in 0..self.values.len() {
            problem.push_binary(format!("x{i}"));
        }
        problem.set_objective(self.values.clone(), true);
        problem.add_constraint(
            "capacity",
            self.weights.clone(),
            ConstraintOp::Le,
            self.capacity,
        );
        problem
    }

    pub fn num_items(&self) -> usize {
        self.values.len()
    }
}

/// Outcome of solving a knapsack instance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct KnapsackReport {
    pub status: SolutionStatus,
    /// Ascending indices of the selected items; empty when non-optimal
    pub selected: Vec<usize>,
    /// Optimal total value; 0 when non-optimal
    pub total_value: f64,
}

/// Solve an instance. A non-optimal solver outcome yields an empty
/// selection with zero value, with the status preserved for reporting.
pub fn solve(instance: &KnapsackInstance) -> KnapsackReport {
    if instance.num_items() == 0 {
        return KnapsackReport {
            status: SolutionStatus::Optimal,
            selected: Vec::new(),
            total_value: 0.0,
        };
    }

    let solution = Solver::new().solve(&instance.to_problem());
    match solution.status {
        SolutionStatus::Optimal => {
            let selected = solution
                .values
                .iter()
                .enumerate()
                .filter(|&(_, &x)| x > 0.5)
                .map(|(i, _)| i)
                .collect();
            KnapsackReport {
                status: solution.status,
                selected,
                total_value: solution.objective_value,
            }
        }
        status => KnapsackReport {
            status,
            selected: Vec::new(),
            total_value: 0.0,
        },
    }
}
