mod milp;
mod problem;
mod solution;

pub use milp::Solver;
pub use problem::{Constraint, ConstraintOp, MipProblem, Objective, VarKind, VariableSpec};
pub use solution::{Solution, SolutionStatus};
