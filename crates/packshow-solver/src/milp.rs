use good_lp::{
    Expression, ProblemVariables, ResolutionError, Solution as _, SolverModel, Variable, constraint,
    default_solver, variable,
};

use crate::problem::{ConstraintOp, MipProblem, VarKind};
use crate::solution::Solution;

/// Solves MIP problems by lowering them into the backing solver library.
///
/// The backend model is built, solved, and released within a single
/// `solve` call; the `Solver` itself holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve the problem and map the backend outcome onto [`Solution`].
    pub fn solve(&self, problem: &MipProblem) -> Solution {
        let mut vars = ProblemVariables::new();
        let handles: Vec<Variable> = problem
            .variables
            .iter()
            .map(|spec| {
                let def = match spec.kind {
                    VarKind::Binary => variable().binary(),
                    VarKind::Continuous { min, max } => {
                        let mut def = variable().min(min);
                        if max.is_finite() {
                            def = def.max(max);
                        }
                        def
                    }
                };
                vars.add(def)
            })
            .collect();

        let objective = linear_expr(&handles, &problem.objective.coefficients);
        let unsolved = if problem.objective.maximize {
            vars.maximise(objective)
        } else {
            vars.minimise(objective)
        };

        let mut model = unsolved.using(default_solver);
        for c in &problem.constraints {
            let lhs = linear_expr(&handles, &c.coefficients);
            let cons = match c.op {
                ConstraintOp::Le => constraint::leq(lhs, c.rhs),
                ConstraintOp::Ge => constraint::geq(lhs, c.rhs),
                ConstraintOp::Eq => constraint::eq(lhs, c.rhs),
            };
            model = model.with(cons);
        }

        match model.solve() {
            Ok(backend) => {
                let values: Vec<f64> = handles.iter().map(|&v| backend.value(v)).collect();
                let objective_value = eval_objective(problem, &values);
                Solution::optimal(values, objective_value)
            }
            Err(ResolutionError::Infeasible) => Solution::infeasible(),
            Err(ResolutionError::Unbounded) => Solution::unbounded(),
            Err(_) => Solution::error(),
        }
    }
}

/// Recompute the objective from the stored coefficients, so the reported
/// value matches the returned variable values exactly.
fn eval_objective(problem: &MipProblem, values: &[f64]) -> f64 {
    problem
        .objective
        .coefficients
        .iter()
        .zip(values)
        .map(|(&c, &v)| c * v)
        .sum()
}

fn linear_expr(handles: &[Variable], coefficients: &[f64]) -> Expression {
    let mut expr = Expression::default();
    for (&v, &c) in handles.iter().zip(coefficients) {
        expr += c * v;
    }
    expr
}
