mod line_solver;

pub use line_solver::LineConstraintSolver;
