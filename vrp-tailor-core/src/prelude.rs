//! This module reimports commonly used types.

pub use crate::models::common::{Cost, Demand, Distance, Duration, Location, TimeWindow, Timestamp};
pub use crate::models::matrix::{CostMatrix, CostMatrixBuilder};
pub use crate::models::problem::{Job, Problem, TransportCost, Vehicle, VehicleCostParams};
pub use crate::models::solution::{Route, RouteState, RouteStates, Solution};

pub use crate::solver::objectives::{ObjectiveKind, SolutionCost};
pub use crate::solver::termination::{CompositeTermination, Termination, TerminationState};
pub use crate::solver::tracking::{BestSolutionState, BestSolutionTracker, IterationListener, SolutionWriter};
pub use crate::solver::{IterationContext, Solver, SolverBuilder, SolverOutcome};

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::{GenericError, GenericResult, InputError};
