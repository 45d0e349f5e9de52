//! Constraint expression tree for version matching

mod comparison;
mod constraint_interface;
mod match_all;
mod match_none;
mod multi_constraint;
mod not_constraint;
mod operator;

pub use comparison::Comparison;
pub use constraint_interface::ConstraintInterface;
pub use match_all::MatchAllConstraint;
pub use match_none::MatchNoneConstraint;
pub use multi_constraint::MultiConstraint;
pub use not_constraint::NotConstraint;
pub use operator::Operator;
