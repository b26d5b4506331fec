//! Unary and set operators: project, select, union and minus.

mod project;
mod select;
mod set_ops;
