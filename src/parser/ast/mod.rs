pub mod literals;
pub use literals::*;

pub mod identifier;
pub use identifier::*;

pub mod operators;
pub use operators::*;

pub mod node;
pub use node::{BetweenOperation, BinaryOperation, Function, Node, UnaryOperation};

pub mod expression;
pub use expression::*;

pub mod join;
pub use join::*;

pub mod order_by;
pub use order_by::*;

pub mod limit_offset_parser;
pub use limit_offset_parser::*;

pub mod select;
pub use select::*;

pub mod traversal;
pub use traversal::{walk, walk_mut, Visitor, VisitorMut};
