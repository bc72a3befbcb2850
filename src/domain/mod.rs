//! Domain types and DTOs
//!
//! These types define the data structures for trivia entities and the
//! request/response bodies of the API.

pub mod categories;
pub mod questions;
pub mod quizzes;

pub use categories::*;
pub use questions::*;
pub use quizzes::*;
