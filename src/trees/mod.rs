//! The two demo trees and their shared leaf views.

pub mod concepts;
pub mod leaves;
pub mod practice;

pub use concepts::ConceptsView;
pub use practice::PracticeView;
