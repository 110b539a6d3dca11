// Domain layer - Core screenshot logic

pub mod errors;
pub mod model;
pub mod rules;
