pub mod entities;
pub mod samples;
pub mod use_cases;
