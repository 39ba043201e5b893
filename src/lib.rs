pub mod error;
pub mod filtering;
pub mod io;
pub mod processing;
pub mod sources;
pub mod table;
pub mod transformers;
