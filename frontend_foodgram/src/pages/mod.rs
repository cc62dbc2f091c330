pub mod technologies;
