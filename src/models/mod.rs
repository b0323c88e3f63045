pub mod requests;
pub mod routine;
pub mod suggestion;
pub mod workout;
