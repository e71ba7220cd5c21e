pub mod close;
pub mod edit;
pub mod more_vertical;
pub mod search;
pub mod star;
pub mod trash;
