pub mod food;
pub mod form;
pub mod outcome;
pub mod paging;
pub mod seq;
