pub mod batch;
pub mod book;
pub mod compare;
pub mod policy;
pub mod portfolio;
pub mod risk;
