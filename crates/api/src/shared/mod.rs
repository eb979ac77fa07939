pub mod pagination;
pub mod usecase;
