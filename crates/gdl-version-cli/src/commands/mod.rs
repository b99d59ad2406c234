pub mod check;
pub mod rc;
pub mod show;
