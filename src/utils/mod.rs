pub mod instagram;
pub mod respond;
