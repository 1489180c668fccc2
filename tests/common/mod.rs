pub mod reference;
pub mod synthetic;
