pub mod panels;
pub mod plot;
pub mod screens;
pub mod table;
