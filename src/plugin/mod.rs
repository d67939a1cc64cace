pub mod capture;
pub mod console;
