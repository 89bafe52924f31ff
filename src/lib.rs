pub mod market;
pub mod report;
pub mod settings;
pub mod solver;

pub type Euro = f64;
pub type Percent = f64;
