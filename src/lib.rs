pub mod configuration;

pub mod time {
    pub mod utility;
    pub mod daysinmonth;
    pub mod dateinput;
    pub mod validationerror;
    pub mod datediffcalculator;
}

pub use configuration::{Configuration, ConfigurationError};
pub use time::dateinput::DateInput;
pub use time::datediffcalculator::{compute, DateDiffCalculator};
pub use time::validationerror::ValidationError;
