pub mod country;
pub mod directory;
pub mod timeseries;

pub use country::Country;
pub use directory::CountryDirectory;
pub use timeseries::{EmissionTable, PopulationSeries};
