mod aggregate;
mod rank;
mod sort;

pub use aggregate::{extreme_emission, world_population};
pub use rank::rank_countries;
pub use sort::{SortReport, quick_sort, quick_sort_by, swap};
