pub mod access;
pub mod advisor;
pub mod repository;
pub mod shared;
pub mod tables;

pub mod prelude {
    pub use crate::access::Gate;
    pub use crate::advisor::{Advisor, Focus, Mode, RoadStatus, Strategy, Tag};
    pub use crate::repository::{County, Repository, Township, TravelDate};
    pub use crate::shared::{Duration, Identifiable, Score, Time};
    pub use crate::tables::Tables;
}
