pub mod params;
pub mod record;
pub mod response;
pub mod schema;

pub use params::*;
pub use record::*;
pub use response::*;
pub use schema::*;
