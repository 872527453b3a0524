pub mod client;

pub use crate::domain::model::{AddressRecord, LookupResult};
pub use crate::domain::ports::{Connection, Transport};
pub use crate::utils::error::Result;
