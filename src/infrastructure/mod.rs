pub mod acquisition;
pub mod logging;
pub mod seed_data;
pub mod sqlite;
