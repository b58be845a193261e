mod driver;

pub use driver::{Driver, INITIAL_RENDER_EVERY};
