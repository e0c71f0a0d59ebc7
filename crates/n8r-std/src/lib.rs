mod error;
mod fs;
mod style;

pub mod print;
pub use error::N8rStdError;
pub use fs::Fs;
pub use style::is_no_color_set;
pub use style::Style;
