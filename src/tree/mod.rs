pub mod conversion;
pub mod node;
pub mod path;

pub use conversion::*;
pub use node::*;
pub use path::*;
