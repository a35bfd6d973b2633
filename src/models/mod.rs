pub mod groups;
pub mod layout;
pub mod roster;
pub mod settings;

pub use groups::*;
pub use layout::*;
pub use roster::*;
pub use settings::*;
