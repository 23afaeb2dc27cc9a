mod applications;
mod health_check;
mod helpers;
mod newsletter;

pub use applications::*;
pub use health_check::*;
pub use helpers::*;
pub use newsletter::*;
