mod card;
mod french;
mod rank;
mod spanish;
mod suit;

pub use card::*;
pub use french::*;
pub use rank::*;
pub use spanish::*;
pub use suit::*;
