//! Round resolution and session flow.
//!
//! - `round`: one round, from card collection to placement
//! - `session`: deals, rounds and the end-of-game check
//! - `standings`: final ranking

pub mod round;
pub mod session;
pub mod standings;

pub use round::{Play, Resolved, Round, RoundContext, RoundPhase, RoundReport};
pub use session::{GameSession, SessionStatus};
pub use standings::{Standing, Standings};
