pub mod actor;
pub mod movie;

pub use actor::{Actor, ActorChanges, NewActor};
pub use movie::{Movie, MovieChanges, NewMovie};
