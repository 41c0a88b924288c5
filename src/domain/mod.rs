pub mod article;
pub mod state;

pub use article::{Article, EditAction};
pub use state::{Effect, Event, Screen, Session};
