//! Terminal search view: state, async dispatch, rendering, event loop.

pub mod controller;
pub mod dispatch;
pub mod state;
pub mod view;

pub use controller::{App, run};
pub use dispatch::{SearchDispatcher, SearchOutcome};
pub use state::{DisplayState, SearchRequest, SearchViewState, display_state};
pub use view::Renderer;
