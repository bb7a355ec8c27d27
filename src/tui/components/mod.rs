// UI components - the building blocks of the composer's screen
//
// Each component renders one region from immutable app state; none of
// them mutate anything.

pub mod form;
pub mod preview;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use form::render as render_form;
pub use preview::render as render_preview;
pub use status_bar::render as render_status;
pub use title_bar::render as render_title;
