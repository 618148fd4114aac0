//! View state module for decoupling UI rendering from application state.
//!
//! UI components read an [`AppViewState`] instead of `App`, which breaks the
//! dependency cycle between the `app` and `ui` modules:
//!
//! ```text
//! App (owns state) --borrow--> AppViewState --> ui::render (pure)
//! ```

mod app_view;

pub use app_view::AppViewState;
