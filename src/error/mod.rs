//! Error handling for Luxxor.
//!
//! Navigation itself never fails; invalid transitions are ignored. The errors
//! here cover the ambient concerns around it:
//!
//! | Category | Source | Shown inline |
//! |----------|--------|--------------|
//! | User | Contact form validation | Yes |
//! | Network | Form relay delivery | Yes |
//! | System | Terminal and log file I/O | No |
//! | Configuration | Environment overrides | No |
//! | Client | Catalog export | No |

mod category;
mod contact;
mod luxxor_error;

pub use category::ErrorCategory;
pub use contact::ContactError;
pub use luxxor_error::LuxxorError;

/// Type alias for Results using [`LuxxorError`].
pub type LuxxorResult<T> = Result<T, LuxxorError>;
