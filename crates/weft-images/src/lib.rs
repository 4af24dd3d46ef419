//! Image CDN resize parameters and query-string construction.
//!
//! Asset URLs point at an image CDN that resizes, crops, re-encodes and
//! recolors on the fly, driven entirely by URL query parameters. This crate
//! models those parameters ([`ImageQuery`]) and serializes them to the exact
//! query string the service expects; it never touches pixels and never makes
//! a request.
//!
//! The parameter names (`w`, `h`, `q`, `r`, `fit`, `fm`, `f`, `bg`), the
//! value tokens and the emission order are the service's contract and are
//! preserved byte-for-byte. Values are not validated beyond their types; the
//! service is the authority on what is acceptable.

mod focus;
mod format;
mod query;
mod resize;

pub use focus::FocusArea;
pub use format::ImageFormat;
pub use query::ImageQuery;
pub use resize::ResizeBehaviour;
