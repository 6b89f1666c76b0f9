//! App shell components: Masthead, Footer
//!
//! These components form the persistent UI framework around the main content area.

mod footer;
mod masthead;

pub use footer::Footer;
pub use masthead::Masthead;
