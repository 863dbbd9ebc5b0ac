//! A fluent, in-memory builder for CSS stylesheets.
//!
//! ```
//! use cssforge_lib::{args, decls, make_stylesheet, Arg, Signature};
//!
//! let mut sheet = make_stylesheet();
//! sheet
//!     .import(args!["theme.css", "screen"])?
//!     .rule(args!["body", decls! { "margin" => 0 }])?
//!     .rule(vec![
//!         Arg::from("nav"),
//!         Arg::assembler(|ctx| {
//!             ctx.rule(args!["a", decls! { "color" => "red" }])?
//!                 .spec(args![":hover", decls! { "color" => "blue" }])?;
//!             Ok(())
//!         }),
//!     ])?;
//!
//! let css = sheet.render_css(Signature::Omitted);
//! assert!(css.contains("nav a\n{\n\tcolor: red;\n}"));
//! assert!(css.contains("nav:hover\n{\n\tcolor: blue;\n}"));
//! # Ok::<(), cssforge_lib::ArgumentError>(())
//! ```

pub mod builder;
pub mod decls;
pub mod document;
pub mod error;
pub mod model;
pub mod render;
pub mod stylesheet;

pub use builder::args::{Arg, Assembler};
pub use builder::combinator::Combination;
pub use builder::subcontext::Subcontext;
pub use decls::Declarations;
pub use document::{load, DocumentError, SheetDocument};
pub use error::ArgumentError;
pub use model::{Declaration, ImportDirective, ResolvedRule};
pub use render::{Signature, DEFAULT_SIGNATURE};
pub use stylesheet::{make_stylesheet, Stylesheet};
