//! Composite document tree.
//!
//! A document is a tree of [`domain::Node`]s: `Document` and `Section`
//! containers holding ordered children, `Paragraph` leaves holding text. The
//! whole tree renders recursively, one line per node, indented by depth.
//!
//! ```
//! use doctree::domain::Node;
//!
//! let mut section = Node::section("Введение");
//! section.add(Node::paragraph("Это параграф введения.")).unwrap();
//! let mut document = Node::document("Отчёт");
//! document.add(section).unwrap();
//!
//! assert_eq!(
//!     document.render(0),
//!     "Документ: Отчёт\n  Раздел: Введение\n    Это параграф введения.\n"
//! );
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
