// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Syntax layer of the parser: unfolding, content lines and the component tree.
//!
//! ```text
//! Bytes → Line Unfolder → Lexer → Scanner → Tree Builder → Component Tree
//! ```

pub mod lexer;
pub mod scanner;
pub mod tree_builder;
pub mod unfold;

pub use crate::syntax::scanner::{ContentLineError, ParameterErrorKind, parse_property};
pub use crate::syntax::tree_builder::{BuiltTree, build_tree};
pub use crate::syntax::unfold::{LineReader, LogicalLine};
