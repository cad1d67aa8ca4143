//! Library components of the tabscan command-line tool.

#![allow(missing_docs)]

pub mod logging;
pub mod report;
