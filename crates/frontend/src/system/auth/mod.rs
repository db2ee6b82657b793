//! Session token kept by the login flow; list pages only read it.

pub mod storage;
