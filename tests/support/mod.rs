#![allow(dead_code)]

pub mod files;
pub mod position;
pub mod source;
