#![allow(dead_code)]
pub mod response_handler_mock;
