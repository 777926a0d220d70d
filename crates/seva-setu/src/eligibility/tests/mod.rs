mod advice;
mod catalog;
mod common;
mod questions;
mod routing;
