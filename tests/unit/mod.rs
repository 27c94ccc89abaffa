//! Unit test modules.

mod color_parse_test;
mod colorblind_test;
mod contrast_test;
mod flatten_test;
mod scale_test;
