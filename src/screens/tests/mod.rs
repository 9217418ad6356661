//! Screen processor and reducer tests.

mod support;
