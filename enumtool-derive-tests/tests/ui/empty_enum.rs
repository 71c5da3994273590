use enumtool_derive::Enumerated;

#[derive(Clone, Copy, PartialEq, Eq, Enumerated)]
pub enum Never {}

fn main() {}
