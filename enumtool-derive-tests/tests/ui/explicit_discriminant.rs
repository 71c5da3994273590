use enumtool_derive::Enumerated;

#[derive(Clone, Copy, PartialEq, Eq, Enumerated)]
pub enum Level {
    Low,
    High = 5,
}

fn main() {}
