use enumtool_derive::Enumerated;

#[derive(Clone, Copy, PartialEq, Eq, Enumerated)]
pub enum Path {
    #[enumtool(rename = "a::b")]
    Nested,
}

fn main() {}
