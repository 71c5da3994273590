use enumtool_derive::Enumerated;

#[derive(Clone, Copy, PartialEq, Eq, Enumerated)]
pub enum Shape {
    Point,
    Circle(u32),
}

fn main() {}
