use enumtool::{Enumerated as _, OUT_OF_RANGE};
use enumtool_derive::Enumerated;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
#[allow(non_camel_case_types)]
pub enum EnumT {
    cero0,
    second1,
    the_third123,
    almost_done,
    last_the_fourth_4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumerated)]
#[enumtool(display, max_values = "4")]
pub enum Renamed {
    #[enumtool(rename = "first value")]
    First,
    /// Documented variants keep their docs.
    Second,
    #[enumtool(rename = "type")]
    r#Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
#[repr(u8)]
pub enum Represented {
    Zero,
    One,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
#[enumtool(crate = "::enumtool")]
enum Lonely {
    Alone,
}

mod nested {
    pub mod deeper {
        use enumtool_derive::Enumerated;

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
        pub enum Deep {
            Bottom,
        }
    }
}

#[test]
fn num_values() {
    assert_eq!(enumtool::num_values::<EnumT>(), Ok(5));
    assert_eq!(enumtool::num_values::<Renamed>(), Ok(3));
    assert_eq!(enumtool::num_values::<Represented>(), Ok(2));
    assert_eq!(enumtool::num_values::<Lonely>(), Ok(1));
}

#[rstest]
#[case(0, "cero0")]
#[case(1, "second1")]
#[case(2, "the_third123")]
#[case(3, "almost_done")]
#[case(4, "last_the_fourth_4")]
#[case(5, OUT_OF_RANGE)]
#[case(256, OUT_OF_RANGE)]
fn value_names(#[case] ordinal: usize, #[case] expected: &str) {
    assert_eq!(enumtool::value_name_at::<EnumT>(ordinal), Ok(expected));
}

#[test]
fn type_names() {
    assert_eq!(enumtool::type_display_name::<EnumT>(), Ok("EnumT"));
    assert_eq!(enumtool::type_display_name::<Lonely>(), Ok("Lonely"));
    assert_eq!(
        enumtool::type_display_name::<nested::deeper::Deep>(),
        Ok("Deep")
    );
}

#[test]
fn signatures() {
    assert_eq!(EnumT::value_signature(0), Some("EnumT::cero0"));
    assert_eq!(EnumT::value_signature(5), None);
    assert_eq!(Renamed::value_signature(2), Some("Renamed::type"));
}

#[test]
fn ordinals() {
    assert_eq!(EnumT::almost_done.ordinal(), 3);
    assert_eq!(EnumT::from_ordinal(3), Some(EnumT::almost_done));
    assert_eq!(EnumT::from_ordinal(5), None);
    assert_eq!(Represented::One.ordinal(), 1);
}

#[test]
fn max_values() {
    assert_eq!(EnumT::MAX_VALUES, enumtool::DEFAULT_MAX_VALUES);
    assert_eq!(Renamed::MAX_VALUES, 4);
}

#[rstest]
#[case(Renamed::First, "first value")]
#[case(Renamed::Second, "Second")]
#[case(Renamed::r#Third, "type")]
fn renamed(#[case] value: Renamed, #[case] expected: &str) {
    assert_eq!(enumtool::value_name(value), Ok(expected));
    assert_eq!(value.to_string(), expected);
}

#[test]
fn display_pads() {
    assert_eq!(format!("[{:>8}]", Renamed::Second), "[  Second]");
}

#[test]
fn boundaries() {
    let first = enumtool::first::<EnumT>().unwrap();
    let last = enumtool::last::<EnumT>().unwrap();
    assert_eq!(first, EnumT::cero0);
    assert_eq!(last, EnumT::last_the_fourth_4);
    assert_ne!(enumtool::value_name(first), Ok(OUT_OF_RANGE));
    assert_ne!(enumtool::value_name(last), Ok(OUT_OF_RANGE));
    assert_eq!(enumtool::next(last), None);
    assert_eq!(enumtool::next_wrapping(last), Ok(first));
}

#[test]
fn walk() {
    let mut ordinals = Vec::new();
    let mut value = enumtool::first::<EnumT>().ok();
    while let Some(current) = value {
        ordinals.push(current.ordinal());
        value = enumtool::next(current);
    }
    assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);
    assert_eq!(
        enumtool::values::<EnumT>().unwrap().collect::<Vec<_>>(),
        vec![
            EnumT::cero0,
            EnumT::second1,
            EnumT::the_third123,
            EnumT::almost_done,
            EnumT::last_the_fourth_4,
        ]
    );
}

#[test]
fn info() {
    assert_eq!(
        enumtool::enum_info::<EnumT>().unwrap().to_string(),
        "name of enum type    = EnumT\n\
         num of values        = 5\n\
         list of values names =\n   \
         cero0\n   \
         second1\n   \
         the_third123\n   \
         almost_done\n   \
         last_the_fourth_4\n"
    );
}
