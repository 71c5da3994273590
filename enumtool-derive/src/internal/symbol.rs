use std::fmt;

use syn::Path;

#[derive(Copy, Clone)]
pub struct Symbol(&'static str);

pub const ENUMTOOL: Symbol = Symbol("enumtool");
pub const CRATE: Symbol = Symbol("crate");
pub const MAX_VALUES: Symbol = Symbol("max_values");
pub const DISPLAY: Symbol = Symbol("display");
pub const RENAME: Symbol = Symbol("rename");

impl PartialEq<Symbol> for Path {
    fn eq(&self, word: &Symbol) -> bool {
        self.is_ident(word.0)
    }
}

impl PartialEq<Symbol> for &Path {
    fn eq(&self, word: &Symbol) -> bool {
        self.is_ident(word.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.0)
    }
}
