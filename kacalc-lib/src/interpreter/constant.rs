use std::fmt;
use std::fmt::Formatter;

/// A named numeric literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    pub fn name(&self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    pub fn from_name(name: &str) -> Option<Constant> {
        Self::ALL
            .iter()
            .copied()
            .find(|constant| constant.name() == name)
    }
}

pub fn constant_names() -> impl Iterator<Item = &'static str> {
    Constant::ALL.iter().map(Constant::name)
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
