use crate::interpreter::error::DomainError;
use std::f64::consts::PI;
use std::fmt;
use std::fmt::Formatter;

/// A named unary function that can be called as `name(expression)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    SquareRoot,
    Sine,
    Cosine,
    Tangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    /// Base 10.
    CommonLogarithm,
    NaturalLogarithm,
    /// Degrees to radians.
    Radians,
    /// Radians to degrees.
    Degrees,
}

impl Function {
    pub const ALL: [Function; 11] = [
        Function::SquareRoot,
        Function::Sine,
        Function::Cosine,
        Function::Tangent,
        Function::ArcSine,
        Function::ArcCosine,
        Function::ArcTangent,
        Function::CommonLogarithm,
        Function::NaturalLogarithm,
        Function::Radians,
        Function::Degrees,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Function::SquareRoot => "sqrt",
            Function::Sine => "sin",
            Function::Cosine => "cos",
            Function::Tangent => "tan",
            Function::ArcSine => "asin",
            Function::ArcCosine => "acos",
            Function::ArcTangent => "atan",
            Function::CommonLogarithm => "log",
            Function::NaturalLogarithm => "ln",
            Function::Radians => "rad",
            Function::Degrees => "deg",
        }
    }

    pub fn from_name(name: &str) -> Option<Function> {
        Self::ALL
            .iter()
            .copied()
            .find(|function| function.name() == name)
    }

    /// Applies the function, rejecting arguments outside of its real domain.
    /// Trigonometric functions work in radians.
    pub fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
        self.check_domain(x)?;
        let value = match self {
            Function::SquareRoot => x.sqrt(),
            Function::Sine => x.sin(),
            Function::Cosine => x.cos(),
            Function::Tangent => x.tan(),
            Function::ArcSine => x.asin(),
            Function::ArcCosine => x.acos(),
            Function::ArcTangent => x.atan(),
            Function::CommonLogarithm => x.log10(),
            Function::NaturalLogarithm => x.ln(),
            Function::Radians => x * PI / 180.0,
            Function::Degrees => x * 180.0 / PI,
        };
        Ok(value)
    }

    fn check_domain(&self, x: f64) -> Result<(), DomainError> {
        let requirement = match self {
            Function::SquareRoot if x < 0.0 => ">= 0",
            Function::CommonLogarithm | Function::NaturalLogarithm if x <= 0.0 => "> 0",
            Function::ArcSine | Function::ArcCosine if !(-1.0..=1.0).contains(&x) => {
                "between -1 and 1"
            }
            _ => return Ok(()),
        };
        Err(DomainError::Function {
            function: *self,
            argument: x,
            requirement,
        })
    }
}

/// Names of every callable function, in registry order.
pub fn function_names() -> impl Iterator<Item = &'static str> {
    Function::ALL.iter().map(Function::name)
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
