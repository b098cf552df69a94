use std::io::Write;

use log::debug;

use crate::{error::PrintError, value::Value};

/// A named, immutable value.
#[derive(PartialEq, Debug, Clone)]
pub struct Variable {
    pub name: &'static str,
    pub value: Value,
}

impl Variable {
    pub fn new(name: &'static str, value: impl Into<Value>) -> Self {
        Variable {
            name,
            value: value.into(),
        }
    }
}

/// The fixed set of variables, in declaration order.
#[allow(clippy::excessive_precision)]
pub fn declarations() -> Vec<Variable> {
    let username: &str = "rohit";
    let is_logged_in: bool = false;
    let small_val: u8 = 255;
    let small_float: f64 = 255.123455555555555555;

    vec![
        Variable::new("username", username),
        Variable::new("isLoggedIn", is_logged_in),
        Variable::new("smallVal", small_val),
        Variable::new("smallFloat", small_float),
    ]
}

pub fn print_variable<W: Write>(out: &mut W, var: &Variable) -> Result<(), PrintError> {
    let type_name = var.value.type_name();
    debug!("printing {} ({})", var.name, type_name);
    writeln!(out, "{}", var.value)?;
    writeln!(out, "Variable is of type: {}", type_name)?;
    Ok(())
}

pub fn print_variables<W: Write>(out: &mut W, vars: &[Variable]) -> Result<(), PrintError> {
    for var in vars {
        print_variable(out, var)?;
    }
    out.flush()?;
    Ok(())
}

pub fn render(vars: &[Variable]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = print_variables(&mut buffer, vars);
    String::from_utf8_lossy(&buffer).into_owned()
}

pub fn run<W: Write>(out: &mut W) -> Result<(), PrintError> {
    print_variables(out, &declarations())
}
