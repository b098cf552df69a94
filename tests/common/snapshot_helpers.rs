#![allow(dead_code)]

use typeshow::printer::{declarations, render};

pub fn output() -> String {
    render(&declarations())
}

pub fn output_lines() -> Vec<String> {
    output().lines().map(str::to_string).collect()
}

/// Returns the printed value line and type line for the variable at `index`.
#[track_caller] // Report the location of the test failure, not inside this function
pub fn printed_pair(index: usize) -> (String, String) {
    let lines = output_lines();
    let value = lines
        .get(index * 2)
        .expect("The value line should be printed")
        .clone();
    let type_line = lines
        .get(index * 2 + 1)
        .expect("The type line should be printed")
        .clone();
    (value, type_line)
}
