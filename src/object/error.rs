// Copyright 2026 Sean Kelleher. All rights reserved.
// Use of this source code is governed by an MIT
// licence that can be found in the LICENCE file.

use snafu::Snafu;

use super::value::Value;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
    #[snafu(display("object doesn't contain property '{}'", name))]
    PropNotFound{name: String},
    #[snafu(display("undefined method '{}'", name))]
    UndefinedMethod{
        #[snafu(source(from(Error, Box::new)))]
        source: Box<Error>,
        name: String,
    },
    #[snafu(display(
        "can't call '{}' as a method ('{}' isn't callable)",
        name,
        render_type(v),
    ))]
    CannotCallNonFunc{name: String, v: Value},

    // `FuncErr` is never produced by property resolution; it's the variant
    // methods themselves use to signal failure.
    #[snafu(display("{}", msg))]
    FuncErr{msg: String},
}

pub fn render_type(v: &Value) -> String {
    let s =
        match v {
            Value::Null => "null",

            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",

            Value::List(_) => "list",
            Value::Object(_) => "object",

            Value::Func(_) => "func",
        };

    s.to_string()
}
