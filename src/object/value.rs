// Copyright 2026 Sean Kelleher. All rights reserved.
// Use of this source code is governed by an MIT
// licence that can be found in the LICENCE file.

use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;

use super::error::Error;
use super::Object;

#[derive(Clone)]
pub enum Value {
    Null,

    Bool(bool),
    Int(i64),
    Str(String),

    List(ListRef),
    Object(ObjectRef),

    Func(Method),
}

pub type ListRef = Arc<Mutex<List>>;

pub type List = Vec<Value>;

pub type ObjectRef = Arc<Mutex<Object>>;

// `Method` is the type of callable slot values. A method receives the object
// it was invoked on as its receiver, so its body can read and write the
// receiver's other slots, and an argument vector. Failures it returns
// surface from `Object::invoke` unchanged.
pub type Method =
    Arc<dyn Fn(&mut Object, Vec<Value>) -> Result<Value, Error> + Send + Sync>;

pub fn new_null() -> Value {
    Value::Null
}

pub fn new_bool(b: bool) -> Value {
    Value::Bool(b)
}

pub fn new_int(n: i64) -> Value {
    Value::Int(n)
}

pub fn new_str(s: &str) -> Value {
    Value::Str(s.to_string())
}

pub fn new_list(list: List) -> Value {
    Value::List(Arc::new(Mutex::new(list)))
}

pub fn new_object(object: Object) -> Value {
    Value::Object(Arc::new(Mutex::new(object)))
}

pub fn new_func<F>(f: F) -> Value
where
    F: Fn(&mut Object, Vec<Value>) -> Result<Value, Error>
        + Send
        + Sync
        + 'static,
{
    Value::Func(Arc::new(f))
}

pub fn ref_eq<T>(a: &Arc<Mutex<T>>, b: &Arc<Mutex<T>>) -> bool {
    Arc::ptr_eq(a, b)
}

// `Value::Func` holds an `Arc<dyn Fn>`, which has no derived `Debug`, so
// `Debug` is implemented by hand. Callable values are rendered opaquely.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),

            Value::Bool(b) => write!(f, "Bool({:?})", b),
            Value::Int(n) => write!(f, "Int({:?})", n),
            Value::Str(s) => write!(f, "Str({:?})", s),

            Value::List(list) => {
                write!(f, "List({:?})", list.lock().unwrap())
            },
            Value::Object(object) => {
                write!(f, "Object({:?})", object.lock().unwrap())
            },

            Value::Func(_) => write!(f, "Func(..)"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ref_eq() {
        let list = new_list(vec![new_int(1)]);

        let shared =
            match (&list, &list.clone()) {
                (Value::List(a), Value::List(b)) => ref_eq(a, b),
                _ => panic!("expected lists"),
            };
        assert!(shared);

        let other = new_list(vec![new_int(1)]);
        let shared =
            match (&list, &other) {
                (Value::List(a), Value::List(b)) => ref_eq(a, b),
                _ => panic!("expected lists"),
            };
        assert!(!shared);
    }

    #[test]
    fn test_debug_rendering() {
        let tests = &[
            (new_null(), "Null"),
            (new_bool(true), "Bool(true)"),
            (new_int(42), "Int(42)"),
            (new_str("hi"), "Str(\"hi\")"),
            (new_func(|_, _| Ok(new_null())), "Func(..)"),
        ];

        for (v, exp) in tests {
            assert_eq!(&format!("{:?}", v), exp);
        }
    }
}
