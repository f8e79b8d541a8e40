#[macro_use]
mod common;

#[cfg(test)]
mod logical_operator {
    tests! {
        short_circuit in logical_operator is OK
        "false"
        "true"
        "and taken"
        "yes"
    }

    tests! {
        value_semantics in logical_operator is OK
        "fallback"
        "2"
        "nil"
        "nil"
    }
}
