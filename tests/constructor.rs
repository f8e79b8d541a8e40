#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        init_sets_fields in constructor is OK
        "7"
    }

    tests! {
        early_return_returns_this in constructor is OK
        "true"
    }

    tests! {
        reinit_returns_instance in constructor is OK
        "true"
        "2"
    }

    tests! {
        default_arity in constructor is ERR
        "Expected 0 arguments but got 1."
        "[line 2]"
    }

    tests! {
        init_arity in constructor is ERR
        "Expected 2 arguments but got 1."
        "[line 4]"
    }

    tests! {
        return_value_from_init in constructor is ERR
        "[line 3] Error at 'return': Can't return a value from an initializer."
    }
}
