#[macro_use]
mod common;

#[cfg(test)]
mod method {
    tests! {
        call in method is OK
        "hello"
    }

    tests! {
        with_arguments in method is OK
        "5"
    }

    tests! {
        bound_method_keeps_this in method is OK
        "Jane"
    }

    tests! {
        print_method in method is OK
        "<fn m>"
    }

    tests! {
        missing_arguments in method is ERR
        "Expected 1 arguments but got 0."
        "[line 4]"
    }
}
