#[macro_use]
mod common;

#[cfg(test)]
mod call {
    tests! {
        call_number in call is ERR
        "Can only call functions and classes."
        "[line 2]"
    }

    tests! {
        call_string in call is ERR
        "Can only call functions and classes."
        "[line 1]"
    }

    tests! {
        call_nil in call is ERR
        "Can only call functions and classes."
        "[line 1]"
    }
}
