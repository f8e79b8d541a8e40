#[macro_use]
mod common;

#[cfg(test)]
mod _return {
    tests! {
        early in return is OK
        "early"
    }

    tests! {
        no_value in return is OK
        "nil"
    }

    tests! {
        in_while in return is OK
        "done"
    }

    tests! {
        at_top_level in return is ERR
        "[line 1] Error at 'return': Can't return from top-level code."
    }
}
