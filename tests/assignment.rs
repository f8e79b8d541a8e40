#[macro_use]
mod common;

#[cfg(test)]
mod assignment {
    tests! {
        returns_value in assignment is OK
        "2"
        "2"
    }

    tests! {
        chained in assignment is OK
        "3"
        "3"
    }

    tests! {
        invalid_target in assignment is ERR
        "[line 1] Error at '=': Invalid assignment target."
    }
}
