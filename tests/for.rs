#[macro_use]
mod common;

#[cfg(test)]
mod _for {
    tests! {
        counter in for is OK
        "0"
        "1"
        "2"
    }

    tests! {
        existing_variable in for is OK
        "0"
        "1"
        "2"
    }

    tests! {
        fib_sequence in for is OK
        "0"
        "1"
        "1"
        "2"
        "3"
        "5"
        "8"
    }
}
