#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        literals in number is OK
        "123"
        "2.5"
        "-0.5"
        "0"
    }

    tests! {
        precedence in number is OK
        "7"
        "9"
    }

    tests! {
        division in number is OK
        "2.5"
        "2"
    }
}
