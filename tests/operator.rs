#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        arithmetic in operator is OK
        "11"
        "2"
    }

    tests! {
        comparison in operator is OK
        "true"
        "true"
        "false"
        "true"
        "true"
    }

    tests! {
        compare_string_and_number in operator is ERR
        "Operands must be numbers."
        "[line 1]"
    }

    tests! {
        negate_string in operator is ERR
        "Operand must be a number."
        "[line 1]"
    }

    tests! {
        add_mixed_types in operator is ERR
        "Operands must be two numbers or two strings."
        "[line 1]"
    }
}
