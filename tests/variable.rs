#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        define_and_read in variable is OK
        "1"
        "nil"
    }

    tests! {
        shadowing in variable is OK
        "local"
        "global"
    }

    tests! {
        redefine_global in variable is OK
        "2"
    }

    tests! {
        use_in_own_initializer in variable is ERR
        "[line 3] Error at 'a': Can't read local variable in its own initializer."
    }

    tests! {
        duplicate_local in variable is ERR
        "[line 3] Error at 'a': Already a variable with this name in this scope."
    }

    tests! {
        undefined_global in variable is ERR
        "Undefined variable 'unknown'."
        "[line 1]"
    }

    tests! {
        assign_undefined in variable is ERR
        "Undefined variable 'unknown'."
        "[line 1]"
    }
}
