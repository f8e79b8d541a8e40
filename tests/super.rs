#[macro_use]
mod common;

#[cfg(test)]
mod _super {
    tests! {
        call_super_method in super is OK
        "A"
        "B"
    }

    tests! {
        indirectly_inherited in super is OK
        "A.foo"
    }

    tests! {
        in_closure in super is OK
        "A"
    }

    tests! {
        no_superclass in super is ERR
        "[line 3] Error at 'super': Can't use 'super' in a class with no superclass."
    }

    tests! {
        outside_class in super is ERR
        "[line 1] Error at 'super': Can't use 'super' outside of a class."
    }

    tests! {
        missing_method in super is ERR
        "Undefined property 'bar'."
        "[line 5]"
    }
}
